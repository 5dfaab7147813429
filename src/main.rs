mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Args;
use leetstat::config::OutputFormat;
use leetstat::render::{self, EXPORT_MIME};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let config = args.to_config();
    let profile_url = match args.url {
        Some(url) => url,
        None => prompt_for_url()?,
    };

    let report = leetstat::analyze(profile_url.trim(), &config).await?;
    eprintln!("Data fetched for `{}`", report.username);

    match config.format {
        OutputFormat::Json => println!("{}", render::render_json(&report.record)),
        OutputFormat::Table => println!(
            "{}",
            render::render_table(&report.username, &report.record)
        ),
    }

    if config.save {
        let path = render::write_export(&config.output_dir, &report.username, &report.record)?;
        eprintln!("Saved {}", path.display());
    } else {
        eprintln!(
            "Download: {} ({EXPORT_MIME}), rerun with --save to write it",
            report.export_name
        );
    }

    Ok(())
}

fn prompt_for_url() -> Result<String> {
    eprint!("Enter LeetCode profile URL (e.g. https://leetcode.com/johndoe/): ");
    io::stderr().flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read profile URL from stdin")?;
    Ok(line)
}
