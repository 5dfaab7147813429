use clap::{Parser, ValueEnum};
use leetstat::config::{Config, DEFAULT_ENDPOINT, OutputFormat};
use std::path::PathBuf;
use std::time::Duration;

/// Fetch a LeetCode user's solved-problem counts by difficulty.
#[derive(Debug, Parser)]
#[command(name = "leetstat", version, about, long_about = None)]
pub struct Args {
    /// Profile URL, e.g. https://leetcode.com/johndoe/ (prompted for when omitted).
    pub url: Option<String>,

    /// How to print the stats.
    #[arg(long, value_enum, default_value_t = Format::Json)]
    pub format: Format,

    /// Write <username>_leetcode_stats.json after a successful fetch.
    #[arg(long)]
    pub save: bool,

    /// Directory the JSON export is written to.
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Give up on the request after this many seconds (waits forever by default).
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// GraphQL endpoint to query.
    #[arg(long, env = "LEETSTAT_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Table,
}

impl Args {
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "leetstat=warn",
            1 => "leetstat=info",
            _ => "leetstat=debug",
        }
    }

    pub fn to_config(&self) -> Config {
        Config {
            endpoint: self.endpoint.clone(),
            timeout: self.timeout.map(Duration::from_secs),
            format: match self.format {
                Format::Json => OutputFormat::Json,
                Format::Table => OutputFormat::Table,
            },
            save: self.save,
            output_dir: self.output_dir.clone(),
        }
    }
}
