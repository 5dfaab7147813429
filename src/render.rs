use crate::extract::Username;
use crate::stats::StatsRecord;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Mime type of the exported stats file.
pub const EXPORT_MIME: &str = "application/json";

const MIN_ROW_WIDTH: usize = 24;

/// The record as 2-space indented JSON.
pub fn render_json(record: &StatsRecord) -> String {
    // A struct of plain integers always serializes.
    serde_json::to_string_pretty(record).unwrap_or_default()
}

/// Name of the export file offered for `username`.
pub fn export_file_name(username: &Username) -> String {
    format!("{username}_leetcode_stats.json")
}

/// Writes the JSON rendering into `dir` and returns the file's path.
pub fn write_export(dir: &Path, username: &Username, record: &StatsRecord) -> Result<PathBuf> {
    let path = dir.join(export_file_name(username));
    let mut json = render_json(record);
    json.push('\n');
    fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

/// Key, dot leader and value, padded so every value ends at `align_width`.
pub fn build_stat_row(key: &str, value: &str, align_width: usize) -> String {
    let key_part = format!("{key}: ");
    let available = align_width.saturating_sub(key_part.len() + value.len());

    let dots = match available {
        0 => "".to_string(),
        1 => " ".to_string(),
        2 => ". ".to_string(),
        n => format!("{} ", ".".repeat(n - 1)),
    };

    format!("{key_part}{dots}{value}")
}

fn build_header_line(label: &str, align_width: usize) -> String {
    let base = format!("{label} ");
    let dash_count = align_width.saturating_sub(base.len());
    format!("{base}{}", "-".repeat(dash_count))
}

/// Aligned plain-text table: a header naming the user, then one row per difficulty.
pub fn render_table(username: &Username, record: &StatsRecord) -> String {
    let rows = record.rows();
    let values: Vec<String> = rows.iter().map(|(_, v)| v.to_string()).collect();

    let widest = rows
        .iter()
        .zip(&values)
        .map(|((k, _), v)| k.len() + v.len() + 4)
        .max()
        .unwrap_or(0);
    let align_width = widest
        .max(MIN_ROW_WIDTH)
        .max(username.as_str().len() + 2);

    let mut out = build_header_line(username.as_str(), align_width);
    for ((key, _), value) in rows.iter().zip(&values) {
        out.push('\n');
        out.push_str(&build_stat_row(key, value, align_width));
    }
    out
}
