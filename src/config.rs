use std::path::PathBuf;
use std::time::Duration;

/// Public GraphQL endpoint queried for profile stats.
pub const DEFAULT_ENDPOINT: &str = "https://leetcode.com/graphql";

/// How a fetched record is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Table,
}

/// Runtime settings for one lookup.
#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: String,
    /// `None` waits for the server indefinitely.
    pub timeout: Option<Duration>,
    pub format: OutputFormat,
    /// Write `<username>_leetcode_stats.json` into `output_dir` after a successful fetch.
    pub save: bool,
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: None,
            format: OutputFormat::default(),
            save: false,
            output_dir: PathBuf::from("."),
        }
    }
}
