use crate::config::Config;
use crate::error::AppError;
use crate::extract::{Username, extract};
use crate::leetcode::LeetCodeClient;
use crate::render::export_file_name;
use crate::stats::StatsRecord;
use tracing::{info, warn};

/// Result of one successful lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub username: Username,
    pub record: StatsRecord,
    /// File name offered for the JSON export.
    pub export_name: String,
}

/// Extract the username from `profile_url` and fetch its stats.
pub async fn analyze(profile_url: &str, config: &Config) -> Result<Report, AppError> {
    let username = extract(profile_url).ok_or_else(|| {
        info!(profile_url, "no username in profile URL");
        AppError::InvalidUrl
    })?;

    let client = LeetCodeClient::from_config(config).map_err(AppError::FetchFailure)?;
    let record = client.fetch_stats(&username).await.map_err(|e| {
        warn!("stats fetch for {username} failed: {e}");
        AppError::FetchFailure(e)
    })?;

    Ok(Report {
        export_name: export_file_name(&username),
        username,
        record,
    })
}
