use crate::config::Config;
use crate::error::FetchError;
use crate::extract::Username;
use crate::stats::StatsRecord;
use reqwest::header::{CONTENT_TYPE, REFERER};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

const PROFILE_QUERY: &str = r#"
query getUserProfile($username: String!) {
  matchedUser(username: $username) {
    submitStats {
      acSubmissionNum {
        difficulty
        count
      }
    }
  }
}
"#;

#[derive(Deserialize)]
struct ProfileResponse {
    data: Option<ProfileData>,
    errors: Option<Value>,
}

#[derive(Deserialize)]
struct ProfileData {
    #[serde(rename = "matchedUser")]
    matched_user: Option<MatchedUser>,
}

#[derive(Deserialize)]
struct MatchedUser {
    #[serde(rename = "submitStats")]
    submit_stats: SubmitStats,
}

#[derive(Deserialize)]
struct SubmitStats {
    #[serde(rename = "acSubmissionNum")]
    ac_submission_num: Vec<DifficultyCount>,
}

#[derive(Deserialize)]
struct DifficultyCount {
    difficulty: String,
    count: u64,
}

#[derive(Clone)]
pub struct LeetCodeClient {
    endpoint: Arc<String>,
    http: Arc<Client>,
}

impl LeetCodeClient {
    /// Create a client for `endpoint`, applying `timeout` to the whole request when set.
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            endpoint: Arc::new(endpoint.into()),
            http: Arc::new(builder.build()?),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        Self::new(config.endpoint.clone(), config.timeout)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Accepted-submission counts for `username`, or `None` on any failure.
    pub async fn fetch(&self, username: &Username) -> Option<StatsRecord> {
        match self.fetch_stats(username).await {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("stats fetch for {username} failed: {e}");
                None
            }
        }
    }

    /// One GraphQL round trip. No retries: the first failure is returned.
    pub async fn fetch_stats(&self, username: &Username) -> Result<StatsRecord, FetchError> {
        let body = serde_json::json!({
            "operationName": "getUserProfile",
            "variables": { "username": username.as_str() },
            "query": PROFILE_QUERY,
        });

        debug!(endpoint = %self.endpoint, %username, "sending getUserProfile");

        let resp = self
            .http
            .post(self.endpoint.as_str())
            .header(CONTENT_TYPE, "application/json")
            .header(REFERER, format!("https://leetcode.com/{username}/"))
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }

        let bytes = resp.bytes().await?;
        let record = parse_profile_response(&bytes)?;
        info!(%username, ?record, "fetched stats");
        Ok(record)
    }
}

/// Reduce a raw `getUserProfile` response body to a `StatsRecord`.
pub fn parse_profile_response(body: &[u8]) -> Result<StatsRecord, FetchError> {
    let parsed: ProfileResponse = serde_json::from_slice(body)
        .map_err(|e| FetchError::MalformedResponse(e.to_string()))?;

    if let Some(errors) = &parsed.errors {
        debug!("GraphQL reported errors: {errors}");
    }

    let user = parsed
        .data
        .ok_or_else(|| FetchError::MalformedResponse("missing `data`".to_string()))?
        .matched_user
        .ok_or(FetchError::UserNotFound)?;

    // Later entries for the same label overwrite earlier ones.
    let counts: HashMap<String, u64> = user
        .submit_stats
        .ac_submission_num
        .into_iter()
        .map(|entry| (entry.difficulty, entry.count))
        .collect();

    Ok(StatsRecord::from_counts(&counts))
}
