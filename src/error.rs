use thiserror::Error;

/// Why a stats fetch produced nothing.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error sending GraphQL request: {0}")]
    Network(#[from] reqwest::Error),

    #[error("LeetCode API returned HTTP {0}")]
    Status(u16),

    #[error("malformed GraphQL response: {0}")]
    MalformedResponse(String),

    #[error("no matching user (profile missing or private)")]
    UserNotFound,
}

/// The two outcomes shown to the user when no stats can be produced.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Could not extract a valid username from the URL.")]
    InvalidUrl,

    #[error("Could not fetch stats. The profile might be private or invalid.")]
    FetchFailure(#[source] FetchError),
}
