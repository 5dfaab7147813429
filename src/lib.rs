//! Look up a LeetCode user's solved-problem counts from their profile URL.

pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod leetcode;
pub mod render;
pub mod stats;

pub use app::{Report, analyze};
pub use config::{Config, OutputFormat};
pub use error::{AppError, FetchError};
pub use extract::{Username, extract};
pub use leetcode::LeetCodeClient;
pub use stats::StatsRecord;
