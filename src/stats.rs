use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Accepted-submission counts for one user, in the shape we display and export.
///
/// `total` is whatever upstream reports for the `All` bucket. It can be larger
/// than `easy + medium + hard`, so it is never recomputed here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsRecord {
    #[serde(rename = "Easy")]
    pub easy: u64,
    #[serde(rename = "Medium")]
    pub medium: u64,
    #[serde(rename = "Hard")]
    pub hard: u64,
    #[serde(rename = "Total")]
    pub total: u64,
}

impl StatsRecord {
    /// Build a record from a difficulty -> count map, defaulting missing labels to 0.
    pub fn from_counts(counts: &HashMap<String, u64>) -> Self {
        let get = |label: &str| counts.get(label).copied().unwrap_or(0);
        Self {
            easy: get("Easy"),
            medium: get("Medium"),
            hard: get("Hard"),
            total: get("All"),
        }
    }

    /// Rows in display order, keyed by their exported labels.
    pub fn rows(&self) -> [(&'static str, u64); 4] {
        [
            ("Easy", self.easy),
            ("Medium", self.medium),
            ("Hard", self.hard),
            ("Total", self.total),
        ]
    }
}
