//! extract.rs
//!
//! Pulls a username out of a leetcode.com profile URL.
//!
//! The match is a plain substring search for `leetcode.com/` followed by one
//! path segment. Segments that name site sections rather than users are
//! rejected with a fixed denylist; this is a heuristic, not a validation of
//! the URL's structure.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// First path segment after the domain, with an optional trailing slash.
static PROFILE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"leetcode\.com/([^/]+)/?").expect("valid profile regex"));

/// Path segments that belong to site sections, never to users.
pub const RESERVED_SEGMENTS: [&str; 5] = ["problems", "contest", "discuss", "explore", "studyplan"];

/// A non-empty, non-reserved profile path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Accepts `raw` as a username if it is non-empty, has no `/` and is not reserved.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() || raw.contains('/') || RESERVED_SEGMENTS.contains(&raw) {
            return None;
        }
        Some(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns the username in `profile_url`, or `None` when there is no
/// `leetcode.com/<segment>` or the segment is reserved.
pub fn extract(profile_url: &str) -> Option<Username> {
    let segment = PROFILE_REGEX.captures(profile_url)?.get(1)?.as_str();
    Username::parse(segment)
}
