//! Trusted-namespace filtering of raw search results

use super::entities::RawResult;
use serde::{Deserialize, Serialize};

/// Allowlist + denylist over result URLs.
///
/// A result survives when its URL starts with `trusted_prefix` and does not
/// end with `excluded_suffix`. A missing URL is treated as the empty string
/// and therefore never matches a non-empty prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFilter {
    pub trusted_prefix: String,
    pub excluded_suffix: String,
}

impl DocumentFilter {
    pub fn new(trusted_prefix: impl Into<String>, excluded_suffix: impl Into<String>) -> Self {
        Self {
            trusted_prefix: trusted_prefix.into(),
            excluded_suffix: excluded_suffix.into(),
        }
    }

    pub fn accepts(&self, result: &RawResult) -> bool {
        let url = result.url_or_empty();
        if !url.starts_with(&self.trusted_prefix) {
            return false;
        }
        self.excluded_suffix.is_empty() || !url.ends_with(&self.excluded_suffix)
    }

    /// Keep accepted results, preserving upstream order
    pub fn apply(&self, results: Vec<RawResult>) -> Vec<RawResult> {
        results.into_iter().filter(|r| self.accepts(r)).collect()
    }
}
