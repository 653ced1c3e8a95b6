//! Search query value object

use super::error::QueryError;
use serde::{Deserialize, Serialize};

/// A validated free-text search query (Value Object)
///
/// Surrounding whitespace is trimmed and the remaining text must contain at
/// least [`SearchQuery::MIN_CHARS`] characters. Length is counted in Unicode
/// scalar values, so accented Spanish text is not penalised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    content: String,
}

impl SearchQuery {
    /// Minimum number of characters a query must contain.
    pub const MIN_CHARS: usize = 5;

    /// Try to create a new query, rejecting empty or too-short input
    pub fn try_new(content: impl AsRef<str>) -> Result<Self, QueryError> {
        let trimmed = content.as_ref().trim();
        if trimmed.is_empty() {
            return Err(QueryError::Empty);
        }

        let actual = trimmed.chars().count();
        if actual < Self::MIN_CHARS {
            return Err(QueryError::TooShort {
                actual,
                minimum: Self::MIN_CHARS,
            });
        }

        Ok(Self {
            content: trimmed.to_string(),
        })
    }

    /// Get the query content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<&str> for SearchQuery {
    type Error = QueryError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        SearchQuery::try_new(s)
    }
}
