//! Domain error types

use thiserror::Error;

/// Reasons a free-text query is rejected before any search is attempted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Query is empty")]
    Empty,

    #[error("Query too short: {actual} characters (minimum {minimum})")]
    TooShort { actual: usize, minimum: usize },
}

impl QueryError {
    /// Check if the query was rejected for being empty after trimming
    pub fn is_empty(&self) -> bool {
        matches!(self, QueryError::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_short_display() {
        let error = QueryError::TooShort {
            actual: 3,
            minimum: 5,
        };
        assert_eq!(
            error.to_string(),
            "Query too short: 3 characters (minimum 5)"
        );
    }

    #[test]
    fn test_is_empty_check() {
        assert!(QueryError::Empty.is_empty());
        assert!(
            !QueryError::TooShort {
                actual: 1,
                minimum: 5
            }
            .is_empty()
        );
    }
}
