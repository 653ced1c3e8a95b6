//! Search provider port
//!
//! Defines the interface to the external web search/scrape capability.

use async_trait::async_trait;
use atiende_domain::search::{SearchRequest, SearchResponse};
use thiserror::Error;

/// Errors raised by a search backend.
///
/// These never reach the model: the retrieval use case logs them and
/// answers with a fixed service-unavailable message instead.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Missing API key: set {0} or search.api_key")]
    MissingApiKey(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Timeout")]
    Timeout,

    #[error("Search request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Port for the external search capability
///
/// Implementations perform exactly one backend call per invocation; there
/// are no retries at this layer.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Run a search and return whatever result list the backend produced
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError>;
}
