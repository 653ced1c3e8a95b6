//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] — the chat model the assistant runs on
//! - [`query::SearchQuery`] — a validated free-text search query
//! - [`error::QueryError`] — why a query was rejected

pub mod error;
pub mod model;
pub mod query;
