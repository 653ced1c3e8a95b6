//! Search domain module
//!
//! Types for turning a free-text question into a bounded set of trusted,
//! rendered documents:
//!
//! ```text
//! SearchRequest ──▶ (backend) ──▶ SearchResponse ──▶ DocumentFilter ──▶ DocumentTemplate
//!                                   data: [RawResult]     prefix/suffix       numbered markdown
//! ```
//!
//! The backend call itself is a port in the application layer; everything
//! here is pure.

pub mod entities;
pub mod filter;
pub mod outcome;

pub use entities::{RawResult, ScrapeFormat, SearchRequest, SearchResponse};
pub use filter::DocumentFilter;
pub use outcome::SearchOutcome;
