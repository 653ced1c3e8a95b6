//! Application-level configuration.
//!
//! Value types that control how use cases behave:
//!
//! - [`ExecutionParams`] — dialogue loop control (tool turns)
//! - [`RetrievalConfig`] — search parameters and the trusted-document filter

pub mod execution_params;
pub mod retrieval;

pub use execution_params::ExecutionParams;
pub use retrieval::RetrievalConfig;
