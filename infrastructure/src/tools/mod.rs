//! Tool adapters — the tool offered to the model and its schema conversion.

pub mod retrieval;
pub mod schema;

pub use retrieval::{RetrievalToolExecutor, SEARCH, search_definition};
pub use schema::JsonSchemaToolConverter;
