//! Domain layer for atiende
//!
//! This crate contains the core types of the citizen-service assistant.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Search query**: a validated question of at least five characters
//! - **Trusted documents**: search results restricted to the ChileAtiende
//!   fichas namespace, excluding PDF attachments
//! - **Rendered document**: one result formatted through the fixed template
//! - **Tools**: the capabilities the dialogue agent may call

pub mod core;
pub mod prompt;
pub mod search;
pub mod session;
pub mod tool;
pub mod util;

// Re-export commonly used types
pub use core::{error::QueryError, model::Model, query::SearchQuery};
pub use prompt::{AGENT_INSTRUCTIONS, DocumentTemplate, SEARCH_INSTRUCTION};
pub use search::{
    DocumentFilter, RawResult, ScrapeFormat, SearchOutcome, SearchRequest, SearchResponse,
};
pub use session::{ContentBlock, LlmResponse, StopReason};
pub use tool::{ToolCall, ToolDefinition, ToolError, ToolParameter, ToolResult, ToolSpec};
