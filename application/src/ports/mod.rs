//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod agent;
pub mod conversation_logger;
pub mod llm_gateway;
pub mod search_provider;
pub mod tool_executor;
pub mod tool_schema;
