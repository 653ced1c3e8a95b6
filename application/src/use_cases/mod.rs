//! Use cases (application services)

pub mod agent_provider;
pub mod handle_message;
pub mod search_documents;
pub mod tool_calling_agent;
