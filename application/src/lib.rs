//! Application layer for atiende
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ExecutionParams, RetrievalConfig};
pub use ports::{
    agent::{AgentError, AgentFactory, ConversationalAgent},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{GatewayError, LlmGateway, LlmSession, ToolResultMessage},
    search_provider::{SearchError, SearchProvider},
    tool_executor::ToolExecutorPort,
    tool_schema::ToolSchemaPort,
};
pub use use_cases::agent_provider::AgentProvider;
pub use use_cases::handle_message::{APOLOGY_PREFIX, MessageHandler};
pub use use_cases::search_documents::SearchDocumentsUseCase;
pub use use_cases::tool_calling_agent::ToolCallingAgent;
