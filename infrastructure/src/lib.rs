//! Infrastructure layer for atiende
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod agent;
pub mod config;
pub mod logging;
pub mod providers;
pub mod search;
pub mod tools;

// Re-export commonly used types
pub use agent::CitizenAgentFactory;
pub use config::{
    ConfigLoader, ConfigValidationError, FileAgentConfig, FileConfig, FileLlmConfig,
    FileLoggingConfig, FileSearchConfig, FileServerConfig,
};
pub use logging::JsonlConversationLogger;
pub use providers::{OpenAiClient, OpenAiGateway};
pub use search::FirecrawlClient;
pub use tools::{JsonSchemaToolConverter, RetrievalToolExecutor};
