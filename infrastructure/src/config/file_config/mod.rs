//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use application types where appropriate.

mod agent;
mod llm;
mod logging;
mod search;
mod server;

pub use agent::FileAgentConfig;
pub use llm::FileLlmConfig;
pub use logging::FileLoggingConfig;
pub use search::FileSearchConfig;
pub use server::FileServerConfig;

use atiende_application::RetrievalConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("server.port cannot be 0")]
    InvalidPort,

    #[error("retrieval.limit must be at least 1")]
    InvalidLimit,

    #[error("retrieval.trusted_prefix cannot be empty")]
    EmptyTrustedPrefix,

    #[error("llm.model cannot be empty")]
    EmptyModelName,

    #[error("{0}.timeout_seconds cannot be 0")]
    InvalidTimeout(&'static str),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP listener settings
    pub server: FileServerConfig,
    /// Search backend (Firecrawl) settings
    pub search: FileSearchConfig,
    /// Fixed search parameters and trusted-document filter
    pub retrieval: RetrievalConfig,
    /// Chat-completion provider settings
    pub llm: FileLlmConfig,
    /// Dialogue agent settings
    pub agent: FileAgentConfig,
    /// Log file locations
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration, stopping at the first problem.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.server.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }

        if self.retrieval.limit == 0 {
            return Err(ConfigValidationError::InvalidLimit);
        }

        if self.retrieval.trusted_prefix.trim().is_empty() {
            return Err(ConfigValidationError::EmptyTrustedPrefix);
        }

        if self.llm.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }

        if self.search.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout("search"));
        }

        if self.llm.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout("llm"));
        }

        Ok(())
    }
}
