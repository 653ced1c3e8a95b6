//! Configuration file loading for atiende
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment variables prefixed with `ATIENDE_` (`__` separates nesting)
//! 2. `--config <path>` specified file
//! 3. Project root: `./atiende.toml`
//! 4. Global: `~/.config/atiende/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileAgentConfig, FileConfig, FileLlmConfig, FileLoggingConfig,
    FileSearchConfig, FileServerConfig,
};
pub use loader::ConfigLoader;
