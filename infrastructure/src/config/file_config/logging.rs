//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL transcript of received messages and agent replies
    pub conversation_log: Option<PathBuf>,
    /// Directory for daily-rotated operational logs
    pub log_dir: Option<PathBuf>,
}
