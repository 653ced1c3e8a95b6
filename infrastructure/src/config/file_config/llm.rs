//! Chat-completion provider configuration from TOML (`[llm]` section)

use atiende_domain::Model;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// OpenAI-compatible API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLlmConfig {
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended — use env var instead).
    pub api_key: Option<String>,
    /// Base URL including the version segment (can be overridden for compatible servers).
    pub base_url: String,
    /// Model name (default: "gpt-4o-mini").
    pub model: String,
    /// Max tokens per response; provider default when unset.
    pub max_tokens: Option<u32>,
    /// Per-request timeout.
    pub timeout_seconds: u64,
}

impl Default for FileLlmConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            model: Model::default().to_string(),
            max_tokens: None,
            timeout_seconds: 60,
        }
    }
}

impl FileLlmConfig {
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|key| !key.trim().is_empty())
    }

    pub fn parse_model(&self) -> Model {
        self.model.trim().parse().unwrap_or_default()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
