//! Search backend configuration from TOML (`[search]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Firecrawl search API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSearchConfig {
    /// Environment variable name for the API key (default: "FIRECRAWL_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended — use env var instead).
    pub api_key: Option<String>,
    /// Base URL for the Firecrawl API.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout_seconds: u64,
}

impl Default for FileSearchConfig {
    fn default() -> Self {
        Self {
            api_key_env: "FIRECRAWL_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.firecrawl.dev".to_string(),
            timeout_seconds: 30,
        }
    }
}

impl FileSearchConfig {
    /// Explicit key first, then the named environment variable. Blank values count as absent.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|key| !key.trim().is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_key_wins() {
        let config = FileSearchConfig {
            api_key: Some("fc-direct".to_string()),
            api_key_env: "ATIENDE_TEST_UNSET_FIRECRAWL_KEY".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key(), Some("fc-direct".to_string()));
    }

    #[test]
    fn test_missing_key_is_none() {
        let config = FileSearchConfig {
            api_key_env: "ATIENDE_TEST_UNSET_FIRECRAWL_KEY".to_string(),
            ..Default::default()
        };
        assert!(config.resolve_api_key().is_none());
    }

    #[test]
    fn test_blank_key_is_none() {
        let config = FileSearchConfig {
            api_key: Some("   ".to_string()),
            api_key_env: "ATIENDE_TEST_UNSET_FIRECRAWL_KEY".to_string(),
            ..Default::default()
        };
        assert!(config.resolve_api_key().is_none());
    }

    #[test]
    fn test_blank_explicit_key_falls_back_to_env() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("ATIENDE_TEST_FIRECRAWL_KEY", "fc-from-env");

            let config = FileSearchConfig {
                api_key: Some(String::new()),
                api_key_env: "ATIENDE_TEST_FIRECRAWL_KEY".to_string(),
                ..Default::default()
            };
            assert_eq!(config.resolve_api_key(), Some("fc-from-env".to_string()));
            Ok(())
        });
    }
}
