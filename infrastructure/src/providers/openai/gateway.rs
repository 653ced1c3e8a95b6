//! OpenAI-compatible LLM gateway.

use super::session::OpenAiSession;
use super::types::{self, ChatRequest, ChatResponse};
use async_trait::async_trait;
use atiende_application::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use atiende_domain::Model;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// HTTP client shared by the gateway and all of its sessions.
pub struct OpenAiClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
    api_key_env: String,
    max_tokens: Option<u32>,
}

impl OpenAiClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        api_key_env: impl Into<String>,
        max_tokens: Option<u32>,
        timeout: Duration,
    ) -> Self {
        let http = Client::builder().timeout(timeout).build().unwrap_or_else(|e| {
            warn!("Could not configure LLM HTTP client ({}); using defaults", e);
            Client::new()
        });

        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            api_key_env: api_key_env.into(),
            max_tokens,
        }
    }

    pub fn max_tokens(&self) -> Option<u32> {
        self.max_tokens
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    pub(crate) async fn chat(&self, request: &ChatRequest<'_>) -> Result<ChatResponse, GatewayError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| GatewayError::MissingApiKey(self.api_key_env.clone()))?;

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::Timeout
                } else {
                    GatewayError::ConnectionError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(types::convert_status_error(status.as_u16(), &body));
        }

        response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))
    }
}

/// [`LlmGateway`] for any server speaking the chat-completions protocol.
pub struct OpenAiGateway {
    client: Arc<OpenAiClient>,
}

impl OpenAiGateway {
    pub fn new(client: OpenAiClient) -> Self {
        if client.api_key.is_none() {
            warn!(
                "{} is not set; chat requests will fail until an API key is configured",
                client.api_key_env
            );
        }
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl LlmGateway for OpenAiGateway {
    async fn create_session(&self, model: &Model) -> Result<Box<dyn LlmSession>, GatewayError> {
        Ok(Box::new(OpenAiSession::new(
            self.client.clone(),
            model.clone(),
            None,
        )))
    }

    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        Ok(Box::new(OpenAiSession::new(
            self.client.clone(),
            model.clone(),
            Some(system_prompt),
        )))
    }
}
