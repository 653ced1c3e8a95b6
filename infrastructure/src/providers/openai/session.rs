//! Chat-completions session with native tool calling.
//!
//! The session keeps the full message history (system, user, assistant with
//! `tool_calls`, `tool` results) and replays it on every request, since the
//! API is stateless.

use super::gateway::OpenAiClient;
use super::types::{self, ChatMessage, ChatRequest, ChatResponse};
use async_trait::async_trait;
use atiende_application::ports::llm_gateway::{GatewayError, LlmSession, ToolResultMessage};
use atiende_domain::{LlmResponse, Model};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

pub struct OpenAiSession {
    client: Arc<OpenAiClient>,
    model: Model,
    messages: Mutex<Vec<ChatMessage>>,
    tools: Mutex<Vec<serde_json::Value>>,
}

impl OpenAiSession {
    pub fn new(client: Arc<OpenAiClient>, model: Model, system_prompt: Option<&str>) -> Self {
        let messages = system_prompt
            .filter(|prompt| !prompt.is_empty())
            .map(|prompt| vec![ChatMessage::system(prompt)])
            .unwrap_or_default();

        Self {
            client,
            model,
            messages: Mutex::new(messages),
            tools: Mutex::new(Vec::new()),
        }
    }

    /// Append `new_messages`, call the API with the whole history, and record
    /// the assistant reply.
    async fn exchange(&self, new_messages: Vec<ChatMessage>) -> Result<LlmResponse, GatewayError> {
        let mut messages = self.messages.lock().await;
        messages.extend(new_messages);

        let tools = self.tools.lock().await;
        let request = ChatRequest {
            model: self.model.as_str(),
            messages: &messages,
            tools: &tools,
            max_tokens: self.client.max_tokens(),
        };

        debug!(
            model = %self.model,
            messages = messages.len(),
            tools = tools.len(),
            "Calling chat completions API"
        );

        let response: ChatResponse = self.client.chat(&request).await?;
        let (llm_response, assistant) = types::convert_response(response)?;
        messages.push(assistant);

        Ok(llm_response)
    }

    #[cfg(test)]
    pub(crate) async fn history(&self) -> Vec<ChatMessage> {
        self.messages.lock().await.clone()
    }
}

#[async_trait]
impl LlmSession for OpenAiSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send_with_tools(
        &self,
        content: &str,
        tools: &[serde_json::Value],
    ) -> Result<LlmResponse, GatewayError> {
        *self.tools.lock().await = tools.iter().filter_map(types::convert_tool_schema).collect();
        self.exchange(vec![ChatMessage::user(content)]).await
    }

    async fn send_tool_results(
        &self,
        results: &[ToolResultMessage],
    ) -> Result<LlmResponse, GatewayError> {
        let messages = results.iter().map(types::convert_tool_result).collect();
        self.exchange(messages).await
    }
}
