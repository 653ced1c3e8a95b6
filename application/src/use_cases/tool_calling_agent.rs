//! Tool Calling Agent — the dialogue runtime.
//!
//! Runs one conversational turn with native tool use:
//! 1. Create a session with the persona as system prompt
//! 2. Send the user message with every registered tool via [`send_with_tools()`]
//! 3. Execute requested tools in parallel and return their results
//! 4. Repeat until the model answers without tools or `max_tool_turns` is hit
//!
//! Each turn opens a fresh session, so no conversational state is shared
//! between turns or between users.
//!
//! [`send_with_tools()`]: crate::ports::llm_gateway::LlmSession::send_with_tools

use crate::config::ExecutionParams;
use crate::ports::agent::{AgentError, ConversationalAgent};
use crate::ports::llm_gateway::{LlmGateway, ToolResultMessage};
use crate::ports::tool_executor::ToolExecutorPort;
use crate::ports::tool_schema::ToolSchemaPort;
use async_trait::async_trait;
use atiende_domain::Model;
use atiende_domain::tool::entities::ToolCall;
use atiende_domain::util::log_preview;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Agent that answers by letting the model call the registered tools.
#[derive(Clone)]
pub struct ToolCallingAgent {
    gateway: Arc<dyn LlmGateway>,
    tool_executor: Arc<dyn ToolExecutorPort>,
    tool_schema: Arc<dyn ToolSchemaPort>,
    model: Model,
    instructions: String,
    execution: ExecutionParams,
}

impl ToolCallingAgent {
    pub fn new(
        gateway: Arc<dyn LlmGateway>,
        tool_executor: Arc<dyn ToolExecutorPort>,
        tool_schema: Arc<dyn ToolSchemaPort>,
        model: Model,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            gateway,
            tool_executor,
            tool_schema,
            model,
            instructions: instructions.into(),
            execution: ExecutionParams::default(),
        }
    }

    pub fn with_execution(mut self, execution: ExecutionParams) -> Self {
        self.execution = execution;
        self
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    async fn execute_calls(&self, tool_calls: &[ToolCall]) -> Vec<ToolResultMessage> {
        let futures = tool_calls.iter().map(|call| {
            debug!(
                tool = %call.tool_name,
                args = %log_preview(&serde_json::to_string(&call.arguments).unwrap_or_default(), 200),
                "Executing tool call"
            );
            self.tool_executor.execute(call)
        });
        let results = futures::future::join_all(futures).await;

        let mut messages = Vec::with_capacity(results.len());
        for (call, result) in tool_calls.iter().zip(results) {
            let is_error = !result.is_success();
            if is_error {
                warn!(tool = %call.tool_name, error = ?result.error(), "Tool call failed");
            }

            let Some(native_id) = call.native_id.clone() else {
                warn!(
                    "Missing native_id for tool call '{}'; skipping result.",
                    call.tool_name
                );
                continue;
            };

            messages.push(ToolResultMessage {
                tool_use_id: native_id,
                tool_name: call.tool_name.clone(),
                output: result.content_for_model(),
                is_error,
            });
        }
        messages
    }
}

#[async_trait]
impl ConversationalAgent for ToolCallingAgent {
    async fn run_turn(&self, message: &str) -> Result<String, AgentError> {
        info!("Starting agent turn: {}", log_preview(message, 100));

        let session = self
            .gateway
            .create_session_with_system_prompt(&self.model, &self.instructions)
            .await?;

        let tools = self
            .tool_schema
            .all_tools_schema(self.tool_executor.tool_spec());
        debug!("Agent: using model {}, {} tools available", self.model, tools.len());

        let mut response = session.send_with_tools(message, &tools).await?;

        let max_turns = self.execution.max_tool_turns;
        let mut turn_count = 0;
        let mut all_text = Vec::new();

        let text = response.text_content();
        if !text.is_empty() {
            all_text.push(text);
        }

        loop {
            let tool_calls = response.tool_calls();
            if tool_calls.is_empty() {
                break;
            }

            turn_count += 1;
            if turn_count > max_turns {
                warn!("Agent tool loop exceeded max_tool_turns ({})", max_turns);
                break;
            }

            let tool_result_messages = self.execute_calls(&tool_calls).await;

            debug!(
                "Agent tool turn {}/{}: sending {} tool results",
                turn_count,
                max_turns,
                tool_result_messages.len()
            );

            response = session.send_tool_results(&tool_result_messages).await?;

            let text = response.text_content();
            if !text.is_empty() {
                all_text.push(text);
            }
        }

        // Intermediate texts ("let me look that up") are discarded.
        let answer = all_text.pop().unwrap_or_default();
        if answer.trim().is_empty() {
            return Err(AgentError::EmptyResponse);
        }

        info!("Agent turn completed in {} tool turns", turn_count);
        Ok(answer)
    }
}
