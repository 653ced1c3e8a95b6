//! Wire types and conversions for OpenAI-compatible chat completions.
//!
//! Kept free of I/O so the mapping between the domain's [`LlmResponse`] and
//! the chat-completions JSON can be tested directly.

use atiende_application::ports::llm_gateway::{GatewayError, ToolResultMessage};
use atiende_domain::session::response::{ContentBlock, LlmResponse, StopReason};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<WireToolCall>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self::with_role("system", content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::with_role("user", content)
    }

    fn with_role(role: &str, content: impl Into<String>) -> Self {
        Self {
            role: role.to_string(),
            content: Some(content.into()),
            tool_calls: None,
            tool_call_id: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireToolCall {
    pub id: String,
    #[serde(rename = "type", default = "function_type")]
    pub call_type: String,
    pub function: WireFunctionCall,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireFunctionCall {
    pub name: String,
    /// JSON-encoded argument object, as sent by the API
    #[serde(default)]
    pub arguments: String,
}

fn function_type() -> String {
    "function".to_string()
}

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub tools: &'a [serde_json::Value],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Reshape a provider-neutral tool schema (`name`, `description`,
/// `input_schema`) into the chat-completions `function` tool format.
pub fn convert_tool_schema(tool: &serde_json::Value) -> Option<serde_json::Value> {
    let name = tool.get("name")?.as_str()?;
    let description = tool
        .get("description")
        .and_then(|d| d.as_str())
        .unwrap_or("");
    let parameters = tool
        .get("input_schema")
        .cloned()
        .unwrap_or_else(|| serde_json::json!({ "type": "object", "properties": {} }));

    Some(serde_json::json!({
        "type": "function",
        "function": {
            "name": name,
            "description": description,
            "parameters": parameters,
        }
    }))
}

/// Split a chat-completions response into the domain response and the
/// assistant message to append to the session history.
pub fn convert_response(
    response: ChatResponse,
) -> Result<(LlmResponse, ChatMessage), GatewayError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| GatewayError::InvalidResponse("No choices returned".to_string()))?;

    let mut content = Vec::new();
    if let Some(text) = choice.message.content.as_deref()
        && !text.is_empty()
    {
        content.push(ContentBlock::Text(text.to_string()));
    }

    for call in choice.message.tool_calls.iter().flatten() {
        content.push(ContentBlock::ToolUse {
            id: call.id.clone(),
            name: call.function.name.clone(),
            input: parse_arguments(&call.function.name, &call.function.arguments),
        });
    }

    let llm_response = LlmResponse {
        content,
        stop_reason: choice
            .finish_reason
            .as_deref()
            .map(StopReason::from_finish_reason),
        model: response.model,
    };

    Ok((llm_response, choice.message))
}

fn parse_arguments(tool_name: &str, raw: &str) -> HashMap<String, serde_json::Value> {
    if raw.trim().is_empty() {
        return HashMap::new();
    }
    serde_json::from_str(raw).unwrap_or_else(|e| {
        warn!(tool = tool_name, error = %e, "Could not parse tool call arguments");
        HashMap::new()
    })
}

pub fn convert_tool_result(result: &ToolResultMessage) -> ChatMessage {
    ChatMessage {
        role: "tool".to_string(),
        content: Some(result.output.clone()),
        tool_calls: None,
        tool_call_id: Some(result.tool_use_id.clone()),
    }
}

/// Map a non-success HTTP status to a gateway error.
pub fn convert_status_error(status: u16, body: &str) -> GatewayError {
    let detail = format!("HTTP {}: {}", status, body);
    match status {
        401 | 403 => GatewayError::Authentication(detail),
        429 => GatewayError::RateLimited(detail),
        _ => GatewayError::RequestFailed(detail),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_json(value: serde_json::Value) -> ChatResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_convert_tool_schema() {
        let neutral = serde_json::json!({
            "name": "search",
            "description": "Busca en ChileAtiende",
            "input_schema": {
                "type": "object",
                "properties": { "search": { "type": "string" } },
                "required": ["search"]
            }
        });

        let converted = convert_tool_schema(&neutral).unwrap();

        assert_eq!(converted["type"], "function");
        assert_eq!(converted["function"]["name"], "search");
        assert_eq!(converted["function"]["parameters"]["required"][0], "search");
        assert!(convert_tool_schema(&serde_json::json!({"description": "x"})).is_none());
    }

    #[test]
    fn test_convert_text_response() {
        let (response, message) = convert_response(response_json(serde_json::json!({
            "model": "gpt-4o-mini",
            "choices": [{
                "message": { "role": "assistant", "content": "Hola, soy Tomás." },
                "finish_reason": "stop"
            }]
        })))
        .unwrap();

        assert_eq!(response.text_content(), "Hola, soy Tomás.");
        assert_eq!(response.stop_reason, Some(StopReason::EndTurn));
        assert_eq!(response.model.as_deref(), Some("gpt-4o-mini"));
        assert_eq!(message.role, "assistant");
    }

    #[test]
    fn test_convert_tool_call_response() {
        let (response, message) = convert_response(response_json(serde_json::json!({
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": null,
                    "tool_calls": [{
                        "id": "call_abc",
                        "type": "function",
                        "function": { "name": "search", "arguments": "{\"search\":\"renovar cedula\"}" }
                    }]
                },
                "finish_reason": "tool_calls"
            }]
        })))
        .unwrap();

        let calls = response.tool_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].native_id.as_deref(), Some("call_abc"));
        assert_eq!(calls[0].get_string("search"), Some("renovar cedula"));
        assert_eq!(response.stop_reason, Some(StopReason::ToolUse));
        assert_eq!(message.tool_calls.unwrap()[0].id, "call_abc");
    }

    #[test]
    fn test_malformed_arguments_become_empty() {
        let (response, _) = convert_response(response_json(serde_json::json!({
            "choices": [{
                "message": {
                    "role": "assistant",
                    "tool_calls": [{
                        "id": "call_1",
                        "function": { "name": "search", "arguments": "{not json" }
                    }]
                }
            }]
        })))
        .unwrap();

        assert!(response.tool_calls()[0].arguments.is_empty());
    }

    #[test]
    fn test_no_choices_is_invalid() {
        let result = convert_response(response_json(serde_json::json!({ "choices": [] })));
        assert!(matches!(result, Err(GatewayError::InvalidResponse(_))));
    }

    #[test]
    fn test_convert_tool_result() {
        let message = convert_tool_result(&ToolResultMessage {
            tool_use_id: "call_1".to_string(),
            tool_name: "search".to_string(),
            output: "# Resultado N°1".to_string(),
            is_error: false,
        });

        assert_eq!(message.role, "tool");
        assert_eq!(message.tool_call_id.as_deref(), Some("call_1"));
        assert_eq!(message.content.as_deref(), Some("# Resultado N°1"));
    }

    #[test]
    fn test_status_mapping() {
        assert!(matches!(convert_status_error(401, ""), GatewayError::Authentication(_)));
        assert!(matches!(convert_status_error(403, ""), GatewayError::Authentication(_)));
        assert!(matches!(convert_status_error(429, ""), GatewayError::RateLimited(_)));
        assert!(matches!(convert_status_error(500, "boom"), GatewayError::RequestFailed(ref m) if m.contains("boom")));
    }
}
