//! Request handlers for the chat API.

use super::AppState;
use super::error::{ApiError, ApiResult};
use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// User id recorded when the caller does not send one.
pub const ANONYMOUS_USER: &str = "anonymous";

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ChatResponse {
    pub response: String,
    pub session_id: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: &'static str,
    pub agent_initialized: bool,
}

/// `POST /api/chat`
///
/// The reply is always 200 once the message is accepted: agent failures are
/// already folded into an apology string by the message handler.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> ApiResult<Json<ChatResponse>> {
    let Json(request) = payload?;

    let message = request.message.trim();
    if message.is_empty() {
        return Err(ApiError::BadRequest("El mensaje no puede estar vacío.".to_string()));
    }

    let user_id = non_blank(request.user_id).unwrap_or_else(|| ANONYMOUS_USER.to_string());
    let session_id =
        non_blank(request.session_id).unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    debug!(user_id = %user_id, session_id = %session_id, "Chat request accepted");

    let response = state
        .handler
        .handle_message(message, &user_id, &session_id)
        .await;

    Ok(Json(ChatResponse {
        response,
        session_id,
    }))
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        agent_initialized: state.handler.provider().is_initialized(),
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
