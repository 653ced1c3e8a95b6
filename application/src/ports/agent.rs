//! Conversational agent ports
//!
//! [`ConversationalAgent`] is the turn entry point the message handler
//! talks to; [`AgentFactory`] builds one. Both are traits so tests can swap
//! in scripted doubles.

use crate::ports::llm_gateway::GatewayError;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can end an agent turn.
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("No response from model")]
    EmptyResponse,
}

/// A dialogue agent that turns one user message into one reply.
///
/// Implementations must be safe to call concurrently from many requests.
#[async_trait]
pub trait ConversationalAgent: Send + Sync {
    async fn run_turn(&self, message: &str) -> Result<String, AgentError>;
}

/// Builds the process-wide agent instance.
///
/// Construction never fails: missing credentials are logged and surface
/// later as per-call failures.
pub trait AgentFactory: Send + Sync {
    fn construct(&self) -> Arc<dyn ConversationalAgent>;
}
