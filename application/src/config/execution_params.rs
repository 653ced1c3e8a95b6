//! Execution parameters — use case loop control.
//!
//! [`ExecutionParams`] groups the static parameters that control the
//! native tool-use loop in
//! [`ToolCallingAgent`](crate::use_cases::tool_calling_agent::ToolCallingAgent).
//! These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};

/// Dialogue loop control parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionParams {
    /// Maximum tool use turns in a single agent turn.
    pub max_tool_turns: usize,
}

impl Default for ExecutionParams {
    fn default() -> Self {
        Self { max_tool_turns: 5 }
    }
}

impl ExecutionParams {
    pub fn with_max_tool_turns(mut self, max: usize) -> Self {
        self.max_tool_turns = max;
        self
    }
}
