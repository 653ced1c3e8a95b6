//! Tool Executor port
//!
//! Defines the interface for executing the tools offered to the model.

use async_trait::async_trait;
use atiende_domain::tool::{
    entities::{ToolCall, ToolSpec},
    value_objects::ToolResult,
};

/// Port for tool execution
///
/// This port defines how the application layer executes tools.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ToolExecutorPort: Send + Sync {
    /// Get the specification of all available tools
    fn tool_spec(&self) -> &ToolSpec;

    /// Check if a tool is available
    fn has_tool(&self, name: &str) -> bool {
        self.tool_spec().get(name).is_some()
    }

    /// Execute a tool call. Failures are reported inside the [`ToolResult`].
    async fn execute(&self, call: &ToolCall) -> ToolResult;
}
