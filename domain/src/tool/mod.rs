//! Tool domain module
//!
//! Defines how the agent describes and invokes its capabilities. Every tool
//! is defined by a [`ToolDefinition`], invoked via a [`ToolCall`], and
//! returns a [`ToolResult`].
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ ToolSpec     │───▶│ ToolCall     │───▶│ ToolResult   │
//! │ (registry)   │    │ (invocation) │    │ (output)     │
//! └──────────────┘    └──────────────┘    └──────────────┘
//! ```
//!
//! The domain holds definitions only. Execution is behind the
//! `ToolExecutorPort` in the application layer, and JSON Schema conversion
//! for the model API behind `ToolSchemaPort`.

pub mod entities;
pub mod value_objects;

pub use entities::{ToolCall, ToolDefinition, ToolParameter, ToolSpec};
pub use value_objects::{ToolError, ToolResult, ToolResultMetadata};
