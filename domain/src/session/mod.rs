//! LLM session domain.
//!
//! - [`response::LlmResponse`] — a model reply mixing text and tool calls

pub mod response;

pub use response::{ContentBlock, LlmResponse, StopReason};
