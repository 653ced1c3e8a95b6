//! OpenAI-compatible chat-completions provider.
//!
//! Works against api.openai.com and any server exposing the same
//! `/chat/completions` contract with `tools`.

mod gateway;
mod session;
mod types;

pub use gateway::{OpenAiClient, OpenAiGateway};
pub use session::OpenAiSession;
