//! Fixed text artifacts: the document template and the agent persona.

pub mod persona;
pub mod template;

pub use persona::{AGENT_INSTRUCTIONS, SEARCH_INSTRUCTION, SEARCH_TOOL_DESCRIPTION};
pub use template::{DEFAULT_DOCUMENT_TEMPLATE, DocumentTemplate, Placeholder};
