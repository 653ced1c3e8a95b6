//! Agent configuration from TOML (`[agent]` section)

use atiende_application::ExecutionParams;
use atiende_domain::AGENT_INSTRUCTIONS;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAgentConfig {
    /// Maximum tool turns per message (default: 5)
    pub max_tool_turns: usize,
    /// Replacement persona text; the built-in Tomás persona when unset
    pub instructions: Option<String>,
}

impl Default for FileAgentConfig {
    fn default() -> Self {
        Self {
            max_tool_turns: ExecutionParams::default().max_tool_turns,
            instructions: None,
        }
    }
}

impl FileAgentConfig {
    pub fn execution_params(&self) -> ExecutionParams {
        ExecutionParams::default().with_max_tool_turns(self.max_tool_turns)
    }

    pub fn instructions(&self) -> &str {
        self.instructions.as_deref().unwrap_or(AGENT_INSTRUCTIONS)
    }
}
