//! Builds the citizen-service agent: Firecrawl-backed `search` tool plus the
//! chat-completions dialogue loop with the Tomás persona.

use crate::config::{FileAgentConfig, FileConfig, FileLlmConfig, FileSearchConfig};
use crate::providers::{OpenAiClient, OpenAiGateway};
use crate::search::FirecrawlClient;
use crate::tools::{JsonSchemaToolConverter, RetrievalToolExecutor};
use atiende_application::ports::agent::{AgentFactory, ConversationalAgent};
use atiende_application::{RetrievalConfig, SearchDocumentsUseCase, ToolCallingAgent};
use std::sync::Arc;
use tracing::{info, warn};

/// [`AgentFactory`] reading everything it needs from [`FileConfig`].
///
/// Missing credentials never stop construction; they are reported here and
/// surface again on each failing call.
#[derive(Debug, Clone)]
pub struct CitizenAgentFactory {
    search: FileSearchConfig,
    retrieval: RetrievalConfig,
    llm: FileLlmConfig,
    agent: FileAgentConfig,
}

impl CitizenAgentFactory {
    pub fn new(config: &FileConfig) -> Self {
        Self {
            search: config.search.clone(),
            retrieval: config.retrieval.clone(),
            llm: config.llm.clone(),
            agent: config.agent.clone(),
        }
    }

    fn search_tool(&self) -> RetrievalToolExecutor {
        let api_key = self.search.resolve_api_key();
        if api_key.is_none() {
            warn!(
                "{} is not set; the search tool will report the service as unavailable",
                self.search.api_key_env
            );
        }

        let client = FirecrawlClient::new(
            &self.search.base_url,
            api_key,
            &self.search.api_key_env,
            self.search.timeout(),
        );
        RetrievalToolExecutor::new(SearchDocumentsUseCase::new(
            Arc::new(client),
            self.retrieval.clone(),
        ))
    }

    fn gateway(&self) -> OpenAiGateway {
        OpenAiGateway::new(OpenAiClient::new(
            &self.llm.base_url,
            self.llm.resolve_api_key(),
            &self.llm.api_key_env,
            self.llm.max_tokens,
            self.llm.timeout(),
        ))
    }
}

impl AgentFactory for CitizenAgentFactory {
    fn construct(&self) -> Arc<dyn ConversationalAgent> {
        let model = self.llm.parse_model();
        info!(model = %model, max_tool_turns = self.agent.max_tool_turns, "Building citizen agent");

        let agent = ToolCallingAgent::new(
            Arc::new(self.gateway()),
            Arc::new(self.search_tool()),
            Arc::new(JsonSchemaToolConverter),
            model,
            self.agent.instructions(),
        )
        .with_execution(self.agent.execution_params());

        Arc::new(agent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atiende_application::{AgentError, AgentProvider, GatewayError};

    fn config_without_keys() -> FileConfig {
        let mut config = FileConfig::default();
        config.search.api_key_env = "ATIENDE_TEST_UNSET_SEARCH_KEY".to_string();
        config.llm.api_key_env = "ATIENDE_TEST_UNSET_LLM_KEY".to_string();
        config.llm.base_url = "http://127.0.0.1:9".to_string();
        config
    }

    #[tokio::test]
    async fn test_missing_credentials_do_not_block_construction() {
        let provider = AgentProvider::new(Arc::new(CitizenAgentFactory::new(&config_without_keys())));

        let agent = provider.get_agent();
        assert!(provider.is_initialized());

        let result = agent.run_turn("como renovar mi cedula").await;
        assert!(matches!(
            result,
            Err(AgentError::Gateway(GatewayError::MissingApiKey(ref name)))
                if name == "ATIENDE_TEST_UNSET_LLM_KEY"
        ));
    }

    #[test]
    fn test_factory_captures_config_sections() {
        let mut config = config_without_keys();
        config.retrieval.limit = 4;
        config.agent.max_tool_turns = 1;

        let factory = CitizenAgentFactory::new(&config);
        assert_eq!(factory.retrieval.limit, 4);
        assert_eq!(factory.agent.execution_params().max_tool_turns, 1);
    }
}
