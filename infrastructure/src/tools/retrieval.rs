//! `search` tool — ChileAtiende document retrieval exposed to the model.
//!
//! # Parameters
//!
//! | Name | Type | Required | Description |
//! |------|------|:---:|-------------|
//! | `search` | string | Yes | Free-text question about a public procedure |
//!
//! The tool always succeeds from the model's point of view: validation
//! problems and backend faults come back as fixed Spanish messages produced
//! by [`SearchDocumentsUseCase`]. Only an unknown tool name is reported as
//! a tool error.

use async_trait::async_trait;
use atiende_application::ports::tool_executor::ToolExecutorPort;
use atiende_application::use_cases::search_documents::SearchDocumentsUseCase;
use atiende_domain::prompt::SEARCH_TOOL_DESCRIPTION;
use atiende_domain::tool::{
    entities::{ToolCall, ToolDefinition, ToolParameter, ToolSpec},
    value_objects::{ToolError, ToolResult},
};
use std::time::Instant;
use tracing::warn;

/// Canonical tool name.
pub const SEARCH: &str = "search";

/// Name of the single query argument.
const SEARCH_ARG: &str = "search";

/// Create the [`ToolDefinition`] for `search`.
pub fn search_definition() -> ToolDefinition {
    ToolDefinition::new(SEARCH, SEARCH_TOOL_DESCRIPTION).with_parameter(
        ToolParameter::new(
            SEARCH_ARG,
            "Consulta de búsqueda en texto libre (mínimo 5 caracteres)",
            true,
        )
        .with_type("string"),
    )
}

/// Tool executor offering exactly one capability: `search`.
pub struct RetrievalToolExecutor {
    spec: ToolSpec,
    search: SearchDocumentsUseCase,
}

impl RetrievalToolExecutor {
    pub fn new(search: SearchDocumentsUseCase) -> Self {
        Self {
            spec: ToolSpec::new().register(search_definition()),
            search,
        }
    }
}

#[async_trait]
impl ToolExecutorPort for RetrievalToolExecutor {
    fn tool_spec(&self) -> &ToolSpec {
        &self.spec
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        if !self.has_tool(&call.tool_name) {
            warn!(tool = %call.tool_name, "Model requested an unknown tool");
            return ToolResult::failure(
                &call.tool_name,
                ToolError::not_found(format!("tool '{}'", call.tool_name)),
            );
        }

        let start = Instant::now();
        // A missing argument is validated like an empty query.
        let query = call.get_string(SEARCH_ARG).unwrap_or_default();
        let outcome = self.search.search_outcome(query).await;
        let count = outcome.document_count();

        ToolResult::success(SEARCH, outcome.into_message())
            .with_duration(start.elapsed().as_millis() as u64)
            .with_match_count(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atiende_application::ports::search_provider::{SearchError, SearchProvider};
    use atiende_application::RetrievalConfig;
    use atiende_domain::search::outcome::QUERY_TOO_SHORT_MESSAGE;
    use atiende_domain::search::{RawResult, SearchRequest, SearchResponse};
    use std::sync::Arc;

    struct FixedProvider;

    #[async_trait]
    impl SearchProvider for FixedProvider {
        async fn search(&self, _request: &SearchRequest) -> Result<SearchResponse, SearchError> {
            Ok(SearchResponse::with_results(vec![
                RawResult::new("https://www.chileatiende.gob.cl/fichas/3426-cedula")
                    .with_title("Cédula de identidad")
                    .with_markdown("Renueve su cédula."),
            ]))
        }
    }

    fn executor() -> RetrievalToolExecutor {
        RetrievalToolExecutor::new(SearchDocumentsUseCase::new(
            Arc::new(FixedProvider),
            RetrievalConfig::default(),
        ))
    }

    #[tokio::test]
    async fn test_search_call_returns_rendered_documents() {
        let call = ToolCall::new(SEARCH).with_arg(SEARCH_ARG, "renovar cedula");

        let result = executor().execute(&call).await;

        assert!(result.is_success());
        assert!(result.output().unwrap().contains("# Resultado N°1"));
        assert_eq!(result.metadata.match_count, Some(1));
        assert!(result.metadata.duration_ms.is_some());
    }

    #[tokio::test]
    async fn test_missing_argument_is_too_short() {
        let result = executor().execute(&ToolCall::new(SEARCH)).await;

        assert!(result.is_success());
        assert_eq!(result.output(), Some(QUERY_TOO_SHORT_MESSAGE));
        assert_eq!(result.metadata.match_count, Some(0));
    }

    #[tokio::test]
    async fn test_unknown_tool_is_not_found() {
        let call = ToolCall::new("web_fetch").with_arg("url", "https://example.com");

        let result = executor().execute(&call).await;

        assert!(!result.is_success());
        assert_eq!(result.error().unwrap().code, "NOT_FOUND");
    }

    #[test]
    fn test_spec_offers_only_search() {
        let executor = executor();
        assert_eq!(executor.tool_spec().len(), 1);
        assert!(executor.has_tool(SEARCH));
    }
}
