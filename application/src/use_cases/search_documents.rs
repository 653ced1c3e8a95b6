//! Search Documents use case — the retrieval tool.
//!
//! Turns a free-text query into a bounded set of trusted, rendered
//! documents:
//!
//! 1. Validate the query (at least five characters after trimming)
//! 2. Call the [`SearchProvider`] once with the fixed retrieval parameters
//! 3. Keep results inside the trusted namespace, dropping PDF links
//! 4. Render survivors through the [`DocumentTemplate`], numbered from 1
//!
//! Every path ends in a [`SearchOutcome`]; [`SearchDocumentsUseCase::search`]
//! flattens it to the string the model receives. Backend faults are logged
//! in full and replaced by a generic message.

use crate::config::RetrievalConfig;
use crate::ports::search_provider::SearchProvider;
use atiende_domain::SearchQuery;
use atiende_domain::prompt::DocumentTemplate;
use atiende_domain::search::{DocumentFilter, SearchOutcome};
use atiende_domain::util::log_preview;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Use case behind the `search` tool.
#[derive(Clone)]
pub struct SearchDocumentsUseCase {
    provider: Arc<dyn SearchProvider>,
    config: RetrievalConfig,
    filter: DocumentFilter,
    template: DocumentTemplate,
}

impl SearchDocumentsUseCase {
    pub fn new(provider: Arc<dyn SearchProvider>, config: RetrievalConfig) -> Self {
        let filter = config.filter();
        Self {
            provider,
            config,
            filter,
            template: DocumentTemplate::default(),
        }
    }

    pub fn with_template(mut self, template: DocumentTemplate) -> Self {
        self.template = template;
        self
    }

    pub fn config(&self) -> &RetrievalConfig {
        &self.config
    }

    /// Run the retrieval pipeline and report which way it ended.
    pub async fn search_outcome(&self, raw_query: &str) -> SearchOutcome {
        info!(query = %log_preview(raw_query, 100), "Search requested");

        let query = match SearchQuery::try_new(raw_query) {
            Ok(query) => query,
            Err(e) => {
                warn!(error = %e, "Search query rejected");
                return SearchOutcome::InvalidQuery;
            }
        };
        debug!(chars = query.content().chars().count(), "Search query accepted");

        let request = self.config.request_for(&query);
        let response = match self.provider.search(&request).await {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, query = %query, "Search backend call failed");
                return SearchOutcome::ServiceUnavailable;
            }
        };

        let Some(results) = response.into_results() else {
            info!(outcome = "no_results", "Search backend returned no result list");
            return SearchOutcome::NoResults;
        };
        let raw_count = results.len();
        debug!(raw_count, "Search backend returned results");

        let documents = self.filter.apply(results);
        info!(
            raw_count,
            filtered_count = documents.len(),
            prefix = %self.filter.trusted_prefix,
            "Filtered search results"
        );

        let outcome = if documents.is_empty() {
            SearchOutcome::NoRelevantDocuments
        } else {
            SearchOutcome::Documents {
                count: documents.len(),
                rendered: self.template.render_all(&documents),
            }
        };

        info!(
            outcome = outcome.label(),
            documents = outcome.document_count(),
            "Search finished"
        );
        outcome
    }

    /// Tool entry point: always a string, never an error.
    pub async fn search(&self, raw_query: &str) -> String {
        self.search_outcome(raw_query).await.into_message()
    }
}
