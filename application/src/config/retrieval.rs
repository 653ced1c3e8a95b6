//! Retrieval parameters for the document search tool.

use atiende_domain::SearchQuery;
use atiende_domain::prompt::SEARCH_INSTRUCTION;
use atiende_domain::search::{DocumentFilter, ScrapeFormat, SearchRequest};
use serde::{Deserialize, Serialize};

/// Fixed parameters sent with every search, plus the trusted-document filter.
///
/// ```toml
/// [retrieval]
/// instruction = "ChileAtiende: "
/// limit = 2
/// country = "cl"
/// lang = "en"
/// formats = ["markdown", "links"]
/// trusted_prefix = "https://www.chileatiende.gob.cl/fichas"
/// excluded_suffix = "pdf"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Prepended verbatim to every query
    pub instruction: String,
    pub limit: usize,
    pub country: String,
    pub lang: String,
    pub formats: Vec<ScrapeFormat>,
    pub trusted_prefix: String,
    pub excluded_suffix: String,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            instruction: SEARCH_INSTRUCTION.to_string(),
            limit: 2,
            country: "cl".to_string(),
            lang: "en".to_string(),
            formats: vec![ScrapeFormat::Markdown, ScrapeFormat::Links],
            trusted_prefix: "https://www.chileatiende.gob.cl/fichas".to_string(),
            excluded_suffix: "pdf".to_string(),
        }
    }
}

impl RetrievalConfig {
    pub fn filter(&self) -> DocumentFilter {
        DocumentFilter::new(&self.trusted_prefix, &self.excluded_suffix)
    }

    /// Build the backend request for an already validated query
    pub fn request_for(&self, query: &SearchQuery) -> SearchRequest {
        SearchRequest::new(format!("{}{}", self.instruction, query), self.limit)
            .with_locale(&self.country, &self.lang)
            .with_formats(self.formats.iter().copied())
    }
}
