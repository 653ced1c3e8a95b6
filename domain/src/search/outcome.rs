//! Outcome of a document search and the fixed messages returned to the agent
//!
//! The search tool never raises: every path ends in one of these outcomes and
//! is turned into text with [`SearchOutcome::into_message`].

/// Returned when the query is empty or shorter than the minimum length.
pub const QUERY_TOO_SHORT_MESSAGE: &str =
    "Error: No se proporcionó una consulta de búsqueda válida (mínimo 5 caracteres).";

/// Returned when the backend handed back no result list (or an empty one).
pub const NO_RESULTS_MESSAGE: &str = "No se obtuvieron resultados de la búsqueda.";

/// Returned when results came back but none survived the trusted-namespace filter.
pub const NO_RELEVANT_DOCUMENTS_MESSAGE: &str =
    "No se encontraron fichas de ChileAtiende relevantes para tu búsqueda.";

/// Returned when the backend call failed. Never carries the fault detail.
pub const SERVICE_UNAVAILABLE_MESSAGE: &str =
    "Error al realizar la búsqueda: No se pudo conectar con el servicio externo.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    InvalidQuery,
    NoResults,
    NoRelevantDocuments,
    ServiceUnavailable,
    /// `count` rendered documents, concatenated in upstream order
    Documents { count: usize, rendered: String },
}

impl SearchOutcome {
    /// Number of documents delivered (zero for every non-document outcome)
    pub fn document_count(&self) -> usize {
        match self {
            SearchOutcome::Documents { count, .. } => *count,
            _ => 0,
        }
    }

    pub fn has_documents(&self) -> bool {
        self.document_count() > 0
    }

    /// Short label for structured logs
    pub fn label(&self) -> &'static str {
        match self {
            SearchOutcome::InvalidQuery => "invalid_query",
            SearchOutcome::NoResults => "no_results",
            SearchOutcome::NoRelevantDocuments => "no_relevant_documents",
            SearchOutcome::ServiceUnavailable => "service_unavailable",
            SearchOutcome::Documents { .. } => "documents",
        }
    }

    pub fn into_message(self) -> String {
        match self {
            SearchOutcome::InvalidQuery => QUERY_TOO_SHORT_MESSAGE.to_string(),
            SearchOutcome::NoResults => NO_RESULTS_MESSAGE.to_string(),
            SearchOutcome::NoRelevantDocuments => NO_RELEVANT_DOCUMENTS_MESSAGE.to_string(),
            SearchOutcome::ServiceUnavailable => SERVICE_UNAVAILABLE_MESSAGE.to_string(),
            SearchOutcome::Documents { rendered, .. } => rendered,
        }
    }
}
