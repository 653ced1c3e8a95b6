//! HTTP mock tests for the Firecrawl search adapter.
//!
//! Uses wiremock to simulate Firecrawl `/v1/search` responses, and runs the
//! full retrieval use case on top of the real client.

use atiende_application::ports::search_provider::{SearchError, SearchProvider};
use atiende_application::{RetrievalConfig, SearchDocumentsUseCase};
use atiende_domain::search::outcome::{
    NO_RELEVANT_DOCUMENTS_MESSAGE, NO_RESULTS_MESSAGE, SERVICE_UNAVAILABLE_MESSAGE,
};
use atiende_domain::search::{ScrapeFormat, SearchRequest};
use atiende_infrastructure::FirecrawlClient;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> FirecrawlClient {
    FirecrawlClient::new(
        server.uri(),
        Some("fc-test-key".to_string()),
        "FIRECRAWL_API_KEY",
        Duration::from_secs(5),
    )
}

fn use_case_for(server: &MockServer) -> SearchDocumentsUseCase {
    SearchDocumentsUseCase::new(Arc::new(client_for(server)), RetrievalConfig::default())
}

fn test_request() -> SearchRequest {
    SearchRequest::new("ChileAtiende: como renovar mi cedula", 2)
        .with_locale("cl", "en")
        .with_formats([ScrapeFormat::Markdown, ScrapeFormat::Links])
}

// =============================================================================
// Request shape
// =============================================================================

#[tokio::test]
async fn test_request_sends_bearer_and_fixed_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/search"))
        .and(header("authorization", "Bearer fc-test-key"))
        .and(body_partial_json(json!({
            "query": "ChileAtiende: como renovar mi cedula",
            "limit": 2,
            "country": "cl",
            "lang": "en",
            "scrapeOptions": { "formats": ["markdown", "links"] }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server).search(&test_request()).await.unwrap();
    assert_eq!(response.data, Some(vec![]));
}

// =============================================================================
// Error mapping
// =============================================================================

#[tokio::test]
async fn test_unauthorized_maps_to_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized: Invalid token"))
        .mount(&server)
        .await;

    let err = client_for(&server).search(&test_request()).await.unwrap_err();

    match err {
        SearchError::Status { status, message } => {
            assert_eq!(status, 401);
            assert!(message.contains("Invalid token"));
        }
        other => panic!("Expected Status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_maps_to_invalid_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).search(&test_request()).await.unwrap_err();
    assert!(matches!(err, SearchError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_reported_failure_maps_to_invalid_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "error": "Insufficient credits"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).search(&test_request()).await.unwrap_err();
    assert!(matches!(err, SearchError::InvalidResponse(ref m) if m.contains("credits")));
}

// =============================================================================
// End-to-end retrieval
// =============================================================================

#[tokio::test]
async fn test_retrieval_filters_and_renders_documents() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [
                {
                    "url": "https://www.chileatiende.gob.cl/fichas/3426-cedula-de-identidad",
                    "title": "Renovación de Cédula",
                    "description": "Trámite en el Registro Civil",
                    "markdown": "Puede renovar su cédula en cualquier oficina."
                },
                {
                    "url": "https://www.chileatiende.gob.cl/fichas/3426/formulario.pdf",
                    "title": "Formulario"
                },
                {
                    "url": "https://www.registrocivil.cl/principal/servicios-en-linea",
                    "title": "Registro Civil"
                },
                {
                    "url": "https://www.chileatiende.gob.cl/fichas/20246-pasaporte",
                    "title": "Renovación de Cédula"
                }
            ]
        })))
        .mount(&server)
        .await;

    let outcome = use_case_for(&server)
        .search_outcome("como renovar mi cedula")
        .await;
    assert_eq!(outcome.document_count(), 2);

    let output = outcome.into_message();
    assert_eq!(output.matches("# Resultado N°").count(), 2);
    assert!(output.contains("# Resultado N°1"));
    assert!(output.contains("# Resultado N°2"));
    assert!(output.contains("Puede renovar su cédula en cualquier oficina."));
    assert!(output.contains("Contenido no disponible"));
    assert!(!output.contains("formulario.pdf"));
    assert!(!output.contains("registrocivil.cl"));
}

#[tokio::test]
async fn test_retrieval_missing_data_is_no_results() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&server)
        .await;

    assert_eq!(
        use_case_for(&server).search("bono invierno").await,
        NO_RESULTS_MESSAGE
    );
}

#[tokio::test]
async fn test_retrieval_only_untrusted_is_no_relevant_documents() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{ "url": "https://www.gob.cl/noticias/bono" }]
        })))
        .mount(&server)
        .await;

    assert_eq!(
        use_case_for(&server).search("bono invierno").await,
        NO_RELEVANT_DOCUMENTS_MESSAGE
    );
}

#[tokio::test]
async fn test_retrieval_server_error_does_not_leak() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(500).set_body_string("stack trace: secret-internal-host"))
        .mount(&server)
        .await;

    let output = use_case_for(&server).search("bono invierno").await;

    assert_eq!(output, SERVICE_UNAVAILABLE_MESSAGE);
    assert!(!output.contains("secret-internal-host"));
}

#[tokio::test]
async fn test_short_query_never_reaches_server() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    use_case_for(&server).search("a").await;
}
