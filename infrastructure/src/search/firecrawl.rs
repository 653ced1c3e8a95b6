//! Firecrawl search adapter.
//!
//! Implements [`SearchProvider`] against Firecrawl's `/v1/search` endpoint,
//! which searches the web and scrapes each hit in the requested formats.
//!
//! The API key is optional at construction. Without one every call fails
//! with [`SearchError::MissingApiKey`] before touching the network.

use async_trait::async_trait;
use atiende_application::ports::search_provider::{SearchError, SearchProvider};
use atiende_domain::search::{RawResult, SearchRequest, SearchResponse};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

// ==================== Wire types ====================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FirecrawlSearchRequest<'a> {
    query: &'a str,
    limit: usize,
    #[serde(skip_serializing_if = "str::is_empty")]
    country: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    lang: &'a str,
    scrape_options: ScrapeOptions,
}

#[derive(Serialize)]
struct ScrapeOptions {
    formats: Vec<String>,
}

#[derive(Deserialize)]
struct FirecrawlSearchResponse {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    data: Option<Vec<FirecrawlDocument>>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Deserialize)]
struct FirecrawlDocument {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    markdown: Option<String>,
}

impl From<FirecrawlDocument> for RawResult {
    fn from(doc: FirecrawlDocument) -> Self {
        RawResult {
            url: doc.url,
            title: doc.title,
            markdown: doc.markdown,
        }
    }
}

// ==================== Client ====================

/// Firecrawl API client.
pub struct FirecrawlClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    api_key_env: String,
}

impl FirecrawlClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        api_key_env: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let client = Client::builder().timeout(timeout).build().unwrap_or_else(|e| {
            warn!("Could not configure search HTTP client ({}); using defaults", e);
            Client::new()
        });

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            api_key_env: api_key_env.into(),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/search", self.base_url)
    }
}

#[async_trait]
impl SearchProvider for FirecrawlClient {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| SearchError::MissingApiKey(self.api_key_env.clone()))?;

        let body = FirecrawlSearchRequest {
            query: &request.query,
            limit: request.limit,
            country: &request.country,
            lang: &request.lang,
            scrape_options: ScrapeOptions {
                formats: request.formats.iter().map(|f| f.to_string()).collect(),
            },
        };

        debug!(endpoint = %self.endpoint(), limit = request.limit, "Calling Firecrawl search");

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SearchError::Timeout
                } else {
                    SearchError::ConnectionError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SearchError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let payload: FirecrawlSearchResponse = response
            .json()
            .await
            .map_err(|e| SearchError::InvalidResponse(e.to_string()))?;

        if payload.success == Some(false) {
            return Err(SearchError::InvalidResponse(
                payload
                    .error
                    .unwrap_or_else(|| "search reported failure".to_string()),
            ));
        }

        Ok(SearchResponse {
            data: payload
                .data
                .map(|docs| docs.into_iter().map(RawResult::from).collect()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atiende_domain::search::ScrapeFormat;

    #[test]
    fn test_request_body_shape() {
        let request = SearchRequest::new("ChileAtiende: bono invierno", 2)
            .with_locale("cl", "en")
            .with_formats([ScrapeFormat::Markdown, ScrapeFormat::Links]);
        let body = FirecrawlSearchRequest {
            query: &request.query,
            limit: request.limit,
            country: &request.country,
            lang: &request.lang,
            scrape_options: ScrapeOptions {
                formats: request.formats.iter().map(|f| f.to_string()).collect(),
            },
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["query"], "ChileAtiende: bono invierno");
        assert_eq!(json["limit"], 2);
        assert_eq!(json["country"], "cl");
        assert_eq!(json["scrapeOptions"]["formats"][1], "links");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = FirecrawlClient::new(
            "https://api.firecrawl.dev/",
            None,
            "FIRECRAWL_API_KEY",
            Duration::from_secs(5),
        );
        assert_eq!(client.endpoint(), "https://api.firecrawl.dev/v1/search");
        assert!(!client.has_api_key());
    }

    #[tokio::test]
    async fn test_missing_key_fails_without_network() {
        let client = FirecrawlClient::new(
            "http://127.0.0.1:9",
            None,
            "FIRECRAWL_API_KEY",
            Duration::from_secs(1),
        );

        let err = client
            .search(&SearchRequest::new("ChileAtiende: cedula", 2))
            .await
            .unwrap_err();

        assert!(matches!(err, SearchError::MissingApiKey(ref name) if name == "FIRECRAWL_API_KEY"));
    }
}
