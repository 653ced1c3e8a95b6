//! Search domain entities

use serde::{Deserialize, Serialize};

/// Output formats requested from the scraping search backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrapeFormat {
    /// Page body rendered as markdown
    Markdown,
    /// Links extracted from the page
    Links,
}

impl ScrapeFormat {
    pub fn as_str(&self) -> &str {
        match self {
            ScrapeFormat::Markdown => "markdown",
            ScrapeFormat::Links => "links",
        }
    }
}

impl std::fmt::Display for ScrapeFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fully parameterised request to the search backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Query text, already prefixed with the site instruction
    pub query: String,
    /// Maximum number of results to return
    pub limit: usize,
    /// Country code used to localise results (e.g. "cl")
    pub country: String,
    /// Language code (e.g. "en")
    pub lang: String,
    /// Formats to scrape for each result
    pub formats: Vec<ScrapeFormat>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, limit: usize) -> Self {
        Self {
            query: query.into(),
            limit,
            country: String::new(),
            lang: String::new(),
            formats: Vec::new(),
        }
    }

    pub fn with_locale(mut self, country: impl Into<String>, lang: impl Into<String>) -> Self {
        self.country = country.into();
        self.lang = lang.into();
        self
    }

    pub fn with_formats(mut self, formats: impl IntoIterator<Item = ScrapeFormat>) -> Self {
        self.formats = formats.into_iter().collect();
        self
    }
}

/// A single search hit as returned by the backend.
///
/// Every field is optional: the backend does not guarantee any of them and
/// missing values are replaced by sentinels at render time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Page body in markdown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,
}

impl RawResult {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_markdown(mut self, markdown: impl Into<String>) -> Self {
        self.markdown = Some(markdown.into());
        self
    }

    /// URL or the empty string when absent
    pub fn url_or_empty(&self) -> &str {
        self.url.as_deref().unwrap_or("")
    }
}

/// What the backend handed back for one request.
///
/// `data == None` means the response carried no usable result list at all,
/// which is distinct from a list that was present but filtered to nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub data: Option<Vec<RawResult>>,
}

impl SearchResponse {
    pub fn with_results(results: Vec<RawResult>) -> Self {
        Self {
            data: Some(results),
        }
    }

    pub fn empty() -> Self {
        Self { data: None }
    }

    /// Results if the response carried a non-empty list
    pub fn into_results(self) -> Option<Vec<RawResult>> {
        self.data.filter(|d| !d.is_empty())
    }
}
