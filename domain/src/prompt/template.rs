//! Document template for rendering search results
//!
//! The template is parsed once into literal and placeholder segments, then
//! rendered in a single pass per result. Substituted values are never
//! scanned again, so page content containing `{page_url}` stays literal.

use crate::search::entities::RawResult;

/// Sentinel used when a result carries no title.
pub const TITLE_UNAVAILABLE: &str = "Título no disponible";
/// Sentinel used when a result carries no URL.
pub const URL_UNAVAILABLE: &str = "URL no disponible";
/// Sentinel used when a result carries no markdown content.
pub const CONTENT_UNAVAILABLE: &str = "Contenido no disponible";

/// The fixed layout each retrieved page is rendered into.
pub const DEFAULT_DOCUMENT_TEMPLATE: &str = "\n# Resultado N°{result_number}\n\n## Nombre de la página: \n\"{page_title}\"\n\n## URL: \n{page_url}\n\n## Contenido: \n{page_content}\n\n";

/// Placeholders recognised inside a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    ResultNumber,
    PageTitle,
    PageUrl,
    PageContent,
}

impl Placeholder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Placeholder::ResultNumber => "result_number",
            Placeholder::PageTitle => "page_title",
            Placeholder::PageUrl => "page_url",
            Placeholder::PageContent => "page_content",
        }
    }

    fn parse(name: &str) -> Option<Self> {
        match name {
            "result_number" => Some(Placeholder::ResultNumber),
            "page_title" => Some(Placeholder::PageTitle),
            "page_url" => Some(Placeholder::PageUrl),
            "page_content" => Some(Placeholder::PageContent),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(Placeholder),
}

/// A parsed document template.
///
/// `{{` and `}}` render as literal braces. An unrecognised `{name}` is kept
/// verbatim rather than treated as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentTemplate {
    segments: Vec<Segment>,
}

impl Default for DocumentTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_DOCUMENT_TEMPLATE)
    }
}

impl DocumentTemplate {
    pub fn new(text: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = text;

        while let Some(pos) = rest.find(['{', '}']) {
            literal.push_str(&rest[..pos]);
            let tail = &rest[pos..];

            if tail.starts_with("{{") {
                literal.push('{');
                rest = &tail[2..];
            } else if tail.starts_with("}}") {
                literal.push('}');
                rest = &tail[2..];
            } else if tail.starts_with('{')
                && let Some(end) = tail.find('}')
                && let Some(field) = Placeholder::parse(&tail[1..end])
            {
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Field(field));
                rest = &tail[end + 1..];
            } else {
                literal.push_str(&tail[..1]);
                rest = &tail[1..];
            }
        }
        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self { segments }
    }

    /// Placeholders present in the template, in order of appearance
    pub fn placeholders(&self) -> Vec<Placeholder> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Field(p) => Some(*p),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    /// Render one result with its 1-based position
    pub fn render(&self, number: usize, result: &RawResult) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(Placeholder::ResultNumber) => out.push_str(&number.to_string()),
                Segment::Field(Placeholder::PageTitle) => {
                    out.push_str(result.title.as_deref().unwrap_or(TITLE_UNAVAILABLE))
                }
                Segment::Field(Placeholder::PageUrl) => {
                    out.push_str(result.url.as_deref().unwrap_or(URL_UNAVAILABLE))
                }
                Segment::Field(Placeholder::PageContent) => {
                    out.push_str(result.markdown.as_deref().unwrap_or(CONTENT_UNAVAILABLE))
                }
            }
        }
        out
    }

    /// Render every result numbered from 1 and concatenate without separators
    pub fn render_all(&self, results: &[RawResult]) -> String {
        results
            .iter()
            .enumerate()
            .map(|(i, result)| self.render(i + 1, result))
            .collect()
    }
}
