//! Content extractor: one HTML document in, one structured record out
//!
//! [`extract`] runs the full pipeline over a fetched document: noise
//! removal, metadata and JSON-LD, title resolution, main-content
//! selection, text cleaning, summarization, link/image/navigation/section
//! collection, keyword frequencies, language detection and the quality
//! score. Every step degrades to an empty or default value rather than
//! failing the whole extraction.

mod content;
mod signals;
mod structure;

pub use content::{clean_text, summarize};
pub use signals::extract_keywords;
pub use structure::JSON_LD_KEY;

use crate::score::{self, Language};
use chrono::{DateTime, Utc};
use scraper::Html;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use url::Url;

/// One link found on a page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageLink {
    pub url: String,
    pub text: String,
    pub title: String,
    pub rel: String,
    pub target: String,
}

/// One image found on a page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageImage {
    pub url: String,
    pub alt: String,
    pub title: String,
    pub width: String,
    pub height: String,
}

/// One heading-delimited section of a page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentSection {
    pub title: String,
    pub content: String,
    pub level: u8,
}

/// The structured result of extracting one fetched page.
///
/// Constructed exactly once per fetch attempt and never mutated; a
/// re-fetch of the same URL produces a new record. When `success` is
/// false every content field is empty or default and `error_message`
/// says why.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageRecord {
    /// Final URL after redirects
    pub url: String,
    pub title: String,
    /// Raw visible text, space-joined in document order
    pub content: String,
    /// Whitespace-normalized text with control characters stripped
    pub cleaned_text: String,
    /// Best-guess primary content block
    pub main_content: String,
    /// Up to three extracted sentences, or a truncation
    pub summary: String,
    /// Meta tags by name, plus parsed JSON-LD under `json-ld`
    pub metadata: BTreeMap<String, Value>,
    pub links: Vec<PageLink>,
    pub images: Vec<PageImage>,
    pub navigation_elements: Vec<PageLink>,
    pub content_sections: Vec<ContentSection>,
    /// Top tokens by frequency, at most ten
    pub keywords: Vec<String>,
    pub language: Language,
    /// Heuristic 0.0 to 10.0
    pub content_quality_score: f64,
    pub success: bool,
    /// Empty on success
    pub error_message: String,
    pub extraction_timestamp: DateTime<Utc>,
}

impl PageRecord {
    /// Builds the record for a failed fetch or extraction.
    ///
    /// All content fields are empty; only the URL, the error message and
    /// the timestamp carry information.
    pub fn failure(url: &str, error_message: impl Into<String>) -> Self {
        Self {
            url: url.to_string(),
            title: String::new(),
            content: String::new(),
            cleaned_text: String::new(),
            main_content: String::new(),
            summary: String::new(),
            metadata: BTreeMap::new(),
            links: Vec::new(),
            images: Vec::new(),
            navigation_elements: Vec::new(),
            content_sections: Vec::new(),
            keywords: Vec::new(),
            language: Language::Unknown,
            content_quality_score: 0.0,
            success: false,
            error_message: error_message.into(),
            extraction_timestamp: Utc::now(),
        }
    }
}

/// Extracts a structured [`PageRecord`] from an HTML document.
///
/// `url` is the final URL the document was fetched from; relative links
/// and images are resolved against it. An unparseable URL degrades the
/// link, image and navigation fields to empty rather than failing.
pub fn extract(html: &str, url: &str) -> PageRecord {
    let mut document = Html::parse_document(html);

    // Meta tags and JSON-LD come off the unmodified tree; noise removal
    // deletes <script> nodes, JSON-LD payloads included.
    let metadata = structure::extract_metadata(&document);

    content::remove_noise(&mut document);

    let title = content::extract_title(&document, &metadata);

    let base = Url::parse(url).ok();
    let (links, images, navigation_elements) = match &base {
        Some(base) => (
            structure::extract_links(&document, base),
            structure::extract_images(&document, base),
            structure::extract_navigation(&document, base),
        ),
        None => (Vec::new(), Vec::new(), Vec::new()),
    };
    let content_sections = structure::extract_sections(&document);

    let raw_text = content::visible_text(&document);
    let cleaned_text = content::clean_text(&raw_text);
    let main_content = content::extract_main_content(&document);
    let summary = content::summarize(&cleaned_text);
    let keywords = signals::extract_keywords(&cleaned_text);
    let language = score::detect_language(&cleaned_text);
    let content_quality_score = score::content_quality_score(&cleaned_text, &title, links.len());

    PageRecord {
        url: url.to_string(),
        title,
        content: raw_text,
        cleaned_text,
        main_content,
        summary,
        metadata,
        links,
        images,
        navigation_elements,
        content_sections,
        keywords,
        language,
        content_quality_score,
        success: true,
        error_message: String::new(),
        extraction_timestamp: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_record_invariant() {
        let record = PageRecord::failure("https://site.test/page", "connection refused");
        assert!(!record.success);
        assert!(record.cleaned_text.is_empty());
        assert!(record.content.is_empty());
        assert!(record.title.is_empty());
        assert!(!record.error_message.is_empty());
        assert_eq!(record.content_quality_score, 0.0);
        assert_eq!(record.language, Language::Unknown);
    }

    #[test]
    fn test_extract_minimal_document() {
        let record = extract("<html><body><p>Hello there</p></body></html>", "https://site.test/");
        assert!(record.success);
        assert!(record.error_message.is_empty());
        assert_eq!(record.title, "no title");
        assert!(record.cleaned_text.contains("Hello there"));
        assert!(record.links.is_empty());
    }

    #[test]
    fn test_extract_bad_base_url_degrades_links() {
        let html = r#"<html><body><a href="/x">X</a></body></html>"#;
        let record = extract(html, "not a url");
        assert!(record.success);
        assert!(record.links.is_empty());
        assert!(record.cleaned_text.contains('X'));
    }

    #[test]
    fn test_extract_full_article_quality_score() {
        let paragraph =
            "The quick brown fox jumps over the lazy dog and the weather is fine today. ";
        let article = paragraph.repeat(20);
        let mut links = String::new();
        for i in 0..12 {
            links.push_str(&format!("<a href=\"/link{}\">Link {}</a>\n", i, i));
        }
        let html = format!(
            "<html><head><title>A field guide to foxes</title></head><body>\n\
             <article><p>{}</p>\n\n<p>{}</p></article>\n\
             {}\n</body></html>",
            article, article, links
        );

        let record = extract(&html, "https://site.test/foxes");
        assert!(record.success);
        assert_eq!(record.title, "A field guide to foxes");
        assert_eq!(record.links.len(), 12);
        assert_eq!(record.language, Language::En);
        assert!(record.main_content.contains("quick brown fox"));

        // length 3.0 + title 1.0 + links 2.0 + ratio 1.0 + paragraphs 1.0
        assert_eq!(record.content_quality_score, 7.0 + 1.0);
        assert!(record.keywords.contains(&"fox".to_string()));
    }

    #[test]
    fn test_extract_summary_from_long_text() {
        let sentences = "This article describes the crawler in real depth. \
            The essential design point is the bounded frontier. \
            Every page is scored before it is persisted anywhere. \
            Later sections walk through the storage format."
            .to_string();
        let html = format!("<html><body><p>{}</p></body></html>", sentences);
        let record = extract(&html, "https://site.test/doc");
        assert!(record.summary.contains("essential design point"));
    }

    #[test]
    fn test_extract_metadata_reaches_record() {
        let html = r#"<html><head>
            <meta name="author" content="Someone">
            <script type="application/ld+json">{"@type": "WebPage"}</script>
            </head><body><p>body</p></body></html>"#;
        let record = extract(html, "https://site.test/");
        assert_eq!(record.metadata["author"], Value::String("Someone".into()));
        assert_eq!(record.metadata[JSON_LD_KEY]["@type"], Value::String("WebPage".into()));
    }

    #[test]
    fn test_record_serializes_with_field_names() {
        let record = PageRecord::failure("https://site.test/x", "HTTP status 500");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["url"], "https://site.test/x");
        assert_eq!(json["success"], Value::Bool(false));
        assert_eq!(json["error_message"], "HTTP status 500");
        assert_eq!(json["language"], "unknown");
        assert!(json.get("cleaned_text").is_some());
        assert!(json.get("content_quality_score").is_some());
    }
}
