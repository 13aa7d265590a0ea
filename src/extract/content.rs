//! Text-level extraction: noise removal, title, main content, cleaning
//! and summarization.

use crate::score::IMPORTANCE_TERMS;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use serde_json::Value;
use std::collections::BTreeMap;

/// Selector denylist removed from the tree before any text extraction.
///
/// Covers scripts, styles, ad containers, popups and cookie banners.
const NOISE_SELECTORS: &str = "script, style, noscript, iframe, .ad, .ads, .advertisement, \
     .banner, .popup, .modal, .overlay, .cookie, .cookies, .cookie-banner, #cookie-banner, \
     .gdpr, .newsletter-signup, .social-share";

/// Candidate selectors for the primary content block, in preference order
const MAIN_CONTENT_SELECTORS: &[&str] = &[
    "main",
    "article",
    "[role=\"main\"]",
    "#main",
    "#content",
    ".main-content",
    ".content",
    ".article",
    ".post",
    ".entry-content",
];

/// Site chrome stripped when falling back to whole-page main content
const CHROME_SELECTORS: &str =
    "nav, header, footer, aside, .navbar, .navigation, .menu, .sidebar, .breadcrumb";

/// Removes every node matching the noise denylist from the tree.
pub fn remove_noise(document: &mut Html) {
    remove_matching(document, NOISE_SELECTORS);
}

fn remove_matching(document: &mut Html, selectors: &str) {
    if let Ok(selector) = Selector::parse(selectors) {
        let ids: Vec<_> = document.select(&selector).map(|el| el.id()).collect();
        for id in ids {
            if let Some(mut node) = document.tree.get_mut(id) {
                node.detach();
            }
        }
    }
}

/// All text nodes of the document, space-joined in document order.
///
/// Raw in the sense that whitespace inside text nodes is preserved; blank
/// lines between blocks survive until [`clean_text`] collapses them.
pub fn visible_text(document: &Html) -> String {
    document
        .root_element()
        .text()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extracts the page title via the fallback chain:
/// `<title>`, then the first `<h1>`, then `og:title`, then
/// `twitter:title`, and finally the literal placeholder `"no title"`.
pub fn extract_title(document: &Html, metadata: &BTreeMap<String, Value>) -> String {
    for selector in ["title", "h1"] {
        if let Ok(sel) = Selector::parse(selector) {
            if let Some(element) = document.select(&sel).next() {
                let text = element_text(element);
                if !text.is_empty() {
                    return text;
                }
            }
        }
    }

    for key in ["og:title", "twitter:title"] {
        if let Some(Value::String(value)) = metadata.get(key) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return trimmed.to_string();
            }
        }
    }

    "no title".to_string()
}

/// Picks the primary content block.
///
/// Tries the main-content selectors and keeps the match with the longest
/// plain text. When nothing matches, clones the tree, strips site chrome
/// and uses the remaining text.
pub fn extract_main_content(document: &Html) -> String {
    let mut best = String::new();
    for selector in MAIN_CONTENT_SELECTORS {
        if let Ok(sel) = Selector::parse(selector) {
            for element in document.select(&sel) {
                let text = element.text().collect::<Vec<_>>().join(" ");
                if text.trim().len() > best.trim().len() {
                    best = text;
                }
            }
        }
    }

    if !best.trim().is_empty() {
        return clean_text(&best);
    }

    let mut stripped = document.clone();
    remove_matching(&mut stripped, CHROME_SELECTORS);
    clean_text(&visible_text(&stripped))
}

/// Normalizes extracted text: control characters are dropped, space and
/// tab runs collapse to a single space, whitespace around newlines is
/// trimmed, and runs of three or more newlines collapse to a blank line.
pub fn clean_text(raw: &str) -> String {
    let without_control: String = raw
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect();

    let spaces = Regex::new(r"[ \t]+").expect("valid whitespace pattern");
    let collapsed = spaces.replace_all(&without_control, " ");

    let around_newlines = Regex::new(r" ?\n ?").expect("valid newline pattern");
    let trimmed_lines = around_newlines.replace_all(&collapsed, "\n");

    let blank_runs = Regex::new(r"\n{3,}").expect("valid blank-line pattern");
    let collapsed_blanks = blank_runs.replace_all(&trimmed_lines, "\n\n");

    collapsed_blanks.trim().to_string()
}

/// Builds a short summary from cleaned text.
///
/// Text under 100 chars is returned verbatim. Otherwise the text is split
/// into sentences (periods, exclamation and question marks; only
/// sentences over 20 chars count). Fewer than 3 usable sentences falls
/// back to a 500-char truncation with an ellipsis. With enough sentences,
/// up to 3 containing an importance keyword are preferred, else the first
/// 3 are taken.
pub fn summarize(cleaned: &str) -> String {
    if cleaned.chars().count() < 100 {
        return cleaned.to_string();
    }

    let sentences: Vec<&str> = cleaned
        .split(|c| c == '.' || c == '!' || c == '?')
        .map(str::trim)
        .filter(|s| s.chars().count() > 20)
        .collect();

    if sentences.len() < 3 {
        let truncated: String = cleaned.chars().take(500).collect();
        return format!("{}...", truncated.trim_end());
    }

    let important: Vec<&str> = sentences
        .iter()
        .copied()
        .filter(|sentence| {
            let lower = sentence.to_lowercase();
            IMPORTANCE_TERMS.iter().any(|term| lower.contains(term))
        })
        .take(3)
        .collect();

    let chosen: &[&str] = if important.is_empty() {
        &sentences[..3]
    } else {
        &important
    };

    format!("{}.", chosen.join(". "))
}

/// Whitespace-normalized text content of a single element.
pub fn element_text(element: ElementRef) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
