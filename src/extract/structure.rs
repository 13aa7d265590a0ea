//! Structural extraction: metadata, links, images, navigation elements
//! and heading-delimited content sections.

use crate::extract::{ContentSection, PageImage, PageLink};
use scraper::{ElementRef, Html, Selector};
use serde_json::Value;
use std::collections::BTreeMap;
use url::Url;

/// Reserved metadata key holding the parsed JSON-LD block
pub const JSON_LD_KEY: &str = "json-ld";

/// Containers whose anchors count as navigation elements
const NAV_SELECTORS: &[&str] = &[
    "nav",
    "[role=\"navigation\"]",
    ".navbar",
    ".navigation",
    ".menu",
    "#menu",
];

/// Collects `<meta>` tags keyed by `name`, `property` or `http-equiv`,
/// plus the first parseable `application/ld+json` script under the
/// reserved [`JSON_LD_KEY`].
///
/// Must run on the unmodified tree: noise removal deletes `<script>`
/// nodes, JSON-LD payloads included.
pub fn extract_metadata(document: &Html) -> BTreeMap<String, Value> {
    let mut metadata = BTreeMap::new();

    if let Ok(selector) = Selector::parse("meta") {
        for element in document.select(&selector) {
            let key = element
                .value()
                .attr("name")
                .or_else(|| element.value().attr("property"))
                .or_else(|| element.value().attr("http-equiv"));
            if let (Some(key), Some(content)) = (key, element.value().attr("content")) {
                metadata.insert(key.to_string(), Value::String(content.to_string()));
            }
        }
    }

    if let Ok(selector) = Selector::parse("script[type=\"application/ld+json\"]") {
        for element in document.select(&selector) {
            let body: String = element.text().collect();
            if let Ok(parsed) = serde_json::from_str::<Value>(&body) {
                metadata.insert(JSON_LD_KEY.to_string(), parsed);
                break;
            }
        }
    }

    metadata
}

/// Every anchor with an `href`, resolved against the page URL.
///
/// Only http/https results are kept; anything else (mailto, javascript,
/// data URIs, unparseable hrefs) is dropped. Document order is preserved.
pub fn extract_links(document: &Html, base: &Url) -> Vec<PageLink> {
    let mut links = Vec::new();
    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            if let Some(link) = anchor_to_link(element, base) {
                links.push(link);
            }
        }
    }
    links
}

/// Every `<img src>`, resolved against the page URL.
pub fn extract_images(document: &Html, base: &Url) -> Vec<PageImage> {
    let mut images = Vec::new();
    if let Ok(selector) = Selector::parse("img[src]") {
        for element in document.select(&selector) {
            let Some(src) = element.value().attr("src") else {
                continue;
            };
            let Ok(resolved) = base.join(src.trim()) else {
                continue;
            };
            if resolved.scheme() != "http" && resolved.scheme() != "https" {
                continue;
            }
            images.push(PageImage {
                url: resolved.to_string(),
                alt: attr_or_empty(element, "alt"),
                title: attr_or_empty(element, "title"),
                width: attr_or_empty(element, "width"),
                height: attr_or_empty(element, "height"),
            });
        }
    }
    images
}

/// Links found inside nav-like containers, resolved like regular links.
pub fn extract_navigation(document: &Html, base: &Url) -> Vec<PageLink> {
    let mut elements = Vec::new();
    let Ok(anchor_selector) = Selector::parse("a[href]") else {
        return elements;
    };
    for container in NAV_SELECTORS {
        if let Ok(selector) = Selector::parse(container) {
            for matched in document.select(&selector) {
                for anchor in matched.select(&anchor_selector) {
                    if let Some(link) = anchor_to_link(anchor, base) {
                        elements.push(link);
                    }
                }
            }
        }
    }
    elements
}

/// Heading-delimited sections: for each heading level h1..h6, each
/// heading element starts a section whose content is the text of its
/// following siblings up to the next heading of equal or higher level.
pub fn extract_sections(document: &Html) -> Vec<ContentSection> {
    let mut sections = Vec::new();
    for level in 1..=6u8 {
        let Ok(selector) = Selector::parse(&format!("h{}", level)) else {
            continue;
        };
        for heading in document.select(&selector) {
            let title = super::content::element_text(heading);
            let mut content = String::new();
            for sibling in heading.next_siblings() {
                if let Some(element) = ElementRef::wrap(sibling) {
                    if let Some(other_level) = heading_level(element.value().name()) {
                        if other_level <= level {
                            break;
                        }
                    }
                    content.push_str(&element.text().collect::<Vec<_>>().join(" "));
                    content.push(' ');
                } else if let Some(text) = sibling.value().as_text() {
                    content.push_str(&text.text);
                    content.push(' ');
                }
            }
            sections.push(ContentSection {
                title,
                content: content.split_whitespace().collect::<Vec<_>>().join(" "),
                level,
            });
        }
    }
    sections
}

fn heading_level(tag: &str) -> Option<u8> {
    match tag {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

fn anchor_to_link(element: ElementRef, base: &Url) -> Option<PageLink> {
    let href = element.value().attr("href")?.trim();
    if href.is_empty() {
        return None;
    }
    let resolved = base.join(href).ok()?;
    if resolved.scheme() != "http" && resolved.scheme() != "https" {
        return None;
    }
    Some(PageLink {
        url: resolved.to_string(),
        text: super::content::element_text(element),
        title: attr_or_empty(element, "title"),
        rel: attr_or_empty(element, "rel"),
        target: attr_or_empty(element, "target"),
    })
}

fn attr_or_empty(element: ElementRef, name: &str) -> String {
    element.value().attr(name).unwrap_or_default().to_string()
}
