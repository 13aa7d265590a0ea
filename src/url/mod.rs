//! URL helpers for the outgoing-link policy
//!
//! Same-site checks, asset detection and fragment handling used when the
//! crawler decides which discovered links are worth enqueueing.

use url::Url;

/// File extensions that mark a URL as a binary or asset download
const ASSET_EXTENSIONS: &[&str] = &[
    ".jpg", ".jpeg", ".png", ".gif", ".svg", ".webp", ".ico", ".css", ".js", ".pdf", ".zip",
    ".tar", ".gz", ".rar", ".exe", ".dmg", ".mp3", ".mp4", ".avi", ".mov", ".woff", ".woff2",
    ".ttf", ".xml", ".doc", ".docx", ".xls", ".xlsx",
];

/// Reduces a host to its registrable domain.
///
/// Strips a leading `www.` and keeps the last two labels. This is a
/// two-label heuristic, not a public-suffix-list lookup: `co.uk`-style
/// suffixes collapse to the suffix itself.
pub fn registrable_domain(host: &str) -> String {
    let host = host.strip_prefix("www.").unwrap_or(host);
    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() <= 2 {
        host.to_ascii_lowercase()
    } else {
        labels[labels.len() - 2..].join(".").to_ascii_lowercase()
    }
}

/// Returns true when both URLs share a registrable domain.
pub fn same_site(a: &Url, b: &Url) -> bool {
    match (a.host_str(), b.host_str()) {
        (Some(x), Some(y)) => registrable_domain(x) == registrable_domain(y),
        _ => false,
    }
}

/// Returns true when the URL path ends in a known asset extension.
pub fn is_asset_url(url: &Url) -> bool {
    let path = url.path().to_ascii_lowercase();
    ASSET_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

/// Returns true when `candidate` is just `base` plus a fragment.
///
/// Fragment-only hrefs resolve to the page's own URL with a `#...` suffix;
/// following them would re-enqueue the current page.
pub fn is_fragment_self_link(base: &Url, candidate: &Url) -> bool {
    if candidate.fragment().is_none() {
        return false;
    }
    let mut stripped = candidate.clone();
    stripped.set_fragment(None);
    let mut base_stripped = base.clone();
    base_stripped.set_fragment(None);
    stripped == base_stripped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_registrable_domain_basic() {
        assert_eq!(registrable_domain("example.com"), "example.com");
        assert_eq!(registrable_domain("www.example.com"), "example.com");
        assert_eq!(registrable_domain("blog.example.com"), "example.com");
        assert_eq!(registrable_domain("deep.sub.example.com"), "example.com");
    }

    #[test]
    fn test_registrable_domain_case() {
        assert_eq!(registrable_domain("Blog.Example.COM"), "example.com");
    }

    #[test]
    fn test_same_site() {
        assert!(same_site(
            &url("https://example.com/a"),
            &url("https://www.example.com/b")
        ));
        assert!(same_site(
            &url("https://blog.example.com/"),
            &url("https://shop.example.com/")
        ));
        assert!(!same_site(
            &url("https://example.com/"),
            &url("https://other.com/")
        ));
    }

    #[test]
    fn test_same_site_loopback() {
        // Integration fixtures crawl a 127.0.0.1 mock server
        assert!(same_site(
            &url("http://127.0.0.1:8080/a"),
            &url("http://127.0.0.1:8080/b")
        ));
    }

    #[test]
    fn test_is_asset_url() {
        assert!(is_asset_url(&url("https://example.com/logo.png")));
        assert!(is_asset_url(&url("https://example.com/doc.PDF")));
        assert!(is_asset_url(&url("https://example.com/bundle.js?v=3")));
        assert!(!is_asset_url(&url("https://example.com/article")));
        assert!(!is_asset_url(&url("https://example.com/guide.html")));
    }

    #[test]
    fn test_fragment_self_link() {
        let base = url("https://example.com/page");
        assert!(is_fragment_self_link(&base, &url("https://example.com/page#section")));
        assert!(!is_fragment_self_link(&base, &url("https://example.com/other#section")));
        assert!(!is_fragment_self_link(&base, &url("https://example.com/page")));
    }
}
