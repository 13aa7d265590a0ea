//! Navigator: the bounded crawl loop
//!
//! A `Navigator` owns everything one crawl site needs: the HTTP client,
//! the URL cache, the persistence sink and the session counter. Each
//! call-site constructs its own navigator; there is no shared global
//! instance.

use crate::config::Config;
use crate::crawler::fetcher::{build_http_client, fetch_url, FetchOutcome};
use crate::crawler::frontier::Frontier;
use crate::crawler::{NavigationPath, NavigationStrategy};
use crate::extract::{self, PageRecord};
use crate::score::link_interest_score;
use crate::storage::{JsonSink, PageSink};
use crate::url::{is_asset_url, is_fragment_self_link, same_site};
use chrono::Utc;
use reqwest::Client;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Caller-supplied predicate deciding whether an extracted page is kept
pub type ContentFilter<'a> = &'a dyn Fn(&PageRecord) -> bool;

/// Positive-scoring link candidates considered per page before the
/// per-page enqueue limit applies
const MAX_LINK_CANDIDATES: usize = 10;

/// Drives bounded deep-navigation crawls.
///
/// Holds the fetch cache and session counter as instance state; the
/// cache is unbounded for the navigator's lifetime and only successful
/// records enter it, so failed URLs stay retryable.
pub struct Navigator {
    config: Config,
    client: Client,
    cache: HashMap<String, PageRecord>,
    sink: Box<dyn PageSink + Send>,
    fetches: u64,
    session_counter: u64,
}

impl Navigator {
    /// Creates a navigator persisting to the configured pages directory.
    pub fn new(config: Config) -> crate::Result<Self> {
        let sink = JsonSink::new(Path::new(&config.output.pages_dir))?;
        Self::with_sink(config, Box::new(sink))
    }

    /// Creates a navigator with an explicit persistence sink.
    pub fn with_sink(config: Config, sink: Box<dyn PageSink + Send>) -> crate::Result<Self> {
        let client = build_http_client(&config.fetcher)?;
        Ok(Self {
            config,
            client,
            cache: HashMap::new(),
            sink,
            fetches: 0,
            session_counter: 0,
        })
    }

    /// Number of network GETs issued so far (cache hits excluded).
    pub fn fetches_performed(&self) -> u64 {
        self.fetches
    }

    /// Fetches and extracts a single page, going through the cache.
    ///
    /// Fetch failures yield a record with `success == false`; this method
    /// never returns an error. Successful records are cached under the
    /// requested URL.
    pub async fn extract_page_content(&mut self, url: &str) -> PageRecord {
        if let Some(cached) = self.cache.get(url) {
            tracing::debug!("cache hit: {}", url);
            return cached.clone();
        }

        self.fetches += 1;
        match fetch_url(&self.client, url).await {
            FetchOutcome::Success {
                final_url, body, ..
            } => {
                let record = extract::extract(&body, &final_url);
                if record.success {
                    self.cache.insert(url.to_string(), record.clone());
                }
                record
            }
            FetchOutcome::HttpStatus { status_code } => {
                PageRecord::failure(url, format!("HTTP status {}", status_code))
            }
            FetchOutcome::Network { error } => PageRecord::failure(url, error),
        }
    }

    /// Runs one bounded crawl from a seed URL.
    ///
    /// The loop pops from the frontier until the queue empties or
    /// `max_pages` pages have been accepted. Already-visited URLs and
    /// entries beyond `max_depth` are skipped without consuming budget.
    /// Outgoing links are enqueued at `depth + 1`, and only from pages
    /// strictly below the depth limit. The final path is persisted once,
    /// accepted pages as they arrive.
    pub async fn navigate_deep(
        &mut self,
        start_url: &str,
        max_depth: u32,
        max_pages: usize,
        strategy: NavigationStrategy,
        content_filter: Option<ContentFilter<'_>>,
    ) -> NavigationPath {
        let session_id = self.next_session_id();
        tracing::info!(
            "starting crawl {} from {} (strategy={}, max_depth={}, max_pages={})",
            session_id,
            start_url,
            strategy,
            max_depth,
            max_pages
        );

        let mut path = NavigationPath::new(start_url, session_id, strategy);
        let mut frontier = Frontier::new(strategy);
        frontier.push(start_url.to_string(), 0);
        let mut visited: HashSet<String> = HashSet::new();

        while !frontier.is_empty() && path.visited_pages.len() < max_pages {
            let Some(entry) = frontier.pop() else {
                break;
            };

            if visited.contains(&entry.url) || entry.depth > max_depth {
                continue;
            }

            let record = self.extract_page_content(&entry.url).await;

            if record.success {
                visited.insert(entry.url.clone());

                if content_filter.map_or(true, |filter| filter(&record)) {
                    path.navigation_depth = path.navigation_depth.max(entry.depth);
                    path.total_content_extracted += record.cleaned_text.len();

                    if let Err(e) = self.sink.save_page(&record, &path.session_id) {
                        tracing::warn!("failed to persist page {}: {}", record.url, e);
                    }

                    if entry.depth < max_depth {
                        for link in self.select_interesting_links(&record, &visited) {
                            frontier.push(link, entry.depth + 1);
                        }
                    }

                    tracing::info!(
                        "accepted {} at depth {} ({}/{} pages, {} queued)",
                        record.url,
                        entry.depth,
                        path.visited_pages.len() + 1,
                        max_pages,
                        frontier.len()
                    );
                    path.visited_pages.push(record);
                } else {
                    tracing::debug!("content filter rejected {}", entry.url);
                }
            } else {
                tracing::warn!("fetch failed for {}: {}", entry.url, record.error_message);
                if self.config.crawler.mark_visited_on_failure {
                    visited.insert(entry.url.clone());
                }
            }

            tokio::time::sleep(Duration::from_millis(self.config.crawler.request_delay_ms)).await;
        }

        if let Err(e) = self.sink.save_path(&path) {
            tracing::warn!("failed to persist path {}: {}", path.session_id, e);
        }

        tracing::info!(
            "crawl {} finished: {} pages, depth {}, {} chars extracted",
            path.session_id,
            path.visited_pages.len(),
            path.navigation_depth,
            path.total_content_extracted
        );

        path
    }

    /// Picks the outgoing links worth enqueueing from an accepted page.
    ///
    /// Same-site, unvisited, non-asset, non-self links whose anchor text
    /// scores above zero, in discovery order. At most
    /// [`MAX_LINK_CANDIDATES`] candidates are considered, then the
    /// per-page limit truncates further. The list is never re-sorted by
    /// score; selection is order-dependent on purpose.
    fn select_interesting_links(
        &self,
        record: &PageRecord,
        visited: &HashSet<String>,
    ) -> Vec<String> {
        let Ok(base) = Url::parse(&record.url) else {
            return Vec::new();
        };

        let mut candidates = Vec::new();
        for link in &record.links {
            if candidates.len() >= MAX_LINK_CANDIDATES {
                break;
            }
            let Ok(parsed) = Url::parse(&link.url) else {
                continue;
            };
            if !same_site(&base, &parsed) {
                continue;
            }
            if visited.contains(&link.url) {
                continue;
            }
            if is_asset_url(&parsed) || is_fragment_self_link(&base, &parsed) {
                continue;
            }
            if link_interest_score(&link.text) <= 0 {
                continue;
            }
            candidates.push(link.url.clone());
        }

        candidates.truncate(self.config.crawler.links_per_page);
        candidates
    }

    fn next_session_id(&mut self) -> String {
        self.session_counter += 1;
        format!(
            "{}_{:03}",
            Utc::now().format("%Y%m%d%H%M%S"),
            self.session_counter
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::PageLink;
    use crate::storage::NullSink;

    fn test_navigator() -> Navigator {
        let mut config = Config::default();
        config.crawler.request_delay_ms = 0;
        Navigator::with_sink(config, Box::new(NullSink)).unwrap()
    }

    fn record_with_links(url: &str, links: Vec<(&str, &str)>) -> PageRecord {
        let mut record = PageRecord::failure(url, "placeholder");
        record.success = true;
        record.error_message.clear();
        record.links = links
            .into_iter()
            .map(|(href, text)| PageLink {
                url: href.to_string(),
                text: text.to_string(),
                title: String::new(),
                rel: String::new(),
                target: String::new(),
            })
            .collect();
        record
    }

    #[test]
    fn test_select_links_same_site_and_score() {
        let navigator = test_navigator();
        let record = record_with_links(
            "https://site.test/home",
            vec![
                ("https://site.test/guide", "Read the guide"),
                ("https://other.test/guide", "External guide"),
                ("https://site.test/menu", "Menu"),
            ],
        );
        let selected = navigator.select_interesting_links(&record, &HashSet::new());
        assert_eq!(selected, vec!["https://site.test/guide".to_string()]);
    }

    #[test]
    fn test_select_links_skips_visited_and_assets() {
        let navigator = test_navigator();
        let record = record_with_links(
            "https://site.test/home",
            vec![
                ("https://site.test/seen-article", "Article one"),
                ("https://site.test/photo.png", "Article photo guide"),
                ("https://site.test/fresh-article", "Article two"),
            ],
        );
        let mut visited = HashSet::new();
        visited.insert("https://site.test/seen-article".to_string());
        let selected = navigator.select_interesting_links(&record, &visited);
        assert_eq!(selected, vec!["https://site.test/fresh-article".to_string()]);
    }

    #[test]
    fn test_select_links_discovery_order_and_cap() {
        let navigator = test_navigator();
        let links: Vec<(String, String)> = (0..12)
            .map(|i| {
                (
                    format!("https://site.test/article-{}", i),
                    format!("Article {}", i),
                )
            })
            .collect();
        let record = record_with_links(
            "https://site.test/home",
            links
                .iter()
                .map(|(u, t)| (u.as_str(), t.as_str()))
                .collect(),
        );
        let selected = navigator.select_interesting_links(&record, &HashSet::new());
        // links-per-page default truncates the ten candidates to five,
        // keeping discovery order
        assert_eq!(selected.len(), 5);
        assert_eq!(selected[0], "https://site.test/article-0");
        assert_eq!(selected[4], "https://site.test/article-4");
    }

    #[test]
    fn test_select_links_skips_fragment_self_link() {
        let navigator = test_navigator();
        let record = record_with_links(
            "https://site.test/home",
            vec![("https://site.test/home#more-details", "More details")],
        );
        let selected = navigator.select_interesting_links(&record, &HashSet::new());
        assert!(selected.is_empty());
    }

    #[test]
    fn test_session_ids_are_unique() {
        let mut navigator = test_navigator();
        let a = navigator.next_session_id();
        let b = navigator.next_session_id();
        assert_ne!(a, b);
    }
}
