use crate::crawler::NavigationStrategy;
use serde::Deserialize;

/// Default browser-like user agent sent with every fetch
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Main configuration structure for Plongeur
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    pub fetcher: FetcherConfig,
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Maximum depth to crawl from the seed URL
    #[serde(rename = "max-depth")]
    pub max_depth: u32,

    /// Maximum number of pages accepted per crawl
    #[serde(rename = "max-pages")]
    pub max_pages: usize,

    /// Frontier traversal strategy
    pub strategy: NavigationStrategy,

    /// Fixed delay between crawl iterations (milliseconds)
    #[serde(rename = "request-delay-ms")]
    pub request_delay_ms: u64,

    /// Maximum outgoing links enqueued per accepted page
    #[serde(rename = "links-per-page")]
    pub links_per_page: usize,

    /// Whether a failed fetch marks the URL visited (prevents retries
    /// via other parent pages within the same crawl)
    #[serde(rename = "mark-visited-on-failure")]
    pub mark_visited_on_failure: bool,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_depth: 2,
            max_pages: 10,
            strategy: NavigationStrategy::BreadthFirst,
            request_delay_ms: 500,
            links_per_page: 5,
            mark_visited_on_failure: false,
        }
    }
}

/// HTTP fetcher configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    /// Request timeout in seconds
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// User-Agent header value
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 12,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving the per-page and per-session JSON files
    #[serde(rename = "pages-dir")]
    pub pages_dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pages_dir: "./crawl-output".to_string(),
        }
    }
}
