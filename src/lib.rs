//! Plongeur: a bounded deep-navigation web crawler
//!
//! This crate implements a sequential, budget-bounded crawler that follows
//! same-site links from a seed URL, extracts a structured record from every
//! page it visits, and persists the results as JSON files. Traversal order
//! is breadth-first by default and can be switched to a quality-estimate
//! ordering; page and depth budgets bound every crawl.

pub mod config;
pub mod crawler;
pub mod extract;
pub mod score;
pub mod storage;
pub mod url;

use thiserror::Error;

/// Main error type for crawler setup and the surrounding tooling.
///
/// The crawl loop itself never surfaces these: per-page fetch and
/// extraction failures become `PageRecord`s with `success == false`, and
/// persistence failures are logged and swallowed. `CrawlError` covers the
/// fallible edges: configuration, client construction, sink setup.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for crawler operations
pub type Result<T> = std::result::Result<T, CrawlError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{NavigationPath, NavigationStrategy, Navigator};
pub use extract::{extract, PageRecord};
pub use score::Language;
