//! Configuration loading and validation
//!
//! TOML configuration with kebab-case keys. Every field has a default
//! matching the reference crawl behavior, so an empty or absent file
//! yields a usable configuration.

mod parser;
mod types;
mod validation;

pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use types::{Config, CrawlerConfig, FetcherConfig, OutputConfig, DEFAULT_USER_AGENT};
pub use validation::validate;
