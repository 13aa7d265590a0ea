//! Crawler module: frontier traversal and its result aggregate
//!
//! This module contains the bounded crawl logic:
//! - HTTP fetching with browser-like headers
//! - The frontier queue and its strategy-dependent ordering
//! - The navigator driving the fetch/extract/filter/enqueue loop
//! - The navigation path aggregate a crawl produces

mod fetcher;
mod frontier;
mod navigator;

pub use fetcher::{build_http_client, fetch_url, FetchOutcome};
pub use frontier::Frontier;
pub use navigator::{ContentFilter, Navigator};

use crate::extract::PageRecord;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Traversal order of the frontier queue.
///
/// `DepthFirst` is accepted as a distinct tag but its queue behavior is
/// FIFO, identical to `BreadthFirst`; only `QualityFirst` changes the
/// ordering, by re-sorting the queue on the URL quality estimate before
/// every pop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum NavigationStrategy {
    BreadthFirst,
    DepthFirst,
    QualityFirst,
}

impl NavigationStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BreadthFirst => "breadth_first",
            Self::DepthFirst => "depth_first",
            Self::QualityFirst => "quality_first",
        }
    }
}

impl fmt::Display for NavigationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NavigationStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breadth_first" => Ok(Self::BreadthFirst),
            "depth_first" => Ok(Self::DepthFirst),
            "quality_first" => Ok(Self::QualityFirst),
            other => Err(format!("unknown navigation strategy: {}", other)),
        }
    }
}

/// The aggregate result of one crawl.
///
/// Created empty when the crawl starts, grown by the navigator as pages
/// are accepted, then frozen and persisted when the loop terminates.
#[derive(Debug, Clone, Serialize)]
pub struct NavigationPath {
    pub start_url: String,
    /// Unique per crawl; keys the persisted artifacts
    pub session_id: String,
    pub navigation_strategy: NavigationStrategy,
    pub created_at: DateTime<Utc>,
    /// Accepted records in acceptance order
    pub visited_pages: Vec<PageRecord>,
    /// Maximum depth among accepted pages
    pub navigation_depth: u32,
    /// Sum of cleaned-text lengths over accepted pages
    pub total_content_extracted: usize,
}

impl NavigationPath {
    pub fn new(start_url: &str, session_id: String, strategy: NavigationStrategy) -> Self {
        Self {
            start_url: start_url.to_string(),
            session_id,
            navigation_strategy: strategy,
            created_at: Utc::now(),
            visited_pages: Vec::new(),
            navigation_depth: 0,
            total_content_extracted: 0,
        }
    }
}
