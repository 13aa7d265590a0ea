//! JSON file sink
//!
//! Writes one pretty-printed JSON file per accepted page, named
//! `{session_id}_{url_hash}.json`, and one `navigation_{session_id}.json`
//! summary per crawl. The summary carries aggregate stats and the visited
//! URLs, not the full page bodies.

use crate::crawler::NavigationPath;
use crate::extract::PageRecord;
use crate::storage::traits::{PageSink, StorageResult};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

/// Hex characters of the URL hash kept in page file names
const URL_HASH_LEN: usize = 16;

/// Sink writing crawl output into a directory of JSON files
pub struct JsonSink {
    dir: PathBuf,
}

#[derive(Serialize)]
struct PathSummary<'a> {
    start_url: &'a str,
    navigation_depth: u32,
    total_content_extracted: usize,
    navigation_strategy: &'a str,
    session_id: &'a str,
    created_at: DateTime<Utc>,
    visited_pages_count: usize,
    visited_urls: Vec<&'a str>,
}

impl JsonSink {
    /// Creates the sink, creating the output directory if needed.
    pub fn new(dir: &Path) -> StorageResult<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    /// Stable short hash of a URL for file naming.
    pub fn url_hash(url: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(url.as_bytes());
        let digest = hex::encode(hasher.finalize());
        digest[..URL_HASH_LEN].to_string()
    }

    fn page_file(&self, record: &PageRecord, session_id: &str) -> PathBuf {
        self.dir
            .join(format!("{}_{}.json", session_id, Self::url_hash(&record.url)))
    }

    fn path_file(&self, session_id: &str) -> PathBuf {
        self.dir.join(format!("navigation_{}.json", session_id))
    }
}

impl PageSink for JsonSink {
    fn save_page(&self, record: &PageRecord, session_id: &str) -> StorageResult<()> {
        let serialized = serde_json::to_string_pretty(record)?;
        fs::write(self.page_file(record, session_id), serialized)?;
        Ok(())
    }

    fn save_path(&self, path: &NavigationPath) -> StorageResult<()> {
        let summary = PathSummary {
            start_url: &path.start_url,
            navigation_depth: path.navigation_depth,
            total_content_extracted: path.total_content_extracted,
            navigation_strategy: path.navigation_strategy.as_str(),
            session_id: &path.session_id,
            created_at: path.created_at,
            visited_pages_count: path.visited_pages.len(),
            visited_urls: path.visited_pages.iter().map(|p| p.url.as_str()).collect(),
        };
        let serialized = serde_json::to_string_pretty(&summary)?;
        fs::write(self.path_file(&path.session_id), serialized)?;
        Ok(())
    }
}
