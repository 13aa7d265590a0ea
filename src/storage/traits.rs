//! Persistence sink trait and error types
//!
//! The sink is a pure side effect: the crawl loop calls it for every
//! accepted page and once for the final path, logs any error it returns
//! and moves on. Sink failures never fail a crawl.

use crate::crawler::NavigationPath;
use crate::extract::PageRecord;
use thiserror::Error;

/// Errors that can occur while persisting crawl output
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for sink operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Destination for extracted pages and finished navigation paths
pub trait PageSink {
    /// Persists one accepted page under the crawl's session id.
    fn save_page(&self, record: &PageRecord, session_id: &str) -> StorageResult<()>;

    /// Persists the aggregate result of a finished crawl.
    fn save_path(&self, path: &NavigationPath) -> StorageResult<()>;
}

/// Sink that discards everything; used by tests and dry runs
pub struct NullSink;

impl PageSink for NullSink {
    fn save_page(&self, _record: &PageRecord, _session_id: &str) -> StorageResult<()> {
        Ok(())
    }

    fn save_path(&self, _path: &NavigationPath) -> StorageResult<()> {
        Ok(())
    }
}
