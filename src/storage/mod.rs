//! Persistence for crawl output
//!
//! Best-effort JSON file storage keyed by session id. The crawl loop
//! treats every sink error as a warning, never as a failure.

mod json;
mod traits;

pub use json::JsonSink;
pub use traits::{NullSink, PageSink, StorageError, StorageResult};
