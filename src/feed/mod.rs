//! Read-only JSON feeds
//!
//! A feed is a JSON document fetched once per session:
//! - URL sources go over HTTP; non-2xx responses count as failures
//! - File sources are read from disk (local data directories, tests)
//! - Bodies are deserialized with serde; invalid JSON is a failure

pub mod client;
pub mod source;

pub use client::FeedClient;
pub use source::FeedSource;

use thiserror::Error;

/// Errors that can occur while fetching a feed
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias for feed operations
pub type FeedResult<T> = Result<T, FeedError>;
