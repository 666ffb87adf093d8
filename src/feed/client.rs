//! Feed retrieval over HTTP or from disk

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::source::FeedSource;
use super::{FeedError, FeedResult};

/// Fetches feed documents from their configured sources
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: reqwest::Client,
}

impl FeedClient {
    /// Create a client; `timeout_ms` bounds URL fetches when set.
    /// Without it a hung request keeps its panel in the loading state.
    pub fn new(timeout_ms: Option<u64>) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(ms) = timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        let http = builder.build().expect("Failed to create HTTP client");
        Self { http }
    }

    /// Fetch a source and deserialize the document into `T`
    pub async fn fetch_json<T: DeserializeOwned>(&self, source: &FeedSource) -> FeedResult<T> {
        let bytes = self.fetch_bytes(source).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Fetch a source as a loosely-typed JSON value
    pub async fn fetch_value(&self, source: &FeedSource) -> FeedResult<Value> {
        self.fetch_json(source).await
    }

    async fn fetch_bytes(&self, source: &FeedSource) -> FeedResult<Vec<u8>> {
        match source {
            FeedSource::Url(url) => {
                debug!(%url, "fetching feed");
                let response = self.http.get(url).send().await?.error_for_status()?;
                Ok(response.bytes().await?.to_vec())
            }
            FeedSource::File(path) => {
                debug!(path = %path.display(), "reading feed file");
                tokio::fs::read(path).await.map_err(|source| FeedError::Io {
                    path: path.display().to_string(),
                    source,
                })
            }
        }
    }
}

impl Default for FeedClient {
    fn default() -> Self {
        Self::new(None)
    }
}
