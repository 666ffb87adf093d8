//! Feed source addressing

use std::fmt;
use std::path::PathBuf;

/// Where a feed document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    /// An HTTP(S) endpoint
    Url(String),
    /// A file on disk
    File(PathBuf),
}

impl FeedSource {
    /// Parse a configured source string: `http://` and `https://` prefixes
    /// are URLs, everything else is a filesystem path
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            FeedSource::Url(raw.to_string())
        } else {
            FeedSource::File(PathBuf::from(raw))
        }
    }
}

impl fmt::Display for FeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedSource::Url(url) => write!(f, "{}", url),
            FeedSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}
