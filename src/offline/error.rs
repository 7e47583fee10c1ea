//! Offline cache error types.

use thiserror::Error;

/// Errors that can occur while filling or serving the offline cache.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// The network request failed.
    #[error("fetch failed for {0}: {1}")]
    Network(String, String),

    /// A precache resource answered with a non-success status.
    #[error("bad response for {0}: status {1}")]
    BadStatus(String, u16),
}

impl CacheError {
    /// URL the error refers to.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Network(url, _) | Self::BadStatus(url, _) => url,
        }
    }
}
