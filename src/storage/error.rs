//! Storage error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or writing the key-value store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No data directory could be determined.
    #[error("could not determine a data directory; pass --data-dir")]
    NoDataDir,

    /// Reading or writing the store file failed.
    #[error("storage I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The store contents could not be encoded.
    #[error("failed to encode storage: {0}")]
    Encode(#[from] serde_json::Error),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns a user-friendly suggestion for resolving this error.
    #[must_use]
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::NoDataDir => "set POMODORO_TERM_HOME or pass --data-dir",
            Self::Io { .. } => "check permissions of the data directory",
            Self::Encode(_) => "report this as a bug",
        }
    }
}
