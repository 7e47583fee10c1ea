//! Wake lock error types.
//!
//! Every variant is recoverable: a failed wake lock only means the display
//! may sleep during a focus session.

use thiserror::Error;

/// Errors that can occur while holding the display awake.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WakeLockError {
    /// No inhibitor is known for this platform.
    #[error("wake lock is not supported on this platform")]
    Unsupported,

    /// The inhibitor program is not installed.
    #[error("wake lock tool '{0}' was not found")]
    ToolNotFound(String),

    /// The inhibitor program could not be started.
    #[error("failed to start wake lock tool '{0}': {1}")]
    SpawnFailed(String, String),

    /// The inhibitor process could not be stopped.
    #[error("failed to release wake lock: {0}")]
    ReleaseFailed(String),
}

impl WakeLockError {
    /// Returns true if the error means the feature is unavailable here.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unsupported | Self::ToolNotFound(_))
    }

    /// Returns true if the timer should continue. Always the case.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        true
    }

    /// Returns a user-friendly suggestion for resolving this error.
    #[must_use]
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::Unsupported => "keep the display awake through your system settings",
            Self::ToolNotFound(_) => "install systemd-inhibit (Linux) or caffeinate (macOS)",
            Self::SpawnFailed(_, _) => "check that the wake lock tool can run from this shell",
            Self::ReleaseFailed(_) => "stop any leftover inhibitor process manually",
        }
    }
}
