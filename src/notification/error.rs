//! Notification system error types.
//!
//! This module defines the error types for desktop notifications.
//! None of them stop the timer; they are logged and the notification is
//! skipped.

use thiserror::Error;

/// Errors that can occur in the notification system.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// Failed to send a notification.
    #[error("failed to send notification: {0}")]
    SendFailed(String),

    /// Invalid input provided to the notification system.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No notifier program is available on this system.
    #[error("no desktop notifier is available")]
    NotAvailable,
}

impl NotificationError {
    /// Returns a user-friendly suggestion for resolving this error.
    #[must_use]
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::SendFailed(_) => "check that your desktop notification daemon is running",
            Self::InvalidInput(_) => "notification text must not be empty",
            Self::NotAvailable => "install notify-send (Linux) or terminal-notifier (macOS)",
        }
    }
}
