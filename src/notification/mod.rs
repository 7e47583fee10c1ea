//! Desktop notifications for completed sessions.
//!
//! This module provides:
//!
//! - Notification content for each finished session type
//! - Platform notifier detection (terminal-notifier, osascript, notify-send)
//! - Fire-and-forget delivery on a background thread
//!
//! Whether notifications may be shown at all is decided by the
//! [`NotificationPermission`](crate::types::NotificationPermission) stored
//! with the settings; the completion notifier checks it before sending.

pub mod backend;
pub mod content;
pub mod error;

use std::sync::{Arc, Mutex};
use std::thread;

use tracing::{debug, warn};

pub use self::backend::Backend;
pub use self::content::{
    completion_message, create_completion_content, NotificationContent,
    NotificationContentBuilder, NOTIFICATION_TAG, NOTIFICATION_TITLE,
};
pub use self::error::NotificationError;

/// Trait for notification delivery.
pub trait NotificationSender {
    /// Hands the notification to the system. Must not block on delivery.
    ///
    /// # Errors
    ///
    /// Returns an error if the notification cannot be dispatched.
    fn send(&self, content: &NotificationContent) -> Result<(), NotificationError>;

    /// Returns true if a notifier is available.
    fn is_available(&self) -> bool;
}

/// Sends notifications through the detected platform backend.
#[derive(Debug, Clone, Copy)]
pub struct DesktopNotifier {
    backend: Option<Backend>,
}

impl DesktopNotifier {
    /// Creates a notifier using the detected backend.
    #[must_use]
    pub fn detect() -> Self {
        let backend = Backend::detect();
        match backend {
            Some(b) => debug!("Notification backend: {}", b.name()),
            None => warn!("No desktop notifier found, notifications disabled"),
        }
        Self { backend }
    }

    /// Creates a notifier with an explicit backend.
    #[must_use]
    pub fn with_backend(backend: Option<Backend>) -> Self {
        Self { backend }
    }
}

impl NotificationSender for DesktopNotifier {
    fn send(&self, content: &NotificationContent) -> Result<(), NotificationError> {
        let backend = self.backend.ok_or(NotificationError::NotAvailable)?;
        let content = content.clone();

        thread::Builder::new()
            .name("notification".to_string())
            .spawn(move || {
                if let Err(e) = backend.send(&content) {
                    warn!("Notification delivery failed: {}", e);
                }
            })
            .map_err(|e| NotificationError::SendFailed(e.to_string()))?;
        Ok(())
    }

    fn is_available(&self) -> bool {
        self.backend.is_some()
    }
}

/// Mock notification sender for testing.
///
/// Clones share the recorded notifications.
#[derive(Debug, Clone)]
pub struct MockNotificationSender {
    sent: Arc<Mutex<Vec<NotificationContent>>>,
    should_fail: bool,
    available: bool,
}

impl MockNotificationSender {
    #[must_use]
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            should_fail: false,
            available: true,
        }
    }

    /// Creates a sender whose every send fails.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }

    /// Creates a sender that reports no notifier.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    #[must_use]
    pub fn sent(&self) -> Vec<NotificationContent> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }

    #[must_use]
    pub fn sent_count(&self) -> usize {
        self.sent.lock().map(|s| s.len()).unwrap_or(0)
    }
}

impl Default for MockNotificationSender {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationSender for MockNotificationSender {
    fn send(&self, content: &NotificationContent) -> Result<(), NotificationError> {
        if !self.available {
            return Err(NotificationError::NotAvailable);
        }
        if self.should_fail {
            return Err(NotificationError::SendFailed("mock failure".to_string()));
        }
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(content.clone());
        }
        Ok(())
    }

    fn is_available(&self) -> bool {
        self.available
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SessionType;

    #[test]
    fn test_desktop_notifier_without_backend() {
        let notifier = DesktopNotifier::with_backend(None);
        assert!(!notifier.is_available());
        let content = create_completion_content(SessionType::Focus).unwrap();
        assert!(matches!(
            notifier.send(&content),
            Err(NotificationError::NotAvailable)
        ));
    }

    #[test]
    fn test_mock_records_sent() {
        let handle = MockNotificationSender::new();
        let sender = handle.clone();
        let content = create_completion_content(SessionType::LongBreak).unwrap();
        sender.send(&content).unwrap();
        assert_eq!(handle.sent_count(), 1);
        assert_eq!(handle.sent()[0], content);
    }

    #[test]
    fn test_mock_failing_and_unavailable() {
        let content = create_completion_content(SessionType::Focus).unwrap();
        assert!(MockNotificationSender::failing().send(&content).is_err());
        let unavailable = MockNotificationSender::unavailable();
        assert!(!unavailable.is_available());
        assert!(unavailable.send(&content).is_err());
    }
}
