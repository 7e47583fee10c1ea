//! Notification content construction.

use crate::types::SessionType;

use super::error::NotificationError;

/// Title used for every completion notification.
pub const NOTIFICATION_TITLE: &str = "Pomodoro Timer";

/// Replaces earlier notifications from the timer instead of stacking them.
pub const NOTIFICATION_TAG: &str = "pomodoro-notification";

/// Maximum length for notification text.
const MAX_TEXT_LENGTH: usize = 200;

/// A notification ready to be handed to a backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationContent {
    pub title: String,
    pub body: String,
    pub tag: String,
}

/// Builder for constructing notification content.
#[derive(Debug, Clone, Default)]
pub struct NotificationContentBuilder {
    title: Option<String>,
    body: Option<String>,
    tag: Option<String>,
}

impl NotificationContentBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the notification title.
    #[must_use]
    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Sets the notification body text.
    #[must_use]
    pub fn body(mut self, body: &str) -> Self {
        self.body = Some(body.to_string());
        self
    }

    /// Sets the replacement tag.
    #[must_use]
    pub fn tag(mut self, tag: &str) -> Self {
        self.tag = Some(tag.to_string());
        self
    }

    /// Builds the content, sanitizing title and body.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the title or body is empty after sanitizing.
    pub fn build(self) -> Result<NotificationContent, NotificationError> {
        let title = sanitize_text(self.title.as_deref().unwrap_or(NOTIFICATION_TITLE));
        let body = sanitize_text(self.body.as_deref().unwrap_or_default());

        if title.is_empty() {
            return Err(NotificationError::InvalidInput("empty title".to_string()));
        }
        if body.is_empty() {
            return Err(NotificationError::InvalidInput("empty body".to_string()));
        }

        Ok(NotificationContent {
            title,
            body,
            tag: self.tag.unwrap_or_else(|| NOTIFICATION_TAG.to_string()),
        })
    }
}

/// Message shown when a session of the given type finishes.
#[must_use]
pub fn completion_message(finished: SessionType) -> &'static str {
    match finished {
        SessionType::Focus => "Time for a break! Great work!",
        SessionType::ShortBreak => "Break is over. Ready to focus?",
        SessionType::LongBreak => "Long break complete. Let's get back to work!",
    }
}

/// Creates the completion notification for a finished session.
///
/// # Errors
///
/// Never fails for the built-in messages; the `Result` comes from the builder.
pub fn create_completion_content(
    finished: SessionType,
) -> Result<NotificationContent, NotificationError> {
    NotificationContentBuilder::new()
        .title(NOTIFICATION_TITLE)
        .body(completion_message(finished))
        .tag(NOTIFICATION_TAG)
        .build()
}

/// Truncates and strips control characters.
fn sanitize_text(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control())
        .take(MAX_TEXT_LENGTH)
        .collect::<String>()
        .trim()
        .to_string()
}
