//! Notification permission prompt.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::types::NotificationPermission;

/// Delay between startup and showing the prompt.
pub const PROMPT_DELAY: std::time::Duration = std::time::Duration::from_secs(2);

/// Reads a y/n answer from a key press.
///
/// Returns `None` for any other key, leaving the prompt open.
pub fn answer(key: &KeyEvent) -> Option<NotificationPermission> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => Some(NotificationPermission::Granted),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(NotificationPermission::Denied),
        _ => None,
    }
}

/// Returns true if the prompt should be shown for `permission`.
pub fn should_prompt(permission: NotificationPermission) -> bool {
    permission.is_undecided()
}
