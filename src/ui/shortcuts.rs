//! Keyboard shortcut mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A user action triggered from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Start if stopped, pause if running
    ToggleRun,
    Reset,
    ToggleLayout,
    ClosePanel,
    SwitchFocus,
    SwitchRest,
    OpenSettings,
    Quit,
}

/// Maps a key press to an action.
///
/// Letters match regardless of case. While a text field is being edited
/// every shortcut is ignored except Ctrl-C.
pub fn map_key(key: &KeyEvent, in_text_input: bool) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if is_interrupt(key) {
        return Some(Action::Quit);
    }
    if in_text_input {
        return None;
    }
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => Some(Action::ToggleRun),
        KeyCode::Esc => Some(Action::ClosePanel),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'r' => Some(Action::Reset),
            'l' => Some(Action::ToggleLayout),
            'f' => Some(Action::SwitchFocus),
            'b' => Some(Action::SwitchRest),
            's' => Some(Action::OpenSettings),
            'q' => Some(Action::Quit),
            _ => None,
        },
        _ => None,
    }
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
}
