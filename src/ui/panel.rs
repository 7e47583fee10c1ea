//! Settings panel.
//!
//! Five fields: three durations and two completion toggles. Up/Down moves
//! the selection, Left/Right adjusts the selected value and `e` opens a
//! duration for text entry. Every change is reported back immediately so
//! the caller can save and apply it.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::{
    TimerSettings, DEFAULT_FOCUS_MINUTES, DEFAULT_LONG_BREAK_MINUTES,
    DEFAULT_SHORT_BREAK_MINUTES, MAX_DURATION_MINUTES,
};

/// Longest text accepted in a duration field.
const MAX_INPUT_DIGITS: usize = 3;

/// A field in the settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FocusDuration,
    ShortBreakDuration,
    LongBreakDuration,
    Sound,
    Vibration,
}

impl Field {
    const ALL: [Field; 5] = [
        Field::FocusDuration,
        Field::ShortBreakDuration,
        Field::LongBreakDuration,
        Field::Sound,
        Field::Vibration,
    ];

    /// Label shown in the panel.
    pub fn label(&self) -> &'static str {
        match self {
            Field::FocusDuration => "Focus duration",
            Field::ShortBreakDuration => "Short break duration",
            Field::LongBreakDuration => "Long break duration",
            Field::Sound => "Sound",
            Field::Vibration => "Vibration",
        }
    }

    /// Returns true for the minute fields.
    pub fn is_duration(&self) -> bool {
        matches!(
            self,
            Field::FocusDuration | Field::ShortBreakDuration | Field::LongBreakDuration
        )
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn default_minutes(self) -> u32 {
        match self {
            Field::ShortBreakDuration => DEFAULT_SHORT_BREAK_MINUTES,
            Field::LongBreakDuration => DEFAULT_LONG_BREAK_MINUTES,
            _ => DEFAULT_FOCUS_MINUTES,
        }
    }
}

/// What a key did to the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelResponse {
    /// The key is not a panel key
    Ignored,
    /// The panel consumed the key without changing settings
    Handled,
    /// The settings changed and should be saved and applied
    Changed(TimerSettings),
}

/// Interactive editor for [`TimerSettings`].
#[derive(Debug, Clone)]
pub struct SettingsPanel {
    settings: TimerSettings,
    selected: Field,
    input: Option<String>,
}

impl SettingsPanel {
    /// Opens the panel on the current settings.
    pub fn new(settings: TimerSettings) -> Self {
        Self {
            settings,
            selected: Field::FocusDuration,
            input: None,
        }
    }

    pub fn settings(&self) -> &TimerSettings {
        &self.settings
    }

    pub fn selected(&self) -> Field {
        self.selected
    }

    /// Returns true while a duration is being typed.
    pub fn is_editing(&self) -> bool {
        self.input.is_some()
    }

    /// Text typed so far in the open field.
    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: &KeyEvent) -> PanelResponse {
        if key.kind == KeyEventKind::Release
            || key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return PanelResponse::Ignored;
        }
        if self.input.is_some() {
            return self.handle_input_key(key.code);
        }

        match key.code {
            KeyCode::Up => {
                self.move_selection(-1);
                PanelResponse::Handled
            }
            KeyCode::Down => {
                self.move_selection(1);
                PanelResponse::Handled
            }
            KeyCode::Left => self.adjust(-1),
            KeyCode::Right => self.adjust(1),
            KeyCode::Char('e') | KeyCode::Char('E') if self.selected.is_duration() => {
                self.input = Some(self.minutes(self.selected).to_string());
                PanelResponse::Handled
            }
            _ => PanelResponse::Ignored,
        }
    }

    /// Rows for display; the value being typed is shown with a cursor.
    pub fn rows(&self) -> Vec<(Field, String, bool)> {
        Field::ALL
            .iter()
            .map(|field| {
                let value = match (self.input.as_deref(), field.is_duration()) {
                    (Some(text), true) if *field == self.selected => format!("{}_ min", text),
                    (_, true) => format!("{} min", self.minutes(*field)),
                    (_, false) => on_off(self.flag(*field)).to_string(),
                };
                (*field, value, *field == self.selected)
            })
            .collect()
    }

    fn handle_input_key(&mut self, code: KeyCode) -> PanelResponse {
        let Some(input) = self.input.as_mut() else {
            return PanelResponse::Ignored;
        };
        match code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if input.len() < MAX_INPUT_DIGITS {
                    input.push(c);
                }
                PanelResponse::Handled
            }
            KeyCode::Backspace => {
                input.pop();
                PanelResponse::Handled
            }
            KeyCode::Enter | KeyCode::Tab => self.commit_input(),
            // Everything else is swallowed while typing
            _ => PanelResponse::Handled,
        }
    }

    fn commit_input(&mut self) -> PanelResponse {
        let Some(text) = self.input.take() else {
            return PanelResponse::Handled;
        };
        let field = self.selected;
        let minutes = match text.parse::<u32>() {
            Ok(0) | Err(_) => field.default_minutes(),
            Ok(m) => m.min(MAX_DURATION_MINUTES),
        };
        self.set_minutes(field, minutes);
        PanelResponse::Changed(self.settings)
    }

    fn move_selection(&mut self, delta: isize) {
        let len = Field::ALL.len() as isize;
        let next = (self.selected.index() as isize + delta).rem_euclid(len);
        self.selected = Field::ALL[next as usize];
    }

    fn adjust(&mut self, delta: i64) -> PanelResponse {
        let field = self.selected;
        if field.is_duration() {
            let current = i64::from(self.minutes(field));
            let next = (current + delta).clamp(1, i64::from(MAX_DURATION_MINUTES));
            if next == current {
                return PanelResponse::Handled;
            }
            self.set_minutes(field, next as u32);
        } else {
            let value = !self.flag(field);
            match field {
                Field::Sound => self.settings.sound_enabled = value,
                _ => self.settings.vibration_enabled = value,
            }
        }
        PanelResponse::Changed(self.settings)
    }

    fn minutes(&self, field: Field) -> u32 {
        match field {
            Field::ShortBreakDuration => self.settings.short_break_duration_minutes,
            Field::LongBreakDuration => self.settings.long_break_duration_minutes,
            _ => self.settings.focus_duration_minutes,
        }
    }

    fn set_minutes(&mut self, field: Field, minutes: u32) {
        match field {
            Field::ShortBreakDuration => self.settings.short_break_duration_minutes = minutes,
            Field::LongBreakDuration => self.settings.long_break_duration_minutes = minutes,
            _ => self.settings.focus_duration_minutes = minutes,
        }
    }

    fn flag(&self, field: Field) -> bool {
        match field {
            Field::Sound => self.settings.sound_enabled,
            _ => self.settings.vibration_enabled,
        }
    }
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn create_panel() -> SettingsPanel {
        SettingsPanel::new(TimerSettings::default())
    }

    mod navigation_tests {
        use super::*;

        #[test]
        fn test_selection_wraps() {
            let mut panel = create_panel();
            assert_eq!(panel.selected(), Field::FocusDuration);
            assert_eq!(panel.handle_key(&press(KeyCode::Up)), PanelResponse::Handled);
            assert_eq!(panel.selected(), Field::Vibration);
            panel.handle_key(&press(KeyCode::Down));
            assert_eq!(panel.selected(), Field::FocusDuration);
        }

        #[test]
        fn test_non_panel_keys_ignored() {
            let mut panel = create_panel();
            assert_eq!(panel.handle_key(&press(KeyCode::Char('r'))), PanelResponse::Ignored);
            assert_eq!(panel.handle_key(&press(KeyCode::Esc)), PanelResponse::Ignored);
        }
    }

    mod adjust_tests {
        use super::*;

        #[test]
        fn test_adjust_duration() {
            let mut panel = create_panel();
            let response = panel.handle_key(&press(KeyCode::Right));
            let PanelResponse::Changed(settings) = response else {
                panic!("expected a change, got {:?}", response);
            };
            assert_eq!(settings.focus_duration_minutes, 26);
        }

        #[test]
        fn test_adjust_clamps_at_one() {
            let mut panel = SettingsPanel::new(TimerSettings::default().with_focus_minutes(1));
            assert_eq!(panel.handle_key(&press(KeyCode::Left)), PanelResponse::Handled);
            assert_eq!(panel.settings().focus_duration_minutes, 1);
        }

        #[test]
        fn test_adjust_toggle() {
            let mut panel = create_panel();
            panel.handle_key(&press(KeyCode::Down));
            panel.handle_key(&press(KeyCode::Down));
            panel.handle_key(&press(KeyCode::Down));
            assert_eq!(panel.selected(), Field::Sound);

            let response = panel.handle_key(&press(KeyCode::Left));
            assert!(matches!(response, PanelResponse::Changed(s) if !s.sound_enabled));
        }
    }

    mod input_tests {
        use super::*;

        fn type_text(panel: &mut SettingsPanel, text: &str) {
            for c in text.chars() {
                panel.handle_key(&press(KeyCode::Char(c)));
            }
        }

        #[test]
        fn test_edit_and_commit() {
            let mut panel = create_panel();
            panel.handle_key(&press(KeyCode::Char('e')));
            assert!(panel.is_editing());
            assert_eq!(panel.input(), Some("25"));

            panel.handle_key(&press(KeyCode::Backspace));
            panel.handle_key(&press(KeyCode::Backspace));
            type_text(&mut panel, "40");

            let response = panel.handle_key(&press(KeyCode::Enter));
            assert!(
                matches!(response, PanelResponse::Changed(s) if s.focus_duration_minutes == 40)
            );
            assert!(!panel.is_editing());
        }

        #[test]
        fn test_tab_commits() {
            let mut panel = create_panel();
            panel.handle_key(&press(KeyCode::Down));
            panel.handle_key(&press(KeyCode::Char('e')));
            type_text(&mut panel, "0");
            let response = panel.handle_key(&press(KeyCode::Tab));
            let changed = match response {
                PanelResponse::Changed(s) => s.short_break_duration_minutes,
                _ => 0,
            };
            assert_eq!(changed, 50);
        }

        #[test]
        fn test_empty_or_zero_input_uses_default() {
            let mut panel =
                SettingsPanel::new(TimerSettings::default().with_long_break_minutes(30));
            panel.handle_key(&press(KeyCode::Up));
            panel.handle_key(&press(KeyCode::Up));
            panel.handle_key(&press(KeyCode::Up));
            assert_eq!(panel.selected(), Field::LongBreakDuration);

            panel.handle_key(&press(KeyCode::Char('e')));
            panel.handle_key(&press(KeyCode::Backspace));
            panel.handle_key(&press(KeyCode::Backspace));
            type_text(&mut panel, "0");
            panel.handle_key(&press(KeyCode::Enter));

            assert_eq!(panel.settings().long_break_duration_minutes, DEFAULT_LONG_BREAK_MINUTES);
        }

        #[test]
        fn test_input_is_capped() {
            let mut panel = create_panel();
            panel.handle_key(&press(KeyCode::Char('e')));
            type_text(&mut panel, "9999");
            assert_eq!(panel.input(), Some("259"));
            panel.handle_key(&press(KeyCode::Enter));
            assert_eq!(panel.settings().focus_duration_minutes, MAX_DURATION_MINUTES);
        }

        #[test]
        fn test_escape_and_letters_swallowed_while_editing() {
            let mut panel = create_panel();
            panel.handle_key(&press(KeyCode::Char('e')));
            assert_eq!(panel.handle_key(&press(KeyCode::Esc)), PanelResponse::Handled);
            assert_eq!(panel.handle_key(&press(KeyCode::Char('q'))), PanelResponse::Handled);
            assert!(panel.is_editing());
            assert_eq!(panel.input(), Some("25"));
        }

        #[test]
        fn test_edit_not_available_on_toggles() {
            let mut panel = create_panel();
            panel.handle_key(&press(KeyCode::Up));
            assert_eq!(panel.handle_key(&press(KeyCode::Char('e'))), PanelResponse::Ignored);
            assert!(!panel.is_editing());
        }

        #[test]
        fn test_rows_show_cursor_while_editing() {
            let mut panel = create_panel();
            panel.handle_key(&press(KeyCode::Char('e')));
            let rows = panel.rows();
            assert_eq!(rows[0].1, "25_ min");
            assert!(rows[0].2);
            assert_eq!(rows[3].1, "on");
        }
    }
}
