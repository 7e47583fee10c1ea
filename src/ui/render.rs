//! Frame rendering.
//!
//! Turns the session state into lines of text. Nothing here touches the
//! terminal, so every frame can be checked in tests.

use crate::types::{Layout, SessionState, SessionType, SESSIONS_PER_CYCLE};

use super::panel::SettingsPanel;

/// Width of the progress bar in cells.
pub const PROGRESS_WIDTH: usize = 30;

const DOT_COMPLETED: char = '●';
const DOT_ACTIVE: char = '◉';
const DOT_PENDING: char = '○';

/// Everything needed to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    pub state: &'a SessionState,
    pub layout: Layout,
    pub panel: Option<&'a SettingsPanel>,
    pub prompt_visible: bool,
}

/// Formats seconds as `MM:SS`.
pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Terminal title for the current state.
pub fn title(state: &SessionState) -> String {
    if state.is_running {
        format!("{} - Pomodoro", format_time(state.remaining_seconds))
    } else if state.is_paused {
        "Pomodoro Timer (Paused)".to_string()
    } else {
        "Pomodoro Timer".to_string()
    }
}

/// One dot per focus session in the cycle.
///
/// Finished sessions are filled; the focus session in progress is marked.
pub fn session_dots(state: &SessionState) -> String {
    (0..SESSIONS_PER_CYCLE)
        .map(|index| {
            if index < state.completed_focus_count {
                DOT_COMPLETED
            } else if index + 1 == state.current_cycle_index
                && state.session_type == SessionType::Focus
            {
                DOT_ACTIVE
            } else {
                DOT_PENDING
            }
        })
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Horizontal bar filled in proportion to `progress` (clamped to [0, 1]).
pub fn progress_bar(progress: f64, width: usize) -> String {
    let filled = (progress.clamp(0.0, 1.0) * width as f64).round() as usize;
    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(width - filled));
    bar
}

/// Focus/rest indicator with the active side bracketed.
pub fn mode_indicator(session_type: SessionType) -> String {
    if session_type.is_break() {
        " Focus  [Rest]".to_string()
    } else {
        "[Focus]  Rest ".to_string()
    }
}

/// Key hints for the current state.
pub fn key_hints(state: &SessionState, panel_open: bool) -> String {
    if panel_open {
        return "[↑/↓] select  [←/→] adjust  [e] edit  [esc] close".to_string();
    }
    let run = if state.is_running { "pause" } else { "start" };
    format!(
        "[space] {}  [r] reset  [f] focus  [b] rest  [l] layout  [s] settings  [q] quit",
        run
    )
}

/// Renders a full frame.
pub fn render(view: &View<'_>) -> Vec<String> {
    let state = view.state;
    let time = format_time(state.remaining_seconds);
    let message = state.session_type.message();
    let dots = session_dots(state);
    let bar = progress_bar(state.progress(), PROGRESS_WIDTH);
    let mode = mode_indicator(state.session_type);

    let mut lines = match view.layout {
        Layout::Portrait => vec![
            mode,
            String::new(),
            time,
            message.to_string(),
            String::new(),
            dots,
            bar,
        ],
        Layout::Landscape => vec![format!(
            "{}  │  {}  │  {}  │  {}  │  {}",
            mode, time, message, dots, bar
        )],
    };

    lines.push(String::new());
    if let Some(panel) = view.panel {
        lines.extend(panel_lines(panel));
        lines.push(String::new());
    }
    if view.prompt_visible {
        lines.push("Allow desktop notifications? [y/n]".to_string());
        lines.push(String::new());
    }
    lines.push(key_hints(state, view.panel.is_some()));
    lines
}

fn panel_lines(panel: &SettingsPanel) -> Vec<String> {
    let mut lines = vec!["Settings".to_string()];
    for (field, value, selected) in panel.rows() {
        let marker = if selected { '>' } else { ' ' };
        lines.push(format!("{} {:<22}{}", marker, field.label(), value));
    }
    lines
}
