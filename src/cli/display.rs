//! Display utilities for the Pomodoro Timer CLI.
//!
//! This module provides formatted output for:
//! - Stored settings
//! - Layout preference
//! - Success and error messages

use std::path::Path;

use crate::types::{Layout, TimerSettings};

// ============================================================================
// Display
// ============================================================================

/// Display utilities for CLI output.
pub struct Display;

impl Display {
    /// Shows the stored settings.
    pub fn show_settings(settings: &TimerSettings, store_path: &Path) {
        println!("Pomodoro Timer settings");
        println!("─────────────────────────────");
        for line in Self::settings_lines(settings) {
            println!("{}", line);
        }
        println!();
        println!("Stored in {}", store_path.display());
    }

    /// Shows a success message after settings were changed.
    pub fn show_settings_saved(settings: &TimerSettings) {
        println!("* Settings saved");
        for line in Self::settings_lines(settings) {
            println!("  {}", line);
        }
    }

    /// Shows a success message after preferences were cleared.
    pub fn show_settings_reset() {
        println!("* Preferences reset to defaults");
    }

    /// Shows the layout preference.
    pub fn show_layout(layout: Layout) {
        println!("Layout: {}", layout);
    }

    /// Shows a success message after the layout was changed.
    pub fn show_layout_saved(layout: Layout) {
        println!("* Layout set to {}", layout);
    }

    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("Error: {}", message);
    }

    /// One line per setting.
    fn settings_lines(settings: &TimerSettings) -> Vec<String> {
        vec![
            format!("Focus:       {} min", settings.focus_duration_minutes),
            format!("Short break: {} min", settings.short_break_duration_minutes),
            format!("Long break:  {} min", settings.long_break_duration_minutes),
            format!("Sound:       {}", Self::on_off(settings.sound_enabled)),
            format!("Vibration:   {}", Self::on_off(settings.vibration_enabled)),
        ]
    }

    fn on_off(value: bool) -> &'static str {
        if value {
            "on"
        } else {
            "off"
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
