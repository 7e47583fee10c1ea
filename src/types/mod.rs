//! Core data types for the Pomodoro Timer.
//!
//! This module defines the data structures used for:
//! - Session type and manual switch targets
//! - User settings with defaults and validation
//! - The in-memory session state
//! - Persisted UI preferences (layout, notification permission)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default focus duration in minutes.
pub const DEFAULT_FOCUS_MINUTES: u32 = 25;

/// Default short break duration in minutes.
pub const DEFAULT_SHORT_BREAK_MINUTES: u32 = 5;

/// Default long break duration in minutes.
pub const DEFAULT_LONG_BREAK_MINUTES: u32 = 15;

/// Upper bound for any duration entered by the user.
pub const MAX_DURATION_MINUTES: u32 = 180;

/// Focus sessions per cycle before a long break.
pub const SESSIONS_PER_CYCLE: u32 = 4;

// ============================================================================
// SessionType
// ============================================================================

/// The kind of interval currently loaded on the timer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionType {
    /// Work interval
    #[default]
    Focus,
    /// Rest between focus sessions
    ShortBreak,
    /// Rest after a full cycle of focus sessions
    LongBreak,
}

impl SessionType {
    /// Returns the string representation of the session type.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionType::Focus => "focus",
            SessionType::ShortBreak => "shortBreak",
            SessionType::LongBreak => "longBreak",
        }
    }

    /// Returns true for either break type.
    pub fn is_break(&self) -> bool {
        !matches!(self, SessionType::Focus)
    }

    /// Message shown under the countdown while this session is loaded.
    pub fn message(&self) -> &'static str {
        match self {
            SessionType::Focus => "Time to focus!",
            SessionType::ShortBreak => "Take a short break!",
            SessionType::LongBreak => "Take a long break!",
        }
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SwitchTarget
// ============================================================================

/// Target of a manual session switch.
///
/// `Rest` is resolved to a short or long break by the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchTarget {
    Focus,
    Rest,
}

// ============================================================================
// TimerSettings
// ============================================================================

/// User-configurable durations and completion toggles.
///
/// The serialized field names match the stored settings record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSettings {
    /// Focus duration in minutes (> 0)
    #[serde(rename = "focusDuration")]
    pub focus_duration_minutes: u32,
    /// Short break duration in minutes (> 0)
    #[serde(rename = "shortBreakDuration")]
    pub short_break_duration_minutes: u32,
    /// Long break duration in minutes (> 0)
    #[serde(rename = "longBreakDuration")]
    pub long_break_duration_minutes: u32,
    /// Play a tone when a session completes
    #[serde(rename = "soundEnabled")]
    pub sound_enabled: bool,
    /// Vibrate when a session completes
    #[serde(rename = "vibrationEnabled")]
    pub vibration_enabled: bool,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            focus_duration_minutes: DEFAULT_FOCUS_MINUTES,
            short_break_duration_minutes: DEFAULT_SHORT_BREAK_MINUTES,
            long_break_duration_minutes: DEFAULT_LONG_BREAK_MINUTES,
            sound_enabled: true,
            vibration_enabled: true,
        }
    }
}

impl TimerSettings {
    /// Sets the focus duration.
    pub fn with_focus_minutes(mut self, minutes: u32) -> Self {
        self.focus_duration_minutes = minutes;
        self
    }

    /// Sets the short break duration.
    pub fn with_short_break_minutes(mut self, minutes: u32) -> Self {
        self.short_break_duration_minutes = minutes;
        self
    }

    /// Sets the long break duration.
    pub fn with_long_break_minutes(mut self, minutes: u32) -> Self {
        self.long_break_duration_minutes = minutes;
        self
    }

    /// Returns the configured duration, in minutes, for a session type.
    pub fn minutes_for(&self, session_type: SessionType) -> u32 {
        match session_type {
            SessionType::Focus => self.focus_duration_minutes,
            SessionType::ShortBreak => self.short_break_duration_minutes,
            SessionType::LongBreak => self.long_break_duration_minutes,
        }
    }

    /// Validates the settings.
    ///
    /// Returns an error message if validation fails.
    pub fn validate(&self) -> Result<(), String> {
        let fields = [
            ("focus duration", self.focus_duration_minutes),
            ("short break duration", self.short_break_duration_minutes),
            ("long break duration", self.long_break_duration_minutes),
        ];
        for (name, minutes) in fields {
            if minutes < 1 || minutes > MAX_DURATION_MINUTES {
                return Err(format!(
                    "{} must be between 1 and {} minutes",
                    name, MAX_DURATION_MINUTES
                ));
            }
        }
        Ok(())
    }

    /// Replaces every non-positive duration with its default and clamps
    /// the rest to [`MAX_DURATION_MINUTES`].
    pub fn sanitized(mut self) -> Self {
        self.focus_duration_minutes =
            sanitize_minutes(self.focus_duration_minutes, DEFAULT_FOCUS_MINUTES);
        self.short_break_duration_minutes =
            sanitize_minutes(self.short_break_duration_minutes, DEFAULT_SHORT_BREAK_MINUTES);
        self.long_break_duration_minutes =
            sanitize_minutes(self.long_break_duration_minutes, DEFAULT_LONG_BREAK_MINUTES);
        self
    }
}

fn sanitize_minutes(minutes: u32, default: u32) -> u32 {
    if minutes == 0 {
        default
    } else {
        minutes.min(MAX_DURATION_MINUTES)
    }
}

// ============================================================================
// SessionState
// ============================================================================

/// Mutable state of the timer. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Currently loaded session
    pub session_type: SessionType,
    /// Seconds left in the current session
    pub remaining_seconds: u32,
    /// Full length of the current session
    pub total_seconds: u32,
    /// Focus sessions completed since the last long break (0..=4)
    pub completed_focus_count: u32,
    /// Display-only index of the focus session within the cycle (>= 1)
    pub current_cycle_index: u32,
    /// Countdown is armed
    pub is_running: bool,
    /// Countdown was stopped by a pause (not the initial idle state)
    pub is_paused: bool,
}

impl SessionState {
    /// Creates an idle focus session with the given length.
    pub fn idle_focus(total_seconds: u32) -> Self {
        Self {
            session_type: SessionType::Focus,
            remaining_seconds: total_seconds,
            total_seconds,
            completed_focus_count: 0,
            current_cycle_index: 1,
            is_running: false,
            is_paused: false,
        }
    }

    /// Loads a session of the given type and length, keeping counters.
    pub fn load(&mut self, session_type: SessionType, seconds: u32) {
        self.session_type = session_type;
        self.remaining_seconds = seconds;
        self.total_seconds = seconds;
    }

    /// Fraction of the session that has elapsed, in [0, 1].
    pub fn progress(&self) -> f64 {
        if self.total_seconds == 0 {
            return 0.0;
        }
        let elapsed = self.total_seconds.saturating_sub(self.remaining_seconds);
        f64::from(elapsed) / f64::from(self.total_seconds)
    }
}

// ============================================================================
// Layout
// ============================================================================

/// Screen arrangement preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    #[default]
    Portrait,
    Landscape,
}

impl Layout {
    /// Stored string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Portrait => "portrait",
            Layout::Landscape => "landscape",
        }
    }

    /// Returns the other layout.
    pub fn toggled(self) -> Self {
        match self {
            Layout::Portrait => Layout::Landscape,
            Layout::Landscape => Layout::Portrait,
        }
    }
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "portrait" => Ok(Layout::Portrait),
            "landscape" => Ok(Layout::Landscape),
            other => Err(format!("unknown layout: {}", other)),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// NotificationPermission
// ============================================================================

/// Whether desktop notifications may be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationPermission {
    /// Not yet decided; the user may still be asked
    #[default]
    Default,
    Granted,
    Denied,
}

impl NotificationPermission {
    /// Stored string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationPermission::Default => "default",
            NotificationPermission::Granted => "granted",
            NotificationPermission::Denied => "denied",
        }
    }

    /// Returns true if the user has not answered yet.
    pub fn is_undecided(&self) -> bool {
        matches!(self, NotificationPermission::Default)
    }
}

impl FromStr for NotificationPermission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(NotificationPermission::Default),
            "granted" => Ok(NotificationPermission::Granted),
            "denied" => Ok(NotificationPermission::Denied),
            other => Err(format!("unknown notification permission: {}", other)),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod session_type_tests {
        use super::*;

        #[test]
        fn test_default_is_focus() {
            assert_eq!(SessionType::default(), SessionType::Focus);
        }

        #[test]
        fn test_as_str() {
            assert_eq!(SessionType::Focus.as_str(), "focus");
            assert_eq!(SessionType::ShortBreak.as_str(), "shortBreak");
            assert_eq!(SessionType::LongBreak.as_str(), "longBreak");
        }

        #[test]
        fn test_serialize_matches_as_str() {
            for session_type in [
                SessionType::Focus,
                SessionType::ShortBreak,
                SessionType::LongBreak,
            ] {
                let json = serde_json::to_string(&session_type).unwrap();
                assert_eq!(json, format!("\"{}\"", session_type.as_str()));
            }
        }

        #[test]
        fn test_is_break() {
            assert!(!SessionType::Focus.is_break());
            assert!(SessionType::ShortBreak.is_break());
            assert!(SessionType::LongBreak.is_break());
        }

        #[test]
        fn test_messages() {
            assert_eq!(SessionType::Focus.message(), "Time to focus!");
            assert_eq!(SessionType::ShortBreak.message(), "Take a short break!");
            assert_eq!(SessionType::LongBreak.message(), "Take a long break!");
        }
    }

    mod timer_settings_tests {
        use super::*;

        #[test]
        fn test_default_values() {
            let settings = TimerSettings::default();
            assert_eq!(settings.focus_duration_minutes, 25);
            assert_eq!(settings.short_break_duration_minutes, 5);
            assert_eq!(settings.long_break_duration_minutes, 15);
            assert!(settings.sound_enabled);
            assert!(settings.vibration_enabled);
        }

        #[test]
        fn test_json_field_names() {
            let json = serde_json::to_value(TimerSettings::default()).unwrap();
            assert_eq!(json["focusDuration"], 25);
            assert_eq!(json["shortBreakDuration"], 5);
            assert_eq!(json["longBreakDuration"], 15);
            assert_eq!(json["soundEnabled"], true);
            assert_eq!(json["vibrationEnabled"], true);
        }

        #[test]
        fn test_builders() {
            let settings = TimerSettings::default()
                .with_focus_minutes(50)
                .with_short_break_minutes(10)
                .with_long_break_minutes(30);
            assert_eq!(settings.minutes_for(SessionType::Focus), 50);
            assert_eq!(settings.minutes_for(SessionType::ShortBreak), 10);
            assert_eq!(settings.minutes_for(SessionType::LongBreak), 30);
        }

        #[test]
        fn test_validate_ok() {
            assert!(TimerSettings::default().validate().is_ok());
        }

        #[test]
        fn test_validate_zero_duration() {
            let settings = TimerSettings::default().with_short_break_minutes(0);
            let err = settings.validate().unwrap_err();
            assert!(err.contains("short break"));
        }

        #[test]
        fn test_validate_too_long() {
            let settings = TimerSettings::default().with_focus_minutes(MAX_DURATION_MINUTES + 1);
            assert!(settings.validate().is_err());
        }

        #[test]
        fn test_sanitized_replaces_zero_and_clamps() {
            let settings = TimerSettings::default()
                .with_focus_minutes(0)
                .with_short_break_minutes(500)
                .with_long_break_minutes(20)
                .sanitized();
            assert_eq!(settings.focus_duration_minutes, DEFAULT_FOCUS_MINUTES);
            assert_eq!(settings.short_break_duration_minutes, MAX_DURATION_MINUTES);
            assert_eq!(settings.long_break_duration_minutes, 20);
        }
    }

    mod session_state_tests {
        use super::*;

        #[test]
        fn test_idle_focus() {
            let state = SessionState::idle_focus(1500);
            assert_eq!(state.session_type, SessionType::Focus);
            assert_eq!(state.remaining_seconds, 1500);
            assert_eq!(state.total_seconds, 1500);
            assert_eq!(state.completed_focus_count, 0);
            assert_eq!(state.current_cycle_index, 1);
            assert!(!state.is_running);
            assert!(!state.is_paused);
        }

        #[test]
        fn test_load_keeps_counters() {
            let mut state = SessionState::idle_focus(1500);
            state.completed_focus_count = 2;
            state.load(SessionType::ShortBreak, 300);
            assert_eq!(state.session_type, SessionType::ShortBreak);
            assert_eq!(state.remaining_seconds, 300);
            assert_eq!(state.total_seconds, 300);
            assert_eq!(state.completed_focus_count, 2);
        }

        #[test]
        fn test_progress() {
            let mut state = SessionState::idle_focus(100);
            assert_eq!(state.progress(), 0.0);
            state.remaining_seconds = 25;
            assert!((state.progress() - 0.75).abs() < f64::EPSILON);
            state.remaining_seconds = 0;
            assert_eq!(state.progress(), 1.0);
        }
    }

    mod preference_tests {
        use super::*;

        #[test]
        fn test_layout_parse_and_toggle() {
            assert_eq!("portrait".parse::<Layout>().unwrap(), Layout::Portrait);
            assert_eq!("landscape".parse::<Layout>().unwrap(), Layout::Landscape);
            assert!("sideways".parse::<Layout>().is_err());
            assert_eq!(Layout::Portrait.toggled(), Layout::Landscape);
            assert_eq!(Layout::Landscape.toggled(), Layout::Portrait);
        }

        #[test]
        fn test_permission_parse() {
            for permission in [
                NotificationPermission::Default,
                NotificationPermission::Granted,
                NotificationPermission::Denied,
            ] {
                assert_eq!(
                    permission.as_str().parse::<NotificationPermission>().unwrap(),
                    permission
                );
            }
            assert!(NotificationPermission::Default.is_undecided());
            assert!(!NotificationPermission::Denied.is_undecided());
        }
    }
}
