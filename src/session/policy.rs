//! Duration policy: how long each session type lasts.

use crate::types::{
    SessionType, TimerSettings, DEFAULT_FOCUS_MINUTES, DEFAULT_LONG_BREAK_MINUTES,
    DEFAULT_SHORT_BREAK_MINUTES,
};

/// Returns the length of a session, in seconds, under the given settings.
///
/// A zero-minute setting never yields a zero-length session; the type's
/// default is used instead.
pub fn duration_for(session_type: SessionType, settings: &TimerSettings) -> u32 {
    let minutes = match settings.minutes_for(session_type) {
        0 => default_minutes(session_type),
        minutes => minutes,
    };
    minutes * 60
}

fn default_minutes(session_type: SessionType) -> u32 {
    match session_type {
        SessionType::Focus => DEFAULT_FOCUS_MINUTES,
        SessionType::ShortBreak => DEFAULT_SHORT_BREAK_MINUTES,
        SessionType::LongBreak => DEFAULT_LONG_BREAK_MINUTES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = TimerSettings::default();
        assert_eq!(duration_for(SessionType::Focus, &settings), 25 * 60);
        assert_eq!(duration_for(SessionType::ShortBreak, &settings), 5 * 60);
        assert_eq!(duration_for(SessionType::LongBreak, &settings), 15 * 60);
    }

    #[test]
    fn test_field_times_sixty() {
        for (focus, short, long) in [(1, 1, 1), (50, 10, 30), (180, 60, 90)] {
            let settings = TimerSettings::default()
                .with_focus_minutes(focus)
                .with_short_break_minutes(short)
                .with_long_break_minutes(long);
            assert_eq!(duration_for(SessionType::Focus, &settings), focus * 60);
            assert_eq!(duration_for(SessionType::ShortBreak, &settings), short * 60);
            assert_eq!(duration_for(SessionType::LongBreak, &settings), long * 60);
        }
    }

    #[test]
    fn test_zero_minutes_uses_type_default() {
        let settings = TimerSettings {
            focus_duration_minutes: 0,
            short_break_duration_minutes: 0,
            long_break_duration_minutes: 0,
            ..TimerSettings::default()
        };
        assert_eq!(duration_for(SessionType::Focus, &settings), 25 * 60);
        assert_eq!(duration_for(SessionType::ShortBreak, &settings), 5 * 60);
        assert_eq!(duration_for(SessionType::LongBreak, &settings), 15 * 60);
    }
}
