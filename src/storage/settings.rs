//! Reading and writing user preferences through a key-value store.

use serde_json::Value;
use tracing::warn;

use crate::types::{Layout, NotificationPermission, TimerSettings};

use super::error::StoreError;
use super::KeyValueStore;

/// Key of the JSON settings record.
pub const SETTINGS_KEY: &str = "pomodoroSettings";

/// Key of the layout preference.
pub const LAYOUT_KEY: &str = "layout";

/// Key of the notification permission answer.
pub const PERMISSION_KEY: &str = "notificationPermission";

/// Typed access to the preferences kept in a [`KeyValueStore`].
#[derive(Debug)]
pub struct SettingsStore<K: KeyValueStore> {
    store: K,
}

impl<K: KeyValueStore> SettingsStore<K> {
    pub fn new(store: K) -> Self {
        Self { store }
    }

    /// Loads the timer settings, never failing.
    ///
    /// Stored fields are merged over the defaults; anything missing or
    /// malformed keeps its default.
    pub fn load_settings(&self) -> TimerSettings {
        match self.store.get(SETTINGS_KEY) {
            Some(raw) => parse_settings(&raw),
            None => TimerSettings::default(),
        }
    }

    /// Saves the timer settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn save_settings(&mut self, settings: &TimerSettings) -> Result<(), StoreError> {
        let json = serde_json::to_string(settings)?;
        self.store.set(SETTINGS_KEY, &json)
    }

    /// Loads the layout preference; anything but "landscape" is portrait.
    pub fn load_layout(&self) -> Layout {
        match self.store.get(LAYOUT_KEY).as_deref() {
            Some("landscape") => Layout::Landscape,
            _ => Layout::Portrait,
        }
    }

    /// Saves the layout preference.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn save_layout(&mut self, layout: Layout) -> Result<(), StoreError> {
        self.store.set(LAYOUT_KEY, layout.as_str())
    }

    /// Loads the notification permission; unknown values are undecided.
    pub fn load_permission(&self) -> NotificationPermission {
        self.store
            .get(PERMISSION_KEY)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }

    /// Saves the notification permission.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn save_permission(
        &mut self,
        permission: NotificationPermission,
    ) -> Result<(), StoreError> {
        self.store.set(PERMISSION_KEY, permission.as_str())
    }

    /// Removes every stored preference.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        for key in [SETTINGS_KEY, LAYOUT_KEY, PERMISSION_KEY] {
            self.store.remove(key)?;
        }
        Ok(())
    }

    /// Returns the underlying store.
    pub fn inner(&self) -> &K {
        &self.store
    }
}

/// Parses a stored settings record, merging it over the defaults.
pub fn parse_settings(raw: &str) -> TimerSettings {
    let defaults = TimerSettings::default();
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            warn!("Failed to load settings: {}", e);
            return defaults;
        }
    };
    let Some(record) = value.as_object() else {
        warn!("Failed to load settings: record is not an object");
        return defaults;
    };

    let minutes = |key: &str, default: u32| -> u32 {
        record
            .get(key)
            .and_then(positive_minutes)
            .unwrap_or(default)
    };
    let flag = |key: &str, default: bool| -> bool {
        record.get(key).and_then(Value::as_bool).unwrap_or(default)
    };

    TimerSettings {
        focus_duration_minutes: minutes("focusDuration", defaults.focus_duration_minutes),
        short_break_duration_minutes: minutes(
            "shortBreakDuration",
            defaults.short_break_duration_minutes,
        ),
        long_break_duration_minutes: minutes(
            "longBreakDuration",
            defaults.long_break_duration_minutes,
        ),
        sound_enabled: flag("soundEnabled", defaults.sound_enabled),
        vibration_enabled: flag("vibrationEnabled", defaults.vibration_enabled),
    }
    .sanitized()
}

/// Accepts a positive whole number, given either as a JSON number or a
/// numeric string.
fn positive_minutes(value: &Value) -> Option<u32> {
    let minutes = match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64))?,
        Value::String(s) => s.trim().parse::<i64>().ok()?,
        _ => return None,
    };
    if minutes <= 0 {
        return None;
    }
    // Out-of-range values saturate so they clamp like any oversized value.
    Some(u32::try_from(minutes).unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn create_store() -> SettingsStore<MemoryStore> {
        SettingsStore::new(MemoryStore::new())
    }

    mod settings_tests {
        use super::*;

        #[test]
        fn test_missing_uses_defaults() {
            let store = create_store();
            assert_eq!(store.load_settings(), TimerSettings::default());
        }

        #[test]
        fn test_round_trip() {
            let mut store = create_store();
            let settings = TimerSettings {
                focus_duration_minutes: 50,
                short_break_duration_minutes: 10,
                long_break_duration_minutes: 30,
                sound_enabled: false,
                vibration_enabled: true,
            };
            store.save_settings(&settings).unwrap();
            assert_eq!(store.load_settings(), settings);
        }

        #[test]
        fn test_stored_json_uses_record_keys() {
            let mut store = create_store();
            store.save_settings(&TimerSettings::default()).unwrap();
            let raw = store.inner().get(SETTINGS_KEY).unwrap();
            assert!(raw.contains("\"focusDuration\":25"));
            assert!(raw.contains("\"vibrationEnabled\":true"));
        }

        #[test]
        fn test_malformed_json_uses_defaults() {
            assert_eq!(parse_settings("{oops"), TimerSettings::default());
            assert_eq!(parse_settings("[1, 2]"), TimerSettings::default());
        }

        #[test]
        fn test_partial_record_merges_over_defaults() {
            let settings = parse_settings(r#"{"focusDuration": 40, "soundEnabled": false}"#);
            assert_eq!(settings.focus_duration_minutes, 40);
            assert_eq!(settings.short_break_duration_minutes, 5);
            assert_eq!(settings.long_break_duration_minutes, 15);
            assert!(!settings.sound_enabled);
            assert!(settings.vibration_enabled);
        }

        #[test]
        fn test_bad_fields_fall_back_individually() {
            let settings = parse_settings(
                r#"{"focusDuration": 0, "shortBreakDuration": -3,
                    "longBreakDuration": "abc", "vibrationEnabled": "yes"}"#,
            );
            assert_eq!(settings.focus_duration_minutes, 25);
            assert_eq!(settings.short_break_duration_minutes, 5);
            assert_eq!(settings.long_break_duration_minutes, 15);
            assert!(settings.vibration_enabled);
        }

        #[test]
        fn test_numeric_strings_accepted() {
            let settings = parse_settings(r#"{"focusDuration": "30", "shortBreakDuration": 7.9}"#);
            assert_eq!(settings.focus_duration_minutes, 30);
            assert_eq!(settings.short_break_duration_minutes, 7);
        }

        #[test]
        fn test_oversized_duration_clamped() {
            let settings = parse_settings(r#"{"focusDuration": 100000}"#);
            assert_eq!(
                settings.focus_duration_minutes,
                crate::types::MAX_DURATION_MINUTES
            );
        }

        #[test]
        fn test_huge_values_clamped_like_integers() {
            let max = crate::types::MAX_DURATION_MINUTES;
            let float = parse_settings(r#"{"focusDuration": 1e30}"#);
            assert_eq!(float.focus_duration_minutes, max);

            let integer = parse_settings(r#"{"shortBreakDuration": 10000000000}"#);
            assert_eq!(integer.short_break_duration_minutes, max);

            let text = parse_settings(r#"{"longBreakDuration": "99999999999"}"#);
            assert_eq!(text.long_break_duration_minutes, max);
        }

        #[test]
        fn test_negative_values_use_defaults() {
            let settings = parse_settings(r#"{"focusDuration": -1e30, "shortBreakDuration": -3}"#);
            assert_eq!(settings.focus_duration_minutes, 25);
            assert_eq!(settings.short_break_duration_minutes, 5);
        }
    }

    mod preference_tests {
        use super::*;

        #[test]
        fn test_layout_default_and_round_trip() {
            let mut store = create_store();
            assert_eq!(store.load_layout(), Layout::Portrait);
            store.save_layout(Layout::Landscape).unwrap();
            assert_eq!(store.load_layout(), Layout::Landscape);
            assert_eq!(store.inner().get(LAYOUT_KEY), Some("landscape".to_string()));
        }

        #[test]
        fn test_unknown_layout_is_portrait() {
            let mut inner = MemoryStore::new();
            inner.set(LAYOUT_KEY, "diagonal").unwrap();
            assert_eq!(SettingsStore::new(inner).load_layout(), Layout::Portrait);
        }

        #[test]
        fn test_permission_round_trip() {
            let mut store = create_store();
            assert_eq!(store.load_permission(), NotificationPermission::Default);
            store.save_permission(NotificationPermission::Denied).unwrap();
            assert_eq!(store.load_permission(), NotificationPermission::Denied);
        }

        #[test]
        fn test_clear() {
            let mut store = create_store();
            store.save_settings(&TimerSettings::default().with_focus_minutes(45)).unwrap();
            store.save_layout(Layout::Landscape).unwrap();
            store.save_permission(NotificationPermission::Granted).unwrap();

            store.clear().unwrap();

            assert_eq!(store.load_settings(), TimerSettings::default());
            assert_eq!(store.load_layout(), Layout::Portrait);
            assert_eq!(store.load_permission(), NotificationPermission::Default);
        }
    }
}
