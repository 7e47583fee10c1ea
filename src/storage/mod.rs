//! Persistent key-value storage for user preferences.
//!
//! Only three things survive a restart: the timer settings, the layout
//! preference and the answer to the notification prompt. They live as
//! string values in a [`KeyValueStore`]; [`SettingsStore`] gives them types.

pub mod error;
pub mod file;
pub mod settings;

use std::collections::BTreeMap;
use std::path::PathBuf;

pub use error::StoreError;
pub use file::{JsonFileStore, STORE_FILE_NAME};
pub use settings::{parse_settings, SettingsStore, LAYOUT_KEY, PERMISSION_KEY, SETTINGS_KEY};

/// Directory name used under the platform data directory.
const APP_DIR_NAME: &str = "pomodoro-term";

/// String key to string value store.
pub trait KeyValueStore {
    /// Returns the value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removes `key`. Removing a missing key succeeds.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store, used in tests and when the data directory is unusable.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Returns the default data directory.
///
/// Uses the platform data directory, falling back to `~/.pomodoro-term`.
///
/// # Errors
///
/// Returns `NoDataDir` if neither directory can be determined.
pub fn default_data_dir() -> Result<PathBuf, StoreError> {
    if let Some(dir) = dirs::data_dir() {
        return Ok(dir.join(APP_DIR_NAME));
    }
    dirs::home_dir()
        .map(|home| home.join(format!(".{}", APP_DIR_NAME)))
        .ok_or(StoreError::NoDataDir)
}
