//! Pomodoro Timer Library
//!
//! This library provides the core functionality for the terminal Pomodoro
//! timer. It includes:
//! - Session state machine with focus/break cycling
//! - Tokio countdown driver and the interactive terminal runtime
//! - Completion effects: tone, bell vibration and desktop notification
//! - Screen wake lock through a platform inhibitor process
//! - Persistent preferences in a JSON key-value store
//! - Versioned offline resource cache
//! - CLI command parsing and display utilities

pub mod cli;
pub mod notification;
pub mod notifier;
pub mod offline;
pub mod runtime;
pub mod session;
pub mod sound;
pub mod storage;
pub mod types;
pub mod ui;
pub mod wakelock;

// Re-export commonly used types for convenience
pub use types::{
    Layout, NotificationPermission, SessionState, SessionType, SwitchTarget, TimerSettings,
};

pub use session::{
    duration_for, Completion, ManualScheduler, Scheduler, SessionMachine, TickOutcome,
    AUTO_START_DELAY,
};

pub use notifier::{CompletionNotifier, EffectOutcome, NotifyReport};

pub use storage::{JsonFileStore, KeyValueStore, MemoryStore, SettingsStore, StoreError};

pub use runtime::{DriverEvent, TokioScheduler};
