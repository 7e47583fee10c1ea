//! Session state machine for the Pomodoro Timer.
//!
//! This module provides the core timer behavior:
//! - Start / pause / reset of the current session
//! - Once-per-second countdown with zero-crossing detection
//! - Focus → break → focus transitions with a long break every 4 sessions
//! - Deferred auto-start of the next session after a completion
//! - Manual switching between focus and rest while idle
//!
//! The machine owns its state and collaborators. Time only advances when
//! the injected [`Scheduler`] delivers a tick, so every transition can be
//! exercised without a clock.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::notifier::{CompletionNotifier, NotifyReport};
use crate::types::{SessionState, SessionType, SwitchTarget, TimerSettings, SESSIONS_PER_CYCLE};
use crate::wakelock::WakeLock;

use super::policy::duration_for;
use super::scheduler::Scheduler;

/// Delay between a completion and the automatic start of the next session.
pub const AUTO_START_DELAY: Duration = Duration::from_secs(2);

// ============================================================================
// Outcomes
// ============================================================================

/// Result of a completed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    /// Session that just reached zero
    pub finished: SessionType,
    /// Session now loaded
    pub next: SessionType,
    /// Whether a deferred start was scheduled
    pub auto_continue: bool,
    /// Which completion effects fired
    pub report: NotifyReport,
}

/// Result of one countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The timer was not running; nothing changed
    Idle,
    /// One second elapsed
    Counting {
        /// Seconds left after this tick
        remaining_seconds: u32,
    },
    /// The session reached zero and the machine advanced
    Completed(Completion),
}

// ============================================================================
// SessionMachine
// ============================================================================

/// Owns the session state and drives every transition.
pub struct SessionMachine<S: Scheduler> {
    state: SessionState,
    settings: TimerSettings,
    scheduler: S,
    wake_lock: Box<dyn WakeLock>,
    notifier: CompletionNotifier,
}

impl<S: Scheduler> SessionMachine<S> {
    /// Creates an idle focus session under `settings`.
    pub fn new(
        settings: TimerSettings,
        scheduler: S,
        wake_lock: Box<dyn WakeLock>,
        notifier: CompletionNotifier,
    ) -> Self {
        let focus_seconds = duration_for(SessionType::Focus, &settings);
        Self {
            state: SessionState::idle_focus(focus_seconds),
            settings,
            scheduler,
            wake_lock,
            notifier,
        }
    }

    /// Starts the countdown. No-op if already running.
    pub fn start(&mut self) {
        if self.state.is_running {
            return;
        }
        self.state.is_running = true;
        self.state.is_paused = false;
        self.scheduler.arm();

        if self.state.session_type == SessionType::Focus {
            self.acquire_wake_lock();
        }
        info!(
            "Started {} with {}s remaining",
            self.state.session_type, self.state.remaining_seconds
        );
    }

    /// Pauses the countdown. No-op if not running.
    pub fn pause(&mut self) {
        if !self.state.is_running {
            return;
        }
        self.state.is_running = false;
        self.state.is_paused = true;
        self.scheduler.disarm();
        self.release_wake_lock();
        info!(
            "Paused {} with {}s remaining",
            self.state.session_type, self.state.remaining_seconds
        );
    }

    /// Pauses if running, otherwise starts.
    pub fn toggle(&mut self) {
        if self.state.is_running {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Stops the countdown and reloads the full length of the current session.
    pub fn reset(&mut self) {
        self.pause();
        let seconds = duration_for(self.state.session_type, &self.settings);
        self.state.load(self.state.session_type, seconds);
        self.state.is_paused = false;
        info!("Reset {} to {}s", self.state.session_type, seconds);
    }

    /// Advances the countdown by one second.
    ///
    /// Reaching zero completes the session exactly once.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.state.is_running {
            return TickOutcome::Idle;
        }
        self.state.remaining_seconds = self.state.remaining_seconds.saturating_sub(1);

        if self.state.remaining_seconds == 0 {
            TickOutcome::Completed(self.complete_session())
        } else {
            TickOutcome::Counting {
                remaining_seconds: self.state.remaining_seconds,
            }
        }
    }

    /// Finishes the current session: pause, announce, advance, and schedule
    /// the next start unless the cycle is complete.
    pub fn complete_session(&mut self) -> Completion {
        let finished = self.state.session_type;
        self.pause();

        let report = self.notifier.notify(finished, &self.settings);
        let auto_continue = self.advance();

        if auto_continue {
            self.scheduler.schedule_start(AUTO_START_DELAY);
        }
        info!(
            "Completed {}, next {} (auto-continue: {})",
            finished, self.state.session_type, auto_continue
        );

        Completion {
            finished,
            next: self.state.session_type,
            auto_continue,
            report,
        }
    }

    /// Loads the session that follows the current one.
    ///
    /// Returns false only when a long break ends, which closes the cycle.
    pub fn advance(&mut self) -> bool {
        let (next, auto_continue) = match self.state.session_type {
            SessionType::Focus => {
                self.state.completed_focus_count += 1;
                if self.state.completed_focus_count >= SESSIONS_PER_CYCLE {
                    (SessionType::LongBreak, true)
                } else {
                    self.state.current_cycle_index += 1;
                    (SessionType::ShortBreak, true)
                }
            }
            SessionType::ShortBreak => (SessionType::Focus, true),
            SessionType::LongBreak => {
                self.state.completed_focus_count = 0;
                self.state.current_cycle_index = 1;
                (SessionType::Focus, false)
            }
        };

        let seconds = duration_for(next, &self.settings);
        self.state.load(next, seconds);
        auto_continue
    }

    /// Loads focus or rest by hand. Rejected while running.
    ///
    /// Rest means a long break once a full cycle of focus sessions is done,
    /// a short break otherwise. Counters are left untouched.
    pub fn switch_session_type(&mut self, target: SwitchTarget) -> bool {
        if self.state.is_running {
            debug!("Ignoring switch to {:?} while running", target);
            return false;
        }
        let session_type = match target {
            SwitchTarget::Focus => SessionType::Focus,
            SwitchTarget::Rest if self.state.completed_focus_count >= SESSIONS_PER_CYCLE => {
                SessionType::LongBreak
            }
            SwitchTarget::Rest => SessionType::ShortBreak,
        };
        let seconds = duration_for(session_type, &self.settings);
        self.state.load(session_type, seconds);
        true
    }

    /// Replaces the settings. An idle timer reloads the current session.
    pub fn apply_settings(&mut self, settings: TimerSettings) {
        self.settings = settings;
        if !self.state.is_running {
            let seconds = duration_for(self.state.session_type, &self.settings);
            self.state.load(self.state.session_type, seconds);
        }
    }

    /// A deferred start requested by a completion is due.
    ///
    /// The request is honoured even if the user paused in the meantime.
    pub fn on_auto_start_due(&mut self) {
        debug!("Auto-start due");
        self.start();
    }

    /// Refreshes the wake lock after the terminal regains focus.
    pub fn recover_after_hidden(&mut self) {
        if !self.state.is_running {
            return;
        }
        self.release_wake_lock();
        if self.state.session_type == SessionType::Focus {
            self.acquire_wake_lock();
        }
    }

    /// Disarms the countdown and drops the wake lock before exit.
    pub fn release_resources(&mut self) {
        self.scheduler.disarm();
        self.release_wake_lock();
    }

    /// Returns a reference to the current session state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Returns the active settings.
    pub fn settings(&self) -> &TimerSettings {
        &self.settings
    }

    /// Returns the scheduler.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Returns the scheduler mutably (the runtime awaits driver events on it).
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Returns the completion notifier mutably.
    pub fn notifier_mut(&mut self) -> &mut CompletionNotifier {
        &mut self.notifier
    }

    /// Returns true while the wake lock is held.
    pub fn wake_lock_held(&self) -> bool {
        self.wake_lock.is_held()
    }

    /// Returns a mutable reference to the session state (for testing).
    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut SessionState {
        &mut self.state
    }

    fn acquire_wake_lock(&mut self) {
        match self.wake_lock.acquire() {
            Ok(()) => {}
            Err(e) if e.is_unavailable() => debug!("Wake lock unavailable: {}", e),
            Err(e) => warn!("Wake lock failed: {} ({})", e, e.suggestion()),
        }
    }

    fn release_wake_lock(&mut self) {
        if let Err(e) = self.wake_lock.release() {
            warn!("Wake lock release failed: {}", e);
        }
    }
}

impl<S: Scheduler + std::fmt::Debug> std::fmt::Debug for SessionMachine<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionMachine")
            .field("state", &self.state)
            .field("settings", &self.settings)
            .field("scheduler", &self.scheduler)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
