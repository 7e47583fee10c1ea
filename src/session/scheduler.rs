//! Scheduling seam between the state machine and the clock.
//!
//! The state machine never touches timers directly. It arms and disarms the
//! repeating countdown and requests a deferred start through [`Scheduler`];
//! the runtime supplies a tokio-backed implementation and tests use
//! [`ManualScheduler`] to drive time by hand.

use std::time::Duration;

/// Start/stop handle for the once-per-second countdown.
pub trait Scheduler {
    /// Arms the repeating countdown. No-op if already armed.
    fn arm(&mut self);

    /// Disarms the repeating countdown. No-op if not armed.
    fn disarm(&mut self);

    /// Returns true while the countdown is armed.
    fn is_armed(&self) -> bool;

    /// Requests a single `start()` after `delay`.
    ///
    /// A pending deferred start is not cancelled by `disarm`.
    fn schedule_start(&mut self, delay: Duration);
}

/// Scheduler that records requests instead of keeping time.
#[derive(Debug, Default, Clone)]
pub struct ManualScheduler {
    armed: bool,
    arm_count: usize,
    disarm_count: usize,
    pending_starts: Vec<Duration>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of transitions from disarmed to armed.
    #[must_use]
    pub fn arm_count(&self) -> usize {
        self.arm_count
    }

    /// Number of transitions from armed to disarmed.
    #[must_use]
    pub fn disarm_count(&self) -> usize {
        self.disarm_count
    }

    /// Deferred starts requested and not yet taken.
    #[must_use]
    pub fn pending_starts(&self) -> &[Duration] {
        &self.pending_starts
    }

    /// Removes and returns all pending deferred starts.
    pub fn take_pending_starts(&mut self) -> Vec<Duration> {
        std::mem::take(&mut self.pending_starts)
    }
}

impl Scheduler for ManualScheduler {
    fn arm(&mut self) {
        if !self.armed {
            self.armed = true;
            self.arm_count += 1;
        }
    }

    fn disarm(&mut self) {
        if self.armed {
            self.armed = false;
            self.disarm_count += 1;
        }
    }

    fn is_armed(&self) -> bool {
        self.armed
    }

    fn schedule_start(&mut self, delay: Duration) {
        self.pending_starts.push(delay);
    }
}
