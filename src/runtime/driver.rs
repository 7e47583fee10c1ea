//! Tokio-backed countdown driver.
//!
//! Implements [`Scheduler`] with a one-second `tokio::time::Interval` and a
//! one-shot sleep for the deferred auto-start. The event loop awaits
//! [`TokioScheduler::next_event`] and feeds the result to the state machine.

use std::future::pending;
use std::pin::Pin;
use std::time::Duration;

use tokio::time::{interval_at, sleep, Instant, Interval, MissedTickBehavior, Sleep};

use crate::session::Scheduler;

/// Countdown period.
pub const TICK_PERIOD: Duration = Duration::from_millis(1000);

/// Something the driver wants the state machine to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverEvent {
    /// One countdown period elapsed
    Tick,
    /// A deferred start is due
    AutoStart,
}

/// Scheduler driven by the tokio clock.
#[derive(Debug, Default)]
pub struct TokioScheduler {
    interval: Option<Interval>,
    auto_start: Option<Pin<Box<Sleep>>>,
}

impl TokioScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while a deferred start is pending.
    pub fn has_pending_start(&self) -> bool {
        self.auto_start.is_some()
    }

    /// Waits for the next tick or deferred start.
    ///
    /// Never resolves while disarmed with no start pending.
    pub async fn next_event(&mut self) -> DriverEvent {
        let event = {
            let Self {
                interval,
                auto_start,
            } = self;
            tokio::select! {
                _ = next_tick(interval) => DriverEvent::Tick,
                _ = start_due(auto_start) => DriverEvent::AutoStart,
            }
        };
        if event == DriverEvent::AutoStart {
            self.auto_start = None;
        }
        event
    }
}

impl Scheduler for TokioScheduler {
    fn arm(&mut self) {
        if self.interval.is_none() {
            // First tick one full period after starting
            let mut ticker = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            self.interval = Some(ticker);
        }
    }

    fn disarm(&mut self) {
        self.interval = None;
    }

    fn is_armed(&self) -> bool {
        self.interval.is_some()
    }

    fn schedule_start(&mut self, delay: Duration) {
        self.auto_start = Some(Box::pin(sleep(delay)));
    }
}

async fn next_tick(interval: &mut Option<Interval>) {
    match interval {
        Some(ticker) => {
            ticker.tick().await;
        }
        None => pending().await,
    }
}

async fn start_due(auto_start: &mut Option<Pin<Box<Sleep>>>) {
    match auto_start {
        Some(delay) => delay.as_mut().await,
        None => pending().await,
    }
}
