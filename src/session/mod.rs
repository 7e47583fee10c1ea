//! Session module for the Pomodoro Timer.
//!
//! This module contains the timer core:
//! - `policy`: session type → duration
//! - `scheduler`: the seam through which the machine arms the countdown
//! - `machine`: the state machine with its transitions

pub mod machine;
pub mod policy;
pub mod scheduler;

pub use machine::{Completion, SessionMachine, TickOutcome, AUTO_START_DELAY};
pub use policy::duration_for;
pub use scheduler::{ManualScheduler, Scheduler};
