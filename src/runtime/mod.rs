//! Interactive runtime.
//!
//! This module connects the state machine to the outside world:
//! - `driver`: tokio clock behind the [`Scheduler`](crate::session::Scheduler) seam
//! - `input`: terminal event reader thread
//! - `terminal`: raw-mode alternate screen
//! - `app`: the event loop

pub mod app;
pub mod driver;
pub mod input;
pub mod terminal;

pub use app::{run, App};
pub use driver::{DriverEvent, TokioScheduler, TICK_PERIOD};
pub use input::InputEvent;
