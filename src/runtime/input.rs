//! Terminal input reader.
//!
//! crossterm's event reading blocks, so it runs on its own thread and
//! forwards events to the event loop over an unbounded channel.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

/// How long one poll waits before checking whether the loop has gone.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Input the event loop reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    /// The terminal window regained focus
    FocusGained,
    /// The terminal window lost focus
    FocusLost,
    Resize,
}

/// Converts a crossterm event; mouse and paste events are dropped.
pub fn translate(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => Some(InputEvent::Key(key)),
        Event::FocusGained => Some(InputEvent::FocusGained),
        Event::FocusLost => Some(InputEvent::FocusLost),
        Event::Resize(_, _) => Some(InputEvent::Resize),
        _ => None,
    }
}

/// Spawns the reader thread.
///
/// The thread exits once the receiving side is dropped or reading fails.
pub fn spawn_reader(tx: UnboundedSender<InputEvent>) -> JoinHandle<()> {
    thread::spawn(move || {
        while !tx.is_closed() {
            match event::poll(POLL_INTERVAL) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(e) => {
                    warn!("Terminal poll failed: {}", e);
                    break;
                }
            }
            let event = match event::read() {
                Ok(event) => event,
                Err(e) => {
                    warn!("Terminal read failed: {}", e);
                    break;
                }
            };
            if let Some(input) = translate(event) {
                if tx.send(input).is_err() {
                    break;
                }
            }
        }
        debug!("Input reader stopped");
    })
}
