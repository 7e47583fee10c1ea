//! Vibration for completed sessions.
//!
//! Terminals have no vibration motor, so the default vibrator pulses the
//! terminal bell along the pattern. Headless runs (stdout not a terminal)
//! report the feature as unsupported.

use std::io::{self, IsTerminal, Write};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use tracing::warn;

/// Alternating on/off durations in milliseconds, starting with "on".
pub const COMPLETION_PATTERN: [u64; 3] = [200, 100, 200];

/// A device that can play a vibration pattern.
pub trait Vibrator {
    /// Returns true if the device can vibrate.
    fn is_supported(&self) -> bool;

    /// Starts the pattern without blocking.
    fn vibrate(&self, pattern: &[u64]);
}

/// Rings the terminal bell once per "on" segment of the pattern.
#[derive(Debug, Clone, Copy, Default)]
pub struct BellVibrator;

impl Vibrator for BellVibrator {
    fn is_supported(&self) -> bool {
        io::stdout().is_terminal()
    }

    fn vibrate(&self, pattern: &[u64]) {
        let pattern = pattern.to_vec();
        let spawned = thread::Builder::new()
            .name("vibration".to_string())
            .spawn(move || {
                for (i, millis) in pattern.iter().enumerate() {
                    if i % 2 == 0 {
                        let mut stdout = io::stdout();
                        let _ = stdout.write_all(b"\x07");
                        let _ = stdout.flush();
                    }
                    thread::sleep(Duration::from_millis(*millis));
                }
            });
        if let Err(e) = spawned {
            warn!("Failed to start vibration: {}", e);
        }
    }
}

/// Mock vibrator for testing.
#[derive(Debug, Clone)]
pub struct MockVibrator {
    supported: bool,
    patterns: Arc<Mutex<Vec<Vec<u64>>>>,
}

impl MockVibrator {
    #[must_use]
    pub fn new(supported: bool) -> Self {
        Self {
            supported,
            patterns: Arc::new(Mutex::new(Vec::new())),
        }
    }

    #[must_use]
    pub fn patterns(&self) -> Vec<Vec<u64>> {
        self.patterns.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

impl Vibrator for MockVibrator {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn vibrate(&self, pattern: &[u64]) {
        if let Ok(mut patterns) = self.patterns.lock() {
            patterns.push(pattern.to_vec());
        }
    }
}
