//! Completion tone playback for the Pomodoro Timer.
//!
//! This module provides audio notification capabilities, including:
//!
//! - Synthesized sine tones (no audio files are shipped)
//! - Non-blocking audio playback
//! - Graceful degradation when audio is unavailable
//!
//! # Usage
//!
//! ```rust,no_run
//! use pomodoro_term::sound::{RodioTonePlayer, ToneSpec};
//!
//! // Create a player (may fail if no audio device)
//! let player = RodioTonePlayer::new().expect("audio init");
//!
//! // Play the completion tone
//! player.play(&ToneSpec::completion()).expect("playback failed");
//! ```

mod error;
mod player;
mod tone;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

pub use error::SoundError;
pub use player::{try_create_player, RodioTonePlayer};
pub use tone::ToneSpec;

/// Trait for tone playback implementations.
pub trait TonePlayer {
    /// Plays a tone. Must not block for the length of the tone.
    ///
    /// # Errors
    ///
    /// Returns an error if playback fails.
    fn play(&self, tone: &ToneSpec) -> Result<(), SoundError>;
}

impl TonePlayer for RodioTonePlayer {
    fn play(&self, tone: &ToneSpec) -> Result<(), SoundError> {
        RodioTonePlayer::play(self, tone)
    }
}

/// Tone player used when no audio device could be opened.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentTonePlayer;

impl TonePlayer for SilentTonePlayer {
    fn play(&self, _tone: &ToneSpec) -> Result<(), SoundError> {
        Err(SoundError::DeviceNotAvailable(
            "no audio output was opened".to_string(),
        ))
    }
}

/// Mock tone player for testing.
///
/// Clones share the recorded calls.
#[derive(Debug, Default, Clone)]
pub struct MockTonePlayer {
    play_calls: Arc<Mutex<Vec<ToneSpec>>>,
    should_fail: Arc<AtomicBool>,
}

impl MockTonePlayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    #[must_use]
    pub fn play_count(&self) -> usize {
        self.play_calls.lock().map(|calls| calls.len()).unwrap_or(0)
    }

    #[must_use]
    pub fn get_play_calls(&self) -> Vec<ToneSpec> {
        self.play_calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

impl TonePlayer for MockTonePlayer {
    fn play(&self, tone: &ToneSpec) -> Result<(), SoundError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(SoundError::PlaybackError("Mock failure".to_string()));
        }
        if let Ok(mut calls) = self.play_calls.lock() {
            calls.push(*tone);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_player_reports_device_error() {
        let player = SilentTonePlayer;
        let err = player.play(&ToneSpec::completion()).unwrap_err();
        assert!(err.is_device_error());
    }

    #[test]
    fn test_mock_records_calls() {
        let handle = MockTonePlayer::new();
        let player = handle.clone();
        player.play(&ToneSpec::completion()).unwrap();
        assert_eq!(handle.play_count(), 1);
        assert_eq!(handle.get_play_calls()[0], ToneSpec::completion());
    }

    #[test]
    fn test_mock_failure() {
        let player = MockTonePlayer::new();
        player.set_should_fail(true);
        assert!(player.play(&ToneSpec::completion()).is_err());
        assert_eq!(player.play_count(), 0);
    }
}
