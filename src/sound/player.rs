//! Tone player implementation using rodio.
//!
//! This module provides the `RodioTonePlayer` which synthesizes the
//! completion tone with the rodio v0.20 audio library.

use rodio::source::{SineWave, Source};
use rodio::{OutputStream, OutputStreamHandle, Sink};
use tracing::{debug, warn};

use super::error::SoundError;
use super::tone::ToneSpec;

/// A tone player that uses rodio for audio output.
///
/// Playback is non-blocking; the tone keeps playing after `play` returns.
pub struct RodioTonePlayer {
    /// The audio output stream (must be kept alive for playback).
    _stream: OutputStream,
    /// Handle to the output stream for creating sinks.
    stream_handle: OutputStreamHandle,
}

impl RodioTonePlayer {
    /// Creates a new tone player.
    ///
    /// # Errors
    ///
    /// Returns `SoundError::DeviceNotAvailable` if no audio output device
    /// is available.
    pub fn new() -> Result<Self, SoundError> {
        let (stream, stream_handle) = OutputStream::try_default()
            .map_err(|e| SoundError::DeviceNotAvailable(e.to_string()))?;

        debug!("Audio output stream initialized");

        Ok(Self {
            _stream: stream,
            stream_handle,
        })
    }

    /// Plays a tone.
    ///
    /// # Errors
    ///
    /// Returns an error if the tone is invalid or the sink cannot be created.
    pub fn play(&self, tone: &ToneSpec) -> Result<(), SoundError> {
        tone.validate()?;

        let sink = Sink::try_new(&self.stream_handle)
            .map_err(|e| SoundError::StreamError(e.to_string()))?;

        let mut source = SineWave::new(tone.frequency_hz).take_duration(tone.duration);
        // Fade the amplitude to silence over the tone's length.
        source.set_filter_fadeout();

        sink.append(source.amplify(tone.gain));
        sink.detach();

        debug!(
            "Tone playback started: {} Hz for {:?}",
            tone.frequency_hz, tone.duration
        );
        Ok(())
    }

}

impl std::fmt::Debug for RodioTonePlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RodioTonePlayer").finish_non_exhaustive()
    }
}

/// Creates a tone player, returning None if audio is unavailable.
///
/// If audio initialization fails, a warning is logged and None is returned.
#[must_use]
pub fn try_create_player() -> Option<RodioTonePlayer> {
    match RodioTonePlayer::new() {
        Ok(player) => Some(player),
        Err(e) => {
            warn!("Audio not available, completion tone disabled: {}", e);
            None
        }
    }
}
