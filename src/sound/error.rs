//! Sound system error types.
//!
//! Sound failures never reach the person using the timer; they are logged
//! and the completion continues without a tone.

use thiserror::Error;

/// Errors that can occur in the tone playback system.
#[derive(Debug, Error)]
pub enum SoundError {
    /// Audio device is not available (e.g., no speakers connected).
    #[error("audio device is not available: {0}")]
    DeviceNotAvailable(String),

    /// Failed to create the audio output sink.
    #[error("failed to create audio stream: {0}")]
    StreamError(String),

    /// The requested tone cannot be synthesized.
    #[error("invalid tone: {0}")]
    InvalidTone(String),

    /// Generic playback error.
    #[error("sound playback error: {0}")]
    PlaybackError(String),
}

impl SoundError {
    /// Returns true if this error is related to device availability.
    #[must_use]
    pub fn is_device_error(&self) -> bool {
        matches!(self, Self::DeviceNotAvailable(_) | Self::StreamError(_))
    }

    /// Returns a user-friendly suggestion for resolving this error.
    #[must_use]
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::DeviceNotAvailable(_) => "connect an audio output device",
            Self::StreamError(_) => "check your audio settings",
            Self::InvalidTone(_) => "use a positive frequency and duration",
            Self::PlaybackError(_) => "restart the timer",
        }
    }
}
