//! Description of a synthesized completion tone.

use std::time::Duration;

use super::error::SoundError;

/// A short sine tone with a fade-out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSpec {
    /// Pitch in hertz
    pub frequency_hz: f32,
    /// Length of the tone
    pub duration: Duration,
    /// Starting amplitude in (0, 1]
    pub gain: f32,
}

impl ToneSpec {
    /// The tone played when a session completes: 800 Hz, 0.5 s, gain 0.3.
    #[must_use]
    pub const fn completion() -> Self {
        Self {
            frequency_hz: 800.0,
            duration: Duration::from_millis(500),
            gain: 0.3,
        }
    }

    /// Checks that the tone can be synthesized.
    pub fn validate(&self) -> Result<(), SoundError> {
        if !(self.frequency_hz.is_finite() && self.frequency_hz > 0.0) {
            return Err(SoundError::InvalidTone(format!(
                "frequency {} Hz",
                self.frequency_hz
            )));
        }
        if self.duration.is_zero() {
            return Err(SoundError::InvalidTone("zero duration".to_string()));
        }
        if !(self.gain > 0.0 && self.gain <= 1.0) {
            return Err(SoundError::InvalidTone(format!("gain {}", self.gain)));
        }
        Ok(())
    }
}

impl Default for ToneSpec {
    fn default() -> Self {
        Self::completion()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_tone() {
        let tone = ToneSpec::completion();
        assert_eq!(tone.frequency_hz, 800.0);
        assert_eq!(tone.duration, Duration::from_millis(500));
        assert_eq!(tone.gain, 0.3);
        assert!(tone.validate().is_ok());
    }

    #[test]
    fn test_invalid_tones() {
        let zero_freq = ToneSpec {
            frequency_hz: 0.0,
            ..ToneSpec::completion()
        };
        assert!(zero_freq.validate().is_err());

        let zero_len = ToneSpec {
            duration: Duration::ZERO,
            ..ToneSpec::completion()
        };
        assert!(zero_len.validate().is_err());

        let loud = ToneSpec {
            gain: 1.5,
            ..ToneSpec::completion()
        };
        assert!(loud.validate().is_err());
    }
}
