//! Completion side effects.
//!
//! When a countdown reaches zero the state machine asks the
//! [`CompletionNotifier`] to announce it:
//!
//! 1. a short synthesized tone, if sound is enabled
//! 2. a vibration pattern, if vibration is enabled and supported
//! 3. a desktop notification, if permission was granted
//!
//! Every effect is best-effort. Failures are logged and recorded in the
//! returned [`NotifyReport`]; they never reach the caller as errors.

pub mod vibration;

use tracing::{debug, warn};

use crate::notification::{create_completion_content, NotificationSender};
use crate::sound::{TonePlayer, ToneSpec};
use crate::types::{NotificationPermission, SessionType, TimerSettings};

pub use vibration::{BellVibrator, MockVibrator, Vibrator, COMPLETION_PATTERN};

/// What happened to one completion effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectOutcome {
    Fired,
    Skipped,
    Failed,
}

/// Outcome of each effect for one completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotifyReport {
    pub sound: EffectOutcome,
    pub vibration: EffectOutcome,
    pub notification: EffectOutcome,
}

/// Fires the tone, vibration and notification for a finished session.
pub struct CompletionNotifier {
    tone_player: Box<dyn TonePlayer>,
    vibrator: Box<dyn Vibrator>,
    sender: Box<dyn NotificationSender>,
    permission: NotificationPermission,
    tone: ToneSpec,
}

impl CompletionNotifier {
    pub fn new(
        tone_player: Box<dyn TonePlayer>,
        vibrator: Box<dyn Vibrator>,
        sender: Box<dyn NotificationSender>,
        permission: NotificationPermission,
    ) -> Self {
        Self {
            tone_player,
            vibrator,
            sender,
            permission,
            tone: ToneSpec::completion(),
        }
    }

    /// Current notification permission.
    pub fn permission(&self) -> NotificationPermission {
        self.permission
    }

    /// Updates the notification permission after the user answers.
    pub fn set_permission(&mut self, permission: NotificationPermission) {
        self.permission = permission;
    }

    /// Returns true if a desktop notification backend exists at all.
    pub fn notifications_available(&self) -> bool {
        self.sender.is_available()
    }

    /// Announces that `finished` has completed.
    pub fn notify(&self, finished: SessionType, settings: &TimerSettings) -> NotifyReport {
        let report = NotifyReport {
            sound: self.play_tone(settings),
            vibration: self.vibrate(settings),
            notification: self.send_notification(finished),
        };
        debug!("Completion of {} announced: {:?}", finished, report);
        report
    }

    fn play_tone(&self, settings: &TimerSettings) -> EffectOutcome {
        if !settings.sound_enabled {
            return EffectOutcome::Skipped;
        }
        match self.tone_player.play(&self.tone) {
            Ok(()) => EffectOutcome::Fired,
            Err(e) => {
                warn!("Audio notification failed: {}", e);
                EffectOutcome::Failed
            }
        }
    }

    fn vibrate(&self, settings: &TimerSettings) -> EffectOutcome {
        if !settings.vibration_enabled || !self.vibrator.is_supported() {
            return EffectOutcome::Skipped;
        }
        self.vibrator.vibrate(&COMPLETION_PATTERN);
        EffectOutcome::Fired
    }

    fn send_notification(&self, finished: SessionType) -> EffectOutcome {
        if self.permission != NotificationPermission::Granted {
            return EffectOutcome::Skipped;
        }
        let result =
            create_completion_content(finished).and_then(|content| self.sender.send(&content));
        match result {
            Ok(()) => EffectOutcome::Fired,
            Err(e) => {
                warn!("Desktop notification failed: {}", e);
                EffectOutcome::Failed
            }
        }
    }
}

impl std::fmt::Debug for CompletionNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionNotifier")
            .field("permission", &self.permission)
            .field("tone", &self.tone)
            .finish_non_exhaustive()
    }
}
