//! Desktop notification backends.
//!
//! Notifications are delivered by the platform's notifier program:
//! macOS (terminal-notifier, osascript) and Linux (notify-send).

use std::process::{Command, Stdio};

use tracing::debug;

use super::content::NotificationContent;
use super::error::NotificationError;

/// Available notification backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// macOS terminal-notifier
    TerminalNotifier,
    /// macOS osascript
    Osascript,
    /// Linux notify-send
    NotifySend,
}

impl Backend {
    /// Detects the best available backend for the current platform.
    #[must_use]
    pub fn detect() -> Option<Self> {
        #[cfg(target_os = "macos")]
        {
            if Self::command_exists("terminal-notifier") {
                return Some(Self::TerminalNotifier);
            }
            return Some(Self::Osascript);
        }

        #[cfg(target_os = "linux")]
        {
            if Self::command_exists("notify-send") {
                return Some(Self::NotifySend);
            }
            return None;
        }

        #[cfg(not(any(target_os = "macos", target_os = "linux")))]
        {
            None
        }
    }

    /// Checks if a command exists on the PATH.
    #[cfg(any(target_os = "macos", target_os = "linux"))]
    fn command_exists(cmd: &str) -> bool {
        Command::new("which")
            .arg(cmd)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    /// Returns the program name of this backend.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::TerminalNotifier => "terminal-notifier",
            Self::Osascript => "osascript",
            Self::NotifySend => "notify-send",
        }
    }

    /// Returns the argument list used to show `content`.
    #[must_use]
    pub fn args(&self, content: &NotificationContent) -> Vec<String> {
        match self {
            Self::TerminalNotifier => vec![
                "-title".to_string(),
                content.title.clone(),
                "-message".to_string(),
                content.body.clone(),
                "-group".to_string(),
                content.tag.clone(),
            ],
            Self::Osascript => {
                let title = content.title.replace('"', r#"\""#);
                let body = content.body.replace('"', r#"\""#);
                vec![
                    "-e".to_string(),
                    format!(r#"display notification "{}" with title "{}""#, body, title),
                ]
            }
            Self::NotifySend => vec![
                "--app-name".to_string(),
                content.title.clone(),
                "--hint".to_string(),
                format!("string:x-canonical-private-synchronous:{}", content.tag),
                content.title.clone(),
                content.body.clone(),
            ],
        }
    }

    /// Shows a notification, blocking until the notifier exits.
    ///
    /// # Errors
    ///
    /// Returns `SendFailed` if the program cannot run or exits unsuccessfully.
    pub fn send(&self, content: &NotificationContent) -> Result<(), NotificationError> {
        debug!("Sending notification via {}", self.name());
        let status = Command::new(self.name())
            .args(self.args(content))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| NotificationError::SendFailed(format!("{}: {}", self.name(), e)))?;

        if !status.success() {
            return Err(NotificationError::SendFailed(format!(
                "{} exited with {}",
                self.name(),
                status
            )));
        }
        Ok(())
    }
}
