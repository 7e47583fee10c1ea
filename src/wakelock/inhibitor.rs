//! Sleep inhibitor backed by an external process.
//!
//! The lock is held for as long as the child process lives:
//! - macOS: `caffeinate -d -i`
//! - Linux: `systemd-inhibit ... sleep infinity`

use std::io;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use super::error::WakeLockError;
use super::WakeLock;

/// Program and arguments that keep the display awake while running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InhibitorCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl InhibitorCommand {
    /// Creates a command from a program and its arguments.
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the inhibitor for the current platform, if one is known.
    #[must_use]
    pub fn detect() -> Option<Self> {
        #[cfg(target_os = "macos")]
        {
            return Some(Self::new("caffeinate", ["-d", "-i"]));
        }

        #[cfg(target_os = "linux")]
        {
            return Some(Self::new(
                "systemd-inhibit",
                [
                    "--what=idle:sleep",
                    "--who=pomodoro",
                    "--why=Focus session",
                    "--mode=block",
                    "sleep",
                    "infinity",
                ],
            ));
        }

        #[cfg(not(any(target_os = "macos", target_os = "linux")))]
        {
            None
        }
    }
}

/// How long a freshly spawned inhibitor must survive to count as holding the lock.
const STARTUP_GRACE: Duration = Duration::from_millis(100);

/// Polls the child until it exits or the grace period ends.
fn exited_within(child: &mut Child, grace: Duration) -> Option<ExitStatus> {
    let deadline = Instant::now() + grace;
    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Some(status),
            Ok(None) if Instant::now() >= deadline => return None,
            Ok(None) => thread::sleep(Duration::from_millis(10)),
            Err(e) => {
                warn!("Could not query wake lock process: {}", e);
                return None;
            }
        }
    }
}

/// Wake lock that holds an inhibitor child process.
#[derive(Debug)]
pub struct InhibitorWakeLock {
    command: Option<InhibitorCommand>,
    child: Option<Child>,
}

impl InhibitorWakeLock {
    /// Creates a wake lock using the platform inhibitor.
    #[must_use]
    pub fn new() -> Self {
        Self::with_command(InhibitorCommand::detect())
    }

    /// Creates a wake lock with an explicit inhibitor command.
    #[must_use]
    pub fn with_command(command: Option<InhibitorCommand>) -> Self {
        Self {
            command,
            child: None,
        }
    }
}

impl Default for InhibitorWakeLock {
    fn default() -> Self {
        Self::new()
    }
}

impl WakeLock for InhibitorWakeLock {
    fn acquire(&mut self) -> Result<(), WakeLockError> {
        if let Some(child) = self.child.as_mut() {
            match child.try_wait() {
                Ok(Some(status)) => {
                    warn!("Wake lock process exited unexpectedly: {}", status);
                    self.child = None;
                }
                _ => return Ok(()),
            }
        }
        let command = self.command.as_ref().ok_or(WakeLockError::Unsupported)?;

        let mut child = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => WakeLockError::ToolNotFound(command.program.clone()),
                _ => WakeLockError::SpawnFailed(command.program.clone(), e.to_string()),
            })?;

        if let Some(status) = exited_within(&mut child, STARTUP_GRACE) {
            return Err(WakeLockError::SpawnFailed(
                command.program.clone(),
                format!("exited immediately with {}", status),
            ));
        }

        info!("Wake lock acquired (pid {})", child.id());
        self.child = Some(child);
        Ok(())
    }

    fn release(&mut self) -> Result<(), WakeLockError> {
        let Some(mut child) = self.child.take() else {
            return Ok(());
        };

        match child.try_wait() {
            Ok(Some(status)) => {
                debug!("Wake lock process already exited: {}", status);
                return Ok(());
            }
            Ok(None) => {}
            Err(e) => warn!("Could not query wake lock process: {}", e),
        }

        child
            .kill()
            .map_err(|e| WakeLockError::ReleaseFailed(e.to_string()))?;
        // Reap to avoid leaving a zombie behind.
        let _ = child.wait();
        info!("Wake lock released");
        Ok(())
    }

    fn is_held(&self) -> bool {
        self.child.is_some()
    }
}

impl Drop for InhibitorWakeLock {
    fn drop(&mut self) {
        if let Err(e) = self.release() {
            warn!("Failed to release wake lock on drop: {}", e);
        }
    }
}
