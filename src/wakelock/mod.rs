//! Keeping the display awake during focus sessions.
//!
//! A wake lock is a scoped resource: the state machine acquires it when a
//! focus countdown starts and releases it on pause, reset, completion and
//! exit. Platforms without an inhibitor report [`WakeLockError::Unsupported`]
//! and the timer carries on without one.
//!
//! # Error Handling
//!
//! All errors in this module are recoverable. Use
//! [`WakeLockError::is_recoverable`] to check this.

pub mod error;
pub mod inhibitor;

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

pub use error::WakeLockError;
pub use inhibitor::{InhibitorCommand, InhibitorWakeLock};

/// A lock that prevents the display from sleeping while held.
pub trait WakeLock {
    /// Takes the lock. Succeeds without side effects if already held.
    fn acquire(&mut self) -> Result<(), WakeLockError>;

    /// Drops the lock. Succeeds without side effects if not held.
    fn release(&mut self) -> Result<(), WakeLockError>;

    /// Returns true while the lock is held.
    fn is_held(&self) -> bool;
}

/// Mock wake lock for testing.
///
/// Clones share state, so a test can keep one handle while the state
/// machine owns another.
#[derive(Debug, Clone, Default)]
pub struct MockWakeLock {
    held: Arc<AtomicBool>,
    acquire_calls: Arc<AtomicUsize>,
    release_calls: Arc<AtomicUsize>,
    should_fail: Arc<AtomicBool>,
}

impl MockWakeLock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    #[must_use]
    pub fn acquire_count(&self) -> usize {
        self.acquire_calls.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn release_count(&self) -> usize {
        self.release_calls.load(Ordering::SeqCst)
    }
}

impl WakeLock for MockWakeLock {
    fn acquire(&mut self) -> Result<(), WakeLockError> {
        self.acquire_calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(WakeLockError::SpawnFailed(
                "mock".to_string(),
                "simulated failure".to_string(),
            ));
        }
        self.held.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn release(&mut self) -> Result<(), WakeLockError> {
        self.release_calls.fetch_add(1, Ordering::SeqCst);
        self.held.store(false, Ordering::SeqCst);
        Ok(())
    }

    fn is_held(&self) -> bool {
        self.held.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_shares_state_across_clones() {
        let handle = MockWakeLock::new();
        let mut lock = handle.clone();

        lock.acquire().unwrap();
        assert!(handle.is_held());
        assert_eq!(handle.acquire_count(), 1);

        lock.release().unwrap();
        assert!(!handle.is_held());
        assert_eq!(handle.release_count(), 1);
    }

    #[test]
    fn test_mock_failure() {
        let mut lock = MockWakeLock::new();
        lock.set_should_fail(true);
        let err = lock.acquire().unwrap_err();
        assert!(err.is_recoverable());
        assert!(!lock.is_held());
    }
}
