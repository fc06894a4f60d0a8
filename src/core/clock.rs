//! Time sources.
//!
//! The engine never reads the system time directly. Every deadline and
//! elapsed-time computation goes through a [`Clock`], so hosts can drive the
//! game from a real monotonic clock and tests can step time by hand.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// A monotonic millisecond time source.
pub trait Clock {
    /// Milliseconds since this clock's epoch.
    fn now_ms(&self) -> u64;
}

/// Monotonic clock backed by [`Instant`].
///
/// The epoch is the moment the clock was created.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    #[must_use]
    pub fn new() -> Self {
        Self { epoch: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }
}

/// Manually advanced clock.
///
/// Clones share the same time, so a test can keep one handle and give
/// another to the engine.
///
/// ```
/// use memory_pairs::core::{Clock, ManualClock};
///
/// let clock = ManualClock::new();
/// let engine_side = clock.clone();
///
/// clock.advance(1_500);
/// assert_eq!(engine_side.now_ms(), 1_500);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward by `ms` milliseconds.
    pub fn advance(&self, ms: u64) {
        self.now.fetch_add(ms, Ordering::SeqCst);
    }

    /// Jump to an absolute time. Moving backwards is ignored.
    pub fn set(&self, ms: u64) {
        self.now.fetch_max(ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_shared() {
        let clock = ManualClock::new();
        let other = clock.clone();

        assert_eq!(other.now_ms(), 0);
        clock.advance(250);
        clock.advance(250);
        assert_eq!(other.now_ms(), 500);
    }

    #[test]
    fn test_manual_clock_never_goes_back() {
        let clock = ManualClock::new();
        clock.set(1_000);
        clock.set(400);
        assert_eq!(clock.now_ms(), 1_000);
    }

    #[test]
    fn test_system_clock_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }
}
