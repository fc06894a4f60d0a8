//! Session timer and counters.
//!
//! Elapsed time is always recomputed from the recorded start instant.
//! Ticks that arrive late (a backgrounded host, a slow frame) therefore
//! never drift from real elapsed time.

use serde::{Deserialize, Serialize};

/// Elapsed time, turn count and matched-card count for one round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTimer {
    started_at_ms: Option<u64>,
    elapsed_seconds: u64,
    running: bool,
    turn_count: u32,
    matched_count: usize,
}

impl SessionTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start timing at `now_ms`. Returns `false` if already started.
    pub fn start(&mut self, now_ms: u64) -> bool {
        if self.running || self.started_at_ms.is_some() {
            return false;
        }
        self.started_at_ms = Some(now_ms);
        self.elapsed_seconds = 0;
        self.running = true;
        true
    }

    /// Freeze elapsed time at `now_ms`. Returns `false` if not running.
    pub fn stop(&mut self, now_ms: u64) -> bool {
        if !self.running {
            return false;
        }
        self.observe(now_ms);
        self.running = false;
        true
    }

    /// Clear everything for a new round.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Recompute elapsed seconds from the start instant.
    ///
    /// A stopped timer keeps its frozen value.
    pub fn observe(&mut self, now_ms: u64) -> u64 {
        self.elapsed_seconds = self.elapsed_at(now_ms);
        self.elapsed_seconds
    }

    /// Elapsed seconds as they would be observed at `now_ms`.
    #[must_use]
    pub fn elapsed_at(&self, now_ms: u64) -> u64 {
        match (self.running, self.started_at_ms) {
            (true, Some(start)) => now_ms.saturating_sub(start) / 1_000,
            _ => self.elapsed_seconds,
        }
    }

    /// Count a completed turn (second card revealed).
    pub fn record_turn(&mut self) -> u32 {
        self.turn_count += 1;
        self.turn_count
    }

    /// Count a matched pair (two cards).
    pub fn record_match(&mut self) -> usize {
        self.matched_count += 2;
        self.matched_count
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn started_at_ms(&self) -> Option<u64> {
        self.started_at_ms
    }

    #[must_use]
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.matched_count
    }
}
