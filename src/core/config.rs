//! Game configuration.
//!
//! The board size is fixed: 12 pairs laid out as 24 cards on a 6-column
//! grid. Hosts only tune timing and, when they want reproducible deals,
//! the seed.

use serde::{Deserialize, Serialize};

/// Number of pairs on every board.
pub const BOARD_PAIRS: usize = 12;

/// Number of cards on every board.
pub const BOARD_CARDS: usize = BOARD_PAIRS * 2;

/// Grid width used by the reference layout (6 x 4).
pub const BOARD_COLUMNS: usize = 6;

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// How long a mismatched pair stays face-up before flipping back.
    pub settle_delay_ms: u64,

    /// How often the host should call `tick` while the timer runs.
    /// Only affects display refresh.
    pub tick_interval_ms: u64,

    /// Seed for dealing. `None` draws a seed from the OS.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: 1_500,
            tick_interval_ms: 250,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Set the mismatch settle delay.
    #[must_use]
    pub fn with_settle_delay(mut self, ms: u64) -> Self {
        self.settle_delay_ms = ms;
        self
    }

    /// Set the display tick interval. Zero is raised to 1 ms.
    #[must_use]
    pub fn with_tick_interval(mut self, ms: u64) -> Self {
        self.tick_interval_ms = ms.max(1);
        self
    }

    /// Use a fixed seed so every run deals the same sequence of rounds.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
