//! Core engine plumbing: RNG, time, configuration, errors.
//!
//! Nothing here knows about cards. The game modules build on these.

pub mod clock;
pub mod config;
pub mod error;
pub mod rng;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{GameConfig, BOARD_CARDS, BOARD_COLUMNS, BOARD_PAIRS};
pub use error::{GameError, Result};
pub use rng::{GameRng, GameRngState};
