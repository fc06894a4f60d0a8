//! # memory-pairs
//!
//! Engine for a memory-matching (pairs) game.
//!
//! A board of 24 face-down cards hides 12 symbols. Each symbol appears on
//! exactly two cards: one shows its artwork, the other its name. The
//! player reveals two cards per turn; pairs stay face-up, mismatches flip
//! back after a short settle delay.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: The engine publishes events and snapshots.
//!    Rendering, artwork and layout belong to the host.
//!
//! 2. **No Ambient State**: One `MemoryGame` value owns the round, timer
//!    and deferred work. Everything changes through its methods.
//!
//! 3. **Deterministic When Asked**: A configured seed reproduces every deal.
//!    Time comes from an injected `Clock`.
//!
//! ## Modules
//!
//! - `core`: RNG, clocks, configuration, errors
//! - `cards`: Symbols, the symbol pool, cards, deck building
//! - `rules`: Match evaluation
//! - `session`: Timer, counters, clock formatting
//! - `engine`: Round state machine, events, deferred tasks

pub mod core;
pub mod cards;
pub mod rules;
pub mod session;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    Clock, ManualClock, SystemClock,
    GameConfig, GameError, GameRng, GameRngState, Result,
    BOARD_CARDS, BOARD_COLUMNS, BOARD_PAIRS,
};

pub use crate::cards::{Card, CardId, DeckBuilder, Presentation, RevealState, Symbol, SymbolPool};

pub use crate::rules::{MatchEvaluator, SymbolMatch, TurnOutcome};

pub use crate::session::{format_clock, RoundSummary, SessionTimer};

pub use crate::engine::{
    GameEvent, IgnoreReason, MemoryGame, RevealOutcome,
    Round, RoundSnapshot, RoundStatus,
};
