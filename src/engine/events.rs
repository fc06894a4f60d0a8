//! Events published by the engine.
//!
//! Presentation collaborators (board renderer, solved-items sidebar, clock
//! display) react to these; they never mutate the round themselves.
//!
//! ## Ordering within one reveal request
//!
//! A second card produces, in order: `CardRevealed`, `TurnCountChanged`,
//! then `PairMatched` or `PairMismatched`, then `RoundCompleted` if that
//! pair was the last one.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, Symbol};
use crate::session::RoundSummary;

/// Something observable that happened to the round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A fresh board was dealt.
    RoundStarted { round: u32 },

    /// A card turned face-up.
    CardRevealed { card: CardId },

    /// Two face-up cards paired; they stay face-up.
    PairMatched {
        symbol: Symbol,
        first: CardId,
        second: CardId,
    },

    /// Two face-up cards did not pair. Fired as the settle delay begins.
    PairMismatched { first: CardId, second: CardId },

    /// The settle delay ended; both cards are face-down again.
    PairUnflipped { first: CardId, second: CardId },

    /// The last pair was matched. Fired exactly once per round.
    RoundCompleted { elapsed_seconds: u64, turn_count: u32 },

    /// Display refresh while the timer runs.
    TimerTick { elapsed_seconds: u64 },

    /// A turn (second card of a pair) was taken.
    TurnCountChanged { turn_count: u32 },
}

impl GameEvent {
    /// Short name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::RoundStarted { .. } => "RoundStarted",
            GameEvent::CardRevealed { .. } => "CardRevealed",
            GameEvent::PairMatched { .. } => "PairMatched",
            GameEvent::PairMismatched { .. } => "PairMismatched",
            GameEvent::PairUnflipped { .. } => "PairUnflipped",
            GameEvent::RoundCompleted { .. } => "RoundCompleted",
            GameEvent::TimerTick { .. } => "TimerTick",
            GameEvent::TurnCountChanged { .. } => "TurnCountChanged",
        }
    }

    /// Final result, for `RoundCompleted`.
    #[must_use]
    pub fn summary(&self) -> Option<RoundSummary> {
        match *self {
            GameEvent::RoundCompleted { elapsed_seconds, turn_count } => Some(RoundSummary {
                elapsed_seconds,
                turn_count,
            }),
            _ => None,
        }
    }

    /// Cards this event is about, in event order.
    #[must_use]
    pub fn cards(&self) -> Vec<CardId> {
        match *self {
            GameEvent::CardRevealed { card } => vec![card],
            GameEvent::PairMatched { first, second, .. }
            | GameEvent::PairMismatched { first, second }
            | GameEvent::PairUnflipped { first, second } => vec![first, second],
            _ => Vec::new(),
        }
    }
}
