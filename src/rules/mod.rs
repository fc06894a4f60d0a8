//! Pairing rules.

mod evaluator;

pub use evaluator::{MatchEvaluator, SymbolMatch, TurnOutcome};
