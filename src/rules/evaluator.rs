//! Turn evaluation.
//!
//! The engine only sequences card states. Whether two face-up cards form a
//! pair is decided by a `MatchEvaluator`:
//! - The engine calls it once per turn, with two distinct cards
//! - It must be pure; the engine applies the board mutation

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Result of comparing the two cards of a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Both cards stay face-up for the rest of the round.
    Match,
    /// Both cards flip back after the settle delay.
    Mismatch,
}

impl TurnOutcome {
    #[must_use]
    pub fn is_match(self) -> bool {
        self == TurnOutcome::Match
    }
}

/// Pairing rule.
pub trait MatchEvaluator {
    /// Compare the first and second card of a turn.
    fn evaluate(&self, first: &Card, second: &Card) -> TurnOutcome;
}

/// Cards pair when they carry the same symbol.
///
/// Presentation is ignored: the image card and text card of a symbol
/// match each other.
#[derive(Clone, Copy, Debug, Default)]
pub struct SymbolMatch;

impl MatchEvaluator for SymbolMatch {
    fn evaluate(&self, first: &Card, second: &Card) -> TurnOutcome {
        if first.id != second.id && first.symbol == second.symbol {
            TurnOutcome::Match
        } else {
            TurnOutcome::Mismatch
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, Presentation, Symbol};

    fn card(id: u32, symbol: &str, presentation: Presentation) -> Card {
        Card::new(CardId::new(id), Symbol::new(symbol), presentation)
    }

    #[test]
    fn test_same_symbol_matches() {
        let image = card(0, "home", Presentation::Image);
        let text = card(12, "home", Presentation::Text);

        assert_eq!(SymbolMatch.evaluate(&image, &text), TurnOutcome::Match);
        assert_eq!(SymbolMatch.evaluate(&text, &image), TurnOutcome::Match);
    }

    #[test]
    fn test_different_symbols_mismatch() {
        let home = card(0, "home", Presentation::Image);
        let earth = card(13, "earth", Presentation::Text);

        assert_eq!(SymbolMatch.evaluate(&home, &earth), TurnOutcome::Mismatch);
    }

    #[test]
    fn test_presentation_ignored() {
        let a = card(0, "key", Presentation::Image);
        let b = card(1, "key", Presentation::Image);

        assert!(SymbolMatch.evaluate(&a, &b).is_match());
    }

    #[test]
    fn test_card_never_matches_itself() {
        let a = card(4, "key", Presentation::Image);
        assert_eq!(SymbolMatch.evaluate(&a, &a), TurnOutcome::Mismatch);
    }
}
