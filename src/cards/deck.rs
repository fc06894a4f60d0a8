//! Deck building.
//!
//! Every chosen symbol yields one Image card and one Text card. The image
//! cards and the text cards are shuffled separately and laid out image
//! group first:
//!
//! ```text
//! [ image x n (shuffled) | text x n (shuffled) ]
//! ```
//!
//! Each group's order is independently random, so the position of a
//! symbol's image card says nothing about where its text card sits.

use log::debug;

use super::card::{Card, CardId, Presentation};
use super::symbol::Symbol;
use crate::core::GameRng;

/// Builds board layouts from chosen symbols.
pub struct DeckBuilder;

impl DeckBuilder {
    /// Build `2 * symbols.len()` face-down cards in board layout order.
    ///
    /// Card ids are assigned before shuffling: the image card for
    /// `symbols[i]` gets id `i`, its text card gets `n + i`.
    ///
    /// ```
    /// use memory_pairs::cards::{DeckBuilder, Presentation, Symbol};
    /// use memory_pairs::core::GameRng;
    ///
    /// let symbols = vec![Symbol::new("home"), Symbol::new("earth")];
    /// let deck = DeckBuilder::build(&symbols, &GameRng::new(1));
    ///
    /// assert_eq!(deck.len(), 4);
    /// assert!(deck[..2].iter().all(|c| c.presentation == Presentation::Image));
    /// assert!(deck[2..].iter().all(|c| c.presentation == Presentation::Text));
    /// ```
    #[must_use]
    pub fn build(symbols: &[Symbol], rng: &GameRng) -> Vec<Card> {
        let n = symbols.len() as u32;

        let mut images: Vec<Card> = symbols
            .iter()
            .zip(0u32..)
            .map(|(symbol, i)| Card::new(CardId::new(i), symbol.clone(), Presentation::Image))
            .collect();
        let mut texts: Vec<Card> = symbols
            .iter()
            .zip(0u32..)
            .map(|(symbol, i)| Card::new(CardId::new(n + i), symbol.clone(), Presentation::Text))
            .collect();

        rng.for_context("images").shuffle(&mut images);
        rng.for_context("texts").shuffle(&mut texts);

        debug!("built deck of {} cards from {} symbols", images.len() + texts.len(), n);

        images.append(&mut texts);
        images
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::{FxHashMap, FxHashSet};

    fn symbols(tokens: &[&str]) -> Vec<Symbol> {
        tokens.iter().map(|t| Symbol::new(*t)).collect()
    }

    #[test]
    fn test_each_symbol_twice_one_per_presentation() {
        let chosen = symbols(&["home", "earth", "key", "lock", "user", "book"]);
        let deck = DeckBuilder::build(&chosen, &GameRng::new(11));

        assert_eq!(deck.len(), 12);

        let mut by_symbol: FxHashMap<&Symbol, Vec<Presentation>> = FxHashMap::default();
        for card in &deck {
            by_symbol.entry(&card.symbol).or_default().push(card.presentation);
        }

        assert_eq!(by_symbol.len(), 6);
        for presentations in by_symbol.values() {
            assert_eq!(presentations.len(), 2);
            assert!(presentations.contains(&Presentation::Image));
            assert!(presentations.contains(&Presentation::Text));
        }
    }

    #[test]
    fn test_ids_unique() {
        let chosen = symbols(&["home", "earth", "key"]);
        let deck = DeckBuilder::build(&chosen, &GameRng::new(2));

        let ids: FxHashSet<CardId> = deck.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), deck.len());
    }

    #[test]
    fn test_all_hidden() {
        let deck = DeckBuilder::build(&symbols(&["a", "b"]), &GameRng::new(2));
        assert!(deck.iter().all(Card::is_hidden));
    }

    #[test]
    fn test_image_group_first() {
        let chosen = symbols(&["a", "b", "c", "d", "e"]);
        let deck = DeckBuilder::build(&chosen, &GameRng::new(8));

        assert!(deck[..5].iter().all(|c| c.presentation == Presentation::Image));
        assert!(deck[5..].iter().all(|c| c.presentation == Presentation::Text));
    }

    #[test]
    fn test_groups_shuffled_independently() {
        let chosen: Vec<Symbol> = (0..12).map(|i| Symbol::new(format!("s{i}"))).collect();

        // Identical orders for both groups would mean they share a stream.
        let independent = (0..20u64).any(|seed| {
            let deck = DeckBuilder::build(&chosen, &GameRng::new(seed));
            let image_order: Vec<_> = deck[..12].iter().map(|c| &c.symbol).collect();
            let text_order: Vec<_> = deck[12..].iter().map(|c| &c.symbol).collect();
            image_order != text_order
        });
        assert!(independent);
    }

    #[test]
    fn test_empty_symbols() {
        assert!(DeckBuilder::build(&[], &GameRng::new(0)).is_empty());
    }
}
