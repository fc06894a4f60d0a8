//! The symbol pool.
//!
//! Holds every symbol a round may use and draws unique subsets from it.

use log::warn;
use rustc_hash::FxHashSet;

use super::symbol::Symbol;
use crate::core::{GameError, GameRng, Result};

/// Tokens shipped with the engine.
pub const DEFAULT_SYMBOLS: &[&str] = &[
    "check-circle", "appearance", "book", "bookmark", "diagram", "doc-code",
    "doc-image", "doc-text", "doc-versions", "document", "documents", "earth",
    "heart", "home", "hourglass", "issue-type-objective", "issue-type-test-case",
    "key", "keyboard", "kind", "link", "list-task", "lock", "merge", "messages",
    "monitor", "nature", "notifications", "package", "paper-airplane", "pencil",
    "profile", "quota", "recipe", "remove", "review-list", "rocket", "scale",
    "search", "share", "tablet", "thumb-up", "unlink", "user", "warning",
    "work-item-issue", "work-item-maintenance",
];

/// Catalogue of distinct symbols.
///
/// ## Usage
///
/// ```
/// use memory_pairs::cards::SymbolPool;
/// use memory_pairs::core::GameRng;
///
/// let pool = SymbolPool::default();
/// let mut rng = GameRng::new(42);
///
/// let picked = pool.select_unique(12, &mut rng).unwrap();
/// assert_eq!(picked.len(), 12);
/// ```
#[derive(Clone, Debug)]
pub struct SymbolPool {
    symbols: Vec<Symbol>,
}

impl SymbolPool {
    /// Build a pool from tokens. Repeated tokens are dropped so the pool
    /// only ever holds distinct symbols.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        let mut seen = FxHashSet::default();
        let mut symbols = Vec::new();
        for token in tokens {
            let symbol = token.into();
            if seen.insert(symbol.clone()) {
                symbols.push(symbol);
            } else {
                warn!("dropping duplicate catalogue symbol {symbol}");
            }
        }
        Self { symbols }
    }

    /// Number of distinct symbols available.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// All symbols in catalogue order.
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Draw `count` distinct symbols uniformly at random.
    ///
    /// Shuffles a copy of the catalogue and takes the first `count`.
    pub fn select_unique(&self, count: usize, rng: &mut GameRng) -> Result<Vec<Symbol>> {
        if count > self.symbols.len() {
            return Err(GameError::InsufficientCatalogue {
                requested: count,
                available: self.symbols.len(),
            });
        }

        let mut shuffled = self.symbols.clone();
        rng.shuffle(&mut shuffled);
        shuffled.truncate(count);
        Ok(shuffled)
    }
}

impl Default for SymbolPool {
    fn default() -> Self {
        Self::new(DEFAULT_SYMBOLS.iter().copied())
    }
}

impl From<&str> for SymbolPool {
    /// Whitespace-separated token list.
    fn from(tokens: &str) -> Self {
        Self::new(tokens.split_whitespace())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalogue() {
        let pool = SymbolPool::default();
        assert_eq!(pool.len(), 47);
        assert!(pool.symbols().contains(&Symbol::new("home")));
    }

    #[test]
    fn test_duplicates_dropped() {
        let pool = SymbolPool::new(["home", "earth", "home"]);
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.symbols(), &[Symbol::new("home"), Symbol::new("earth")]);
    }

    #[test]
    fn test_select_unique_has_no_repeats() {
        let pool = SymbolPool::default();
        let mut rng = GameRng::new(3);

        let picked = pool.select_unique(12, &mut rng).unwrap();
        let distinct: FxHashSet<_> = picked.iter().collect();

        assert_eq!(picked.len(), 12);
        assert_eq!(distinct.len(), 12);
        assert!(picked.iter().all(|s| pool.symbols().contains(s)));
    }

    #[test]
    fn test_select_whole_catalogue() {
        let pool = SymbolPool::from("a b c");
        let mut rng = GameRng::new(1);

        let mut picked = pool.select_unique(3, &mut rng).unwrap();
        picked.sort();
        assert_eq!(picked, vec![Symbol::new("a"), Symbol::new("b"), Symbol::new("c")]);
    }

    #[test]
    fn test_insufficient_catalogue() {
        let pool = SymbolPool::from("home earth key lock user");
        let mut rng = GameRng::new(1);

        assert_eq!(
            pool.select_unique(12, &mut rng),
            Err(GameError::InsufficientCatalogue { requested: 12, available: 5 })
        );
    }

    #[test]
    fn test_selection_is_seeded() {
        let pool = SymbolPool::default();
        let a = pool.select_unique(12, &mut GameRng::new(99)).unwrap();
        let b = pool.select_unique(12, &mut GameRng::new(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_selection_reaches_every_symbol() {
        let pool = SymbolPool::from("a b c d e f");
        let mut rng = GameRng::new(5);
        let mut seen = FxHashSet::default();

        for _ in 0..200 {
            seen.extend(pool.select_unique(1, &mut rng).unwrap());
        }

        assert_eq!(seen.len(), 6);
    }
}
