//! Card system: symbols, the symbol pool, card instances, deck building.
//!
//! ## Key Types
//!
//! - `Symbol`: The hidden value; equal symbols match
//! - `SymbolPool`: Catalogue that hands out unique symbol subsets
//! - `Card`: One face on the board (id, symbol, presentation, state)
//! - `DeckBuilder`: Turns symbols into an Image/Text pair per symbol

pub mod card;
pub mod catalogue;
pub mod deck;
pub mod symbol;

pub use card::{Card, CardId, Presentation, RevealState};
pub use catalogue::{SymbolPool, DEFAULT_SYMBOLS};
pub use deck::DeckBuilder;
pub use symbol::Symbol;
