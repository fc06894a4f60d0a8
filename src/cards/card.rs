//! Card instances - one face on the board.
//!
//! A `Card` is created by the deck builder at the start of a round and only
//! its `reveal_state` changes afterwards. The engine is the only writer.

use serde::{Deserialize, Serialize};

use super::symbol::Symbol;

/// Unique identifier for a card instance within a round.
///
/// Ids are unique even between the two cards that share a symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// How a card shows its symbol once face-up.
///
/// Each symbol gets one card of each kind, so a pair is always an image
/// against its name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Presentation {
    /// Shows the symbol's artwork.
    Image,
    /// Shows the symbol's display name.
    Text,
}

impl Presentation {
    /// Icon token for the face-down side.
    ///
    /// Lets a player tell image cards from text cards before flipping.
    #[must_use]
    pub const fn back_face(self) -> &'static str {
        match self {
            Presentation::Image => "question",
            Presentation::Text => "information",
        }
    }
}

/// Visibility state of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RevealState {
    /// Face-down and selectable.
    #[default]
    Hidden,
    /// Face-up, part of the current turn.
    Revealed,
    /// Face-up for the rest of the round.
    Matched,
}

/// A card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub symbol: Symbol,
    pub presentation: Presentation,
    pub reveal_state: RevealState,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub fn new(id: CardId, symbol: Symbol, presentation: Presentation) -> Self {
        Self {
            id,
            symbol,
            presentation,
            reveal_state: RevealState::Hidden,
        }
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.reveal_state == RevealState::Hidden
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.reveal_state == RevealState::Revealed
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.reveal_state == RevealState::Matched
    }

    /// Is the face currently visible (revealed or matched)?
    #[must_use]
    pub fn is_face_up(&self) -> bool {
        !self.is_hidden()
    }
}
