//! Engine errors.
//!
//! Dealing is the only operation that can fail. Bad reveal requests are
//! not errors; see [`crate::engine::IgnoreReason`].

use thiserror::Error;

/// Errors raised while setting up a round.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The symbol catalogue cannot supply the requested number of pairs.
    #[error("catalogue has {available} symbols but {requested} pairs were requested")]
    InsufficientCatalogue { requested: usize, available: usize },
}

pub type Result<T> = std::result::Result<T, GameError>;
