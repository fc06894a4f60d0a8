//! Symbols: the hidden value on each card.

use serde::{Deserialize, Serialize};

/// A symbol token from the catalogue, such as `"check-circle"`.
///
/// Two cards match when they carry equal symbols. The token itself is also
/// what presentation layers use to look up artwork.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-readable title for text-faced cards.
    ///
    /// Dashes and underscores become spaces and each word is capitalised.
    ///
    /// ```
    /// use memory_pairs::cards::Symbol;
    ///
    /// assert_eq!(Symbol::new("check-circle").display_name(), "Check Circle");
    /// assert_eq!(Symbol::new("doc_text").display_name(), "Doc Text");
    /// ```
    #[must_use]
    pub fn display_name(&self) -> String {
        let mut out = String::with_capacity(self.0.len());
        let mut word_start = true;
        for c in self.0.chars() {
            if c == '-' || c == '_' {
                out.push(' ');
                word_start = true;
            } else if word_start && c.is_alphanumeric() {
                out.extend(c.to_uppercase());
                word_start = false;
            } else {
                out.push(c);
                word_start = !c.is_alphanumeric();
            }
        }
        out
    }
}

impl From<&str> for Symbol {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
