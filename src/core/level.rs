//! Deck levels.
//!
//! The game has exactly four decks, keyed by level 0 (warm-up) through 3
//! (deepest). A `DeckLevel` can only be built through a checked conversion,
//! so every value that reaches the state machine is a valid index into the
//! deck table.

use serde::{Deserialize, Serialize};

use super::error::DeckError;

/// Number of decks in the game.
pub const DECK_COUNT: usize = 4;

/// Level of a deck, always in `0..DECK_COUNT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DeckLevel(u8);

impl DeckLevel {
    /// All levels in ascending order.
    pub const ALL: [DeckLevel; DECK_COUNT] = [
        DeckLevel(0),
        DeckLevel(1),
        DeckLevel(2),
        DeckLevel(3),
    ];

    /// Create a level, returning `None` if out of range.
    #[must_use]
    pub const fn new(level: u8) -> Option<Self> {
        if (level as usize) < DECK_COUNT {
            Some(Self(level))
        } else {
            None
        }
    }

    /// Get the raw level value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Position of this level in the deck table.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Star marker shown on a revealed card.
    ///
    /// Level 0 gets a single hollow star, every other level one filled
    /// star per level.
    #[must_use]
    pub fn stars(self) -> String {
        if self.0 == 0 {
            "☆".to_string()
        } else {
            "★".repeat(self.index())
        }
    }
}

impl TryFrom<u8> for DeckLevel {
    type Error = DeckError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level).ok_or(DeckError::InvalidLevel(level))
    }
}

impl From<DeckLevel> for u8 {
    fn from(level: DeckLevel) -> Self {
        level.0
    }
}

impl std::fmt::Display for DeckLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
