//! Errors raised by the deck state machine and deck table.

use thiserror::Error;

use super::level::DeckLevel;

/// Deck state machine error.
///
/// `Exhausted` is the only user-recoverable case: the player picks another
/// deck or waits for the reshuffle. The rest signal a caller that skipped a
/// state transition or a malformed deck table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("no cards left in deck {0}")]
    Exhausted(DeckLevel),
    #[error("deck level {0} is out of range (expected 0-3)")]
    InvalidLevel(u8),
    #[error("deck {0} is not the selected deck")]
    NotSelected(DeckLevel),
    #[error("a card from deck {0} is already drawn")]
    AlreadyDrawn(DeckLevel),
    #[error("no card from deck {0} is currently drawn")]
    NothingDrawn(DeckLevel),
    #[error("deck {0} has no cards")]
    EmptyDeck(DeckLevel),
    #[error("expected 4 decks, found {0}")]
    WrongDeckCount(usize),
}

impl DeckError {
    /// Whether the player can recover from this error by choosing again.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        matches!(self, DeckError::Exhausted(_))
    }
}

pub type Result<T> = std::result::Result<T, DeckError>;
