//! Deck definitions - static card data.
//!
//! A `Deck` holds the immutable label and ordered card contents of one
//! level. Which cards have been drawn is stored separately in
//! `DrawHistory`; a card has no identity beyond its index in `contents`.

use serde::{Deserialize, Serialize};

use crate::core::{DeckError, DeckLevel, Result, DECK_COUNT};

/// One deck of conversation cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    level: DeckLevel,

    /// Display label, e.g. "Level 1 - Getting Closer".
    label: String,

    /// Card contents in their original order.
    contents: Vec<String>,
}

impl Deck {
    /// Create a new deck.
    ///
    /// Fails with `EmptyDeck` if `contents` is empty.
    pub fn new(
        level: DeckLevel,
        label: impl Into<String>,
        contents: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self> {
        let contents: Vec<String> = contents.into_iter().map(Into::into).collect();
        if contents.is_empty() {
            return Err(DeckError::EmptyDeck(level));
        }
        Ok(Self {
            level,
            label: label.into(),
            contents,
        })
    }

    /// Level this deck is keyed by.
    #[must_use]
    pub fn level(&self) -> DeckLevel {
        self.level
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Card contents in their original order.
    #[must_use]
    pub fn contents(&self) -> &[String] {
        &self.contents
    }

    /// Number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    /// Always false for a constructed deck.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Card content at `index`.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<&str> {
        self.contents.get(index).map(String::as_str)
    }

    /// Label split into display lines on `" - "`.
    pub fn label_lines(&self) -> impl Iterator<Item = &str> {
        self.label.split(" - ")
    }
}

/// Serialized form of one deck in a deck file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeckSpec {
    pub label: String,
    pub cards: Vec<String>,
}

/// The four decks of the game, indexed by level.
///
/// Built once at startup and read-only afterwards.
///
/// ## Example
///
/// ```
/// use depth_cards::cards::{DeckSpec, DeckTable};
/// use depth_cards::core::DeckLevel;
///
/// let specs = (0..4)
///     .map(|i| DeckSpec { label: format!("Level {i}"), cards: vec!["Hi?".into()] })
///     .collect();
/// let table = DeckTable::from_specs(specs).unwrap();
/// assert_eq!(table.deck(DeckLevel::ALL[2]).label(), "Level 2");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeckTable {
    decks: [Deck; DECK_COUNT],
}

impl DeckTable {
    /// Build a table from four decks.
    ///
    /// Each deck's `level` is overwritten with its position so the table
    /// and the decks can never disagree.
    #[must_use]
    pub fn new(mut decks: [Deck; DECK_COUNT]) -> Self {
        for (deck, level) in decks.iter_mut().zip(DeckLevel::ALL) {
            deck.level = level;
        }
        Self { decks }
    }

    /// Build a table from deck file entries, index = level.
    pub fn from_specs(specs: Vec<DeckSpec>) -> Result<Self> {
        let count = specs.len();
        if count != DECK_COUNT {
            return Err(DeckError::WrongDeckCount(count));
        }
        let decks: Vec<Deck> = specs
            .into_iter()
            .zip(DeckLevel::ALL)
            .map(|(spec, level)| Deck::new(level, spec.label, spec.cards))
            .collect::<Result<_>>()?;
        let decks: [Deck; DECK_COUNT] = decks
            .try_into()
            .map_err(|_| DeckError::WrongDeckCount(count))?;
        Ok(Self::new(decks))
    }

    /// The built-in four decks, used when no deck file is given.
    pub fn builtin() -> Result<Self> {
        super::builtin::table()
    }

    /// The deck at `level`.
    #[must_use]
    pub fn deck(&self, level: DeckLevel) -> &Deck {
        &self.decks[level.index()]
    }

    /// Iterate over decks in level order.
    pub fn iter(&self) -> impl Iterator<Item = &Deck> {
        self.decks.iter()
    }
}
