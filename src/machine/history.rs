//! Draw history: which card indices each deck has already given out.
//!
//! Membership only; the order in which cards were drawn is not kept.
//! An empty set means a freshly shuffled deck.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::DeckLevel;

/// Per-deck set of drawn card indices.
#[derive(Clone, Debug, Default)]
pub struct DrawHistory {
    drawn: FxHashMap<DeckLevel, FxHashSet<usize>>,
}

impl DrawHistory {
    /// Create an empty history (all decks freshly shuffled).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `index` as drawn from `level`.
    ///
    /// Returns false if the index was already recorded.
    pub fn record(&mut self, level: DeckLevel, index: usize) -> bool {
        self.drawn.entry(level).or_default().insert(index)
    }

    /// Check whether `index` has been drawn from `level`.
    #[must_use]
    pub fn is_drawn(&self, level: DeckLevel, index: usize) -> bool {
        self.drawn
            .get(&level)
            .is_some_and(|set| set.contains(&index))
    }

    /// Number of cards drawn from `level` since its last reshuffle.
    #[must_use]
    pub fn drawn_count(&self, level: DeckLevel) -> usize {
        self.drawn.get(&level).map_or(0, |set| set.len())
    }

    /// Indices in `0..deck_size` not yet drawn from `level`, ascending.
    pub fn undrawn(&self, level: DeckLevel, deck_size: usize) -> impl Iterator<Item = usize> + '_ {
        let drawn = self.drawn.get(&level);
        (0..deck_size).filter(move |i| !drawn.is_some_and(|set| set.contains(i)))
    }

    /// Forget every draw from `level`.
    pub fn clear(&mut self, level: DeckLevel) {
        self.drawn.remove(&level);
    }

    /// Forget every draw from every deck.
    pub fn clear_all(&mut self) {
        self.drawn.clear();
    }
}
