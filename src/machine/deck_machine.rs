//! The deck state machine.
//!
//! `DeckMachine` owns the deck table, the draw history, the session and the
//! random source. All game state changes go through its operations; the
//! shell holds the machine and never touches the history directly.
//!
//! Per deck, the machine moves through:
//!
//! ```text
//! Idle --select_deck--> Selected --draw_card--> Drawn
//! Drawn --advance_to_next (cards left)--> Selected
//! Drawn --advance_to_next (none left)--> Exhausted --reshuffle--> Idle
//! any --reset_deck / reset_all / return_to_picker--> Idle
//! ```

use log::{debug, info};

use crate::cards::{Deck, DeckTable};
use crate::core::{DeckError, DeckLevel, DrawRng, Result, DECK_COUNT};

use super::history::DrawHistory;
use super::session::{Advance, DeckPhase, DrawnCard, Session, Stage};

/// Sampling-without-replacement over four decks.
///
/// ## Usage
///
/// ```
/// use depth_cards::cards::DeckTable;
/// use depth_cards::core::{DeckLevel, DrawRng};
/// use depth_cards::machine::{Advance, DeckMachine};
///
/// let mut machine = DeckMachine::new(DeckTable::builtin().unwrap(), DrawRng::new(42));
/// let level = DeckLevel::ALL[0];
///
/// machine.select_deck(level).unwrap();
/// let card = machine.draw_card(level).unwrap();
/// assert_eq!(machine.remaining_count(level), machine.deck_size(level) - 1);
/// assert_eq!(machine.advance_to_next(level).unwrap(), Advance::Ready);
/// # let _ = card;
/// ```
#[derive(Clone, Debug)]
pub struct DeckMachine {
    table: DeckTable,
    history: DrawHistory,
    session: Session,
    /// One independent stream per deck, so draws from one deck never
    /// change what another deck deals.
    rngs: [DrawRng; DECK_COUNT],
}

impl DeckMachine {
    /// Create a machine with every deck freshly shuffled.
    #[must_use]
    pub fn new(table: DeckTable, rng: DrawRng) -> Self {
        let rngs = DeckLevel::ALL.map(|level| rng.for_context(&format!("deck-{}", level.raw())));
        Self {
            table,
            history: DrawHistory::new(),
            session: Session::default(),
            rngs,
        }
    }

    /// The deck table.
    #[must_use]
    pub fn table(&self) -> &DeckTable {
        &self.table
    }

    /// The deck at `level`.
    #[must_use]
    pub fn deck(&self, level: DeckLevel) -> &Deck {
        self.table.deck(level)
    }

    /// The session state.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The card on the table, if any.
    #[must_use]
    pub fn current_card(&self) -> Option<&DrawnCard> {
        self.session.current_card()
    }

    /// Phase of `level` in the per-deck state machine.
    #[must_use]
    pub fn phase(&self, level: DeckLevel) -> DeckPhase {
        self.session.phase(level)
    }

    /// Total number of cards in `level`.
    #[must_use]
    pub fn deck_size(&self, level: DeckLevel) -> usize {
        self.table.deck(level).len()
    }

    /// Cards in `level` not yet drawn since its last reshuffle.
    #[must_use]
    pub fn remaining_count(&self, level: DeckLevel) -> usize {
        self.deck_size(level) - self.history.drawn_count(level)
    }

    /// Whether `level` has at least one undrawn card.
    #[must_use]
    pub fn has_available(&self, level: DeckLevel) -> bool {
        self.remaining_count(level) > 0
    }

    /// Open `level` for drawing.
    ///
    /// Replaces any previous session. Fails with `Exhausted` if every card
    /// of the deck has been drawn.
    pub fn select_deck(&mut self, level: DeckLevel) -> Result<()> {
        if !self.has_available(level) {
            debug!("select deck {} refused: exhausted", level);
            return Err(DeckError::Exhausted(level));
        }
        self.session.open(level);
        debug!("selected deck {} ({} remaining)", level, self.remaining_count(level));
        Ok(())
    }

    /// Draw one undrawn card from `level`, uniformly at random.
    ///
    /// `level` must be the selected deck with no card currently drawn.
    /// A failed draw changes nothing.
    pub fn draw_card(&mut self, level: DeckLevel) -> Result<DrawnCard> {
        if self.session.selected() != Some(level) {
            return Err(DeckError::NotSelected(level));
        }
        let remaining = self.remaining_count(level);
        if remaining == 0 {
            return Err(DeckError::Exhausted(level));
        }
        if self.session.current_card().is_some() {
            return Err(DeckError::AlreadyDrawn(level));
        }

        // Position within the undrawn subset, remapped to the original index.
        let position = self.rngs[level.index()].gen_index(remaining);
        let deck = self.table.deck(level);
        let index = self
            .history
            .undrawn(level, deck.len())
            .nth(position)
            .ok_or(DeckError::Exhausted(level))?;
        let content = deck.card(index).ok_or(DeckError::Exhausted(level))?;
        let card = DrawnCard {
            level,
            index,
            content: content.to_string(),
        };

        self.history.record(level, index);
        self.session.set_stage(Stage::Drawn(card.clone()));
        info!(
            "drew card {} from deck {} ({} remaining)",
            index,
            level,
            remaining - 1
        );
        Ok(card)
    }

    /// Move past the drawn card.
    ///
    /// Exhaustion is detected here, on the advance after the final draw,
    /// never by `draw_card` itself.
    pub fn advance_to_next(&mut self, level: DeckLevel) -> Result<Advance> {
        if self.session.selected() != Some(level) {
            return Err(DeckError::NotSelected(level));
        }
        if self.session.current_card().is_none() {
            return Err(DeckError::NothingDrawn(level));
        }

        if self.has_available(level) {
            self.session.set_stage(Stage::Selected);
            debug!("deck {} ready for next draw", level);
            Ok(Advance::Ready)
        } else {
            self.session.set_stage(Stage::Exhausted);
            info!("deck {} exhausted, reshuffle pending", level);
            Ok(Advance::Exhausted)
        }
    }

    /// Clear the draw history of `level`, making every card drawable again.
    ///
    /// If `level` is the open deck the session returns to Idle.
    pub fn reshuffle(&mut self, level: DeckLevel) {
        self.history.clear(level);
        if self.session.selected() == Some(level) {
            self.session.close();
        }
        info!("reshuffled deck {}", level);
    }

    /// Clear the history of `level` and the session.
    pub fn reset_deck(&mut self, level: DeckLevel) {
        self.history.clear(level);
        self.session.close();
        info!("reset deck {}", level);
    }

    /// Clear the history of every deck and the session.
    pub fn reset_all(&mut self) {
        self.history.clear_all();
        self.session.close();
        info!("reset all decks");
    }

    /// Close the session without touching any history.
    pub fn return_to_picker(&mut self) {
        if let Some(level) = self.session.selected() {
            debug!("leaving deck {}", level);
        }
        self.session.close();
    }
}
