//! Session state: which deck is open and what has been drawn from it.

use serde::{Deserialize, Serialize};

use crate::core::DeckLevel;

/// A card handed out by a draw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawnCard {
    /// Deck the card came from.
    pub level: DeckLevel,
    /// Position of the card in the deck's original order.
    pub index: usize,
    /// Text on the card.
    pub content: String,
}

/// Where the open deck is in its draw cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Deck open, no card on the table.
    Selected,
    /// A card has been drawn and not yet advanced past.
    Drawn(DrawnCard),
    /// The last card was advanced past; waiting for the reshuffle.
    Exhausted,
}

/// Per-deck state as seen from outside the machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeckPhase {
    Idle,
    Selected,
    Drawn,
    Exhausted,
}

/// Outcome of advancing past a drawn card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// Cards remain; the deck is ready for the next draw.
    Ready,
    /// No cards remain; the caller should reshuffle.
    Exhausted,
}

/// Ephemeral session state. `None` means the deck picker is showing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    open: Option<(DeckLevel, Stage)>,
}

impl Session {
    /// The selected deck, if any.
    #[must_use]
    pub fn selected(&self) -> Option<DeckLevel> {
        self.open.as_ref().map(|(level, _)| *level)
    }

    /// Stage of the selected deck.
    #[must_use]
    pub fn stage(&self) -> Option<&Stage> {
        self.open.as_ref().map(|(_, stage)| stage)
    }

    /// The card currently on the table.
    #[must_use]
    pub fn current_card(&self) -> Option<&DrawnCard> {
        match self.stage() {
            Some(Stage::Drawn(card)) => Some(card),
            _ => None,
        }
    }

    /// Phase of `level`; every deck but the selected one is idle.
    #[must_use]
    pub fn phase(&self, level: DeckLevel) -> DeckPhase {
        match &self.open {
            Some((open, stage)) if *open == level => match stage {
                Stage::Selected => DeckPhase::Selected,
                Stage::Drawn(_) => DeckPhase::Drawn,
                Stage::Exhausted => DeckPhase::Exhausted,
            },
            _ => DeckPhase::Idle,
        }
    }

    pub(crate) fn open(&mut self, level: DeckLevel) {
        self.open = Some((level, Stage::Selected));
    }

    pub(crate) fn set_stage(&mut self, stage: Stage) {
        if let Some((_, current)) = self.open.as_mut() {
            *current = stage;
        }
    }

    pub(crate) fn close(&mut self) {
        self.open = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_tracks_only_the_open_deck() {
        let mut session = Session::default();
        let one = DeckLevel::ALL[1];
        let two = DeckLevel::ALL[2];
        assert_eq!(session.phase(one), DeckPhase::Idle);

        session.open(one);
        assert_eq!(session.selected(), Some(one));
        assert_eq!(session.phase(one), DeckPhase::Selected);
        assert_eq!(session.phase(two), DeckPhase::Idle);

        let card = DrawnCard {
            level: one,
            index: 4,
            content: "q".to_string(),
        };
        session.set_stage(Stage::Drawn(card.clone()));
        assert_eq!(session.phase(one), DeckPhase::Drawn);
        assert_eq!(session.current_card(), Some(&card));

        session.set_stage(Stage::Exhausted);
        assert_eq!(session.phase(one), DeckPhase::Exhausted);
        assert_eq!(session.current_card(), None);

        session.close();
        assert_eq!(session.selected(), None);
        assert_eq!(session.phase(one), DeckPhase::Idle);
    }

    #[test]
    fn test_set_stage_without_open_deck_is_ignored() {
        let mut session = Session::default();
        session.set_stage(Stage::Exhausted);
        assert_eq!(session, Session::default());
    }
}
