//! Shell state: the current screen plus the deck machine it drives.

use crate::core::DeckLevel;
use crate::machine::{DeckMachine, DrawnCard};

use super::config::Timings;

/// Which screen is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    /// Loading cover, until the loading gate opens.
    Loading,
    /// Four decks to pick from.
    Picker,
    /// Card flying in from the chosen deck.
    Transition(DeckLevel),
    /// The single flippable card.
    Card(DeckLevel),
    /// Deck exhausted, shuffle animation before refilling.
    Shuffling(DeckLevel),
}

/// Everything the shell renders from.
#[derive(Debug)]
pub struct App {
    pub machine: DeckMachine,
    pub screen: Screen,
    /// Whether the card on the card screen shows its text side.
    pub face_up: bool,
    pub music_on: bool,
    pub timings: Timings,
    /// Bumped on every navigation; timers from older generations are stale.
    pub generation: u64,
    /// Assets finished loading; the gate only waits for its minimum now.
    pub assets_loaded: bool,
}

impl App {
    #[must_use]
    pub fn new(machine: DeckMachine, timings: Timings) -> Self {
        Self {
            machine,
            screen: Screen::Loading,
            face_up: false,
            music_on: false,
            timings,
            generation: 0,
            assets_loaded: false,
        }
    }

    /// The card on the table, if one has been drawn on this screen.
    #[must_use]
    pub fn drawn_card(&self) -> Option<&DrawnCard> {
        self.machine.current_card()
    }

    /// Start a new navigation epoch, invalidating pending timers.
    pub(crate) fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }
}
