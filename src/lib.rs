//! # depth-cards
//!
//! A four-deck conversation card game. Pick a deck, draw a random card you
//! have not seen yet, flip it, talk, draw again. When a deck runs out it is
//! reshuffled after a short shuffle screen.
//!
//! ## Design Principles
//!
//! 1. **Explicit state**: All game state lives in one `DeckMachine`, owned
//!    by the shell and changed only through its operations.
//!
//! 2. **Sampling without replacement**: A draw picks a position in the
//!    undrawn subset and maps it back to the card's original index, so a
//!    drawn card can never come up again before a reshuffle.
//!
//! 3. **One-way data flow**: input -> `Action` -> `update()` -> new state
//!    -> render. The machine knows nothing about the shell.
//!
//! ## Modules
//!
//! - `core`: Deck levels, errors, RNG
//! - `cards`: Deck definitions and the built-in deck table
//! - `machine`: Draw history, session, and the deck state machine
//! - `shell`: Terminal front end, timers, audio, configuration

pub mod core;
pub mod cards;
pub mod machine;
pub mod shell;

// Re-export commonly used types
pub use crate::core::{DeckError, DeckLevel, DrawRng, DECK_COUNT};

pub use crate::cards::{Deck, DeckSpec, DeckTable};

pub use crate::machine::{Advance, DeckMachine, DeckPhase, DrawHistory, DrawnCard, Session, Stage};

pub use crate::shell::{Action, App, Effect, ResolvedConfig, Screen, Timer, TimerKind};
