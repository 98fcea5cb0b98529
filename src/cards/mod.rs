//! Card data: the four decks and their contents.
//!
//! ## Key Types
//!
//! - `Deck`: Label and ordered card contents of one level
//! - `DeckTable`: The four decks, indexed by `DeckLevel`
//! - `DeckSpec`: One deck as it appears in a JSON deck file
//!
//! Decks are reference data. They are built once at startup, either from
//! the built-in table or from a deck file, and never mutated.

pub mod builtin;
pub mod deck;

pub use deck::{Deck, DeckSpec, DeckTable};
