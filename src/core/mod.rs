//! Core types: deck levels, errors, and the random source.

pub mod error;
pub mod level;
pub mod rng;

pub use error::{DeckError, Result};
pub use level::{DeckLevel, DECK_COUNT};
pub use rng::DrawRng;
