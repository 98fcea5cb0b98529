//! Deck state machine: draw history, session, and the draw operations.
//!
//! ## Key Types
//!
//! - `DeckMachine`: Owns all game state and exposes the operations
//! - `DrawHistory`: Per-deck set of drawn indices
//! - `Session`: Selected deck and its `Stage`
//! - `DrawnCard`: Result of a draw (level, original index, content)

pub mod deck_machine;
pub mod history;
pub mod session;

pub use deck_machine::DeckMachine;
pub use history::DrawHistory;
pub use session::{Advance, DeckPhase, DrawnCard, Session, Stage};
