//! Typed commands: one terminal key press becomes one `Action`.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use thiserror::Error;

use crate::core::DeckLevel;

use super::action::Action;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown key \"{0}\" (press h for help)")]
    Unknown(String),
    #[error("there is no deck {0}; press 0, 1, 2 or 3")]
    NoSuchDeck(String),
    #[error("input could not be decoded (press h for help)")]
    Undecodable,
}

pub const HELP: &str = "\
0-3        pick a deck
f, space   flip the card (the first flip draws it)
n, right   draw the next card
b, esc     return to the deck picker
r          reshuffle every deck (from the picker)
m          toggle background music
h, ?       show this help
q, ctrl-c  leave the game";

/// Map one terminal event to an action.
///
/// Events with no meaning in the game (resizes, focus, mouse, releases,
/// unbound non-character keys) yield `None`. Unbound characters are
/// reported so the player sees why nothing happened.
pub fn parse_event(event: &Event) -> Result<Option<Action>, CommandError> {
    match event {
        Event::Key(key) => parse_key(key),
        _ => Ok(None),
    }
}

/// Map one key press to an action.
pub fn parse_key(key: &KeyEvent) -> Result<Option<Action>, CommandError> {
    if key.kind == KeyEventKind::Release {
        return Ok(None);
    }
    let action = match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Action::Quit,
        (_, KeyCode::Esc | KeyCode::Backspace) => Action::Back,
        (_, KeyCode::Right) => Action::DrawNext,
        (_, KeyCode::Char(c)) => return parse_char(c).map(Some),
        _ => return Ok(None),
    };
    Ok(Some(action))
}

fn parse_char(c: char) -> Result<Action, CommandError> {
    let action = match c.to_ascii_lowercase() {
        'f' | ' ' => Action::Flip,
        'n' => Action::DrawNext,
        'b' => Action::Back,
        'r' => Action::ResetAll,
        'm' => Action::ToggleMusic,
        'h' | '?' => Action::Help,
        'q' => Action::Quit,
        digit if digit.is_ascii_digit() => {
            let level = digit
                .to_digit(10)
                .and_then(|d| u8::try_from(d).ok())
                .and_then(DeckLevel::new)
                .ok_or_else(|| CommandError::NoSuchDeck(digit.to_string()))?;
            Action::SelectDeck(level)
        }
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(action)
}
