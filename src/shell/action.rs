//! # Actions
//!
//! Everything that can happen in the shell becomes an `Action`: a typed
//! command, an expired timer, the asset preload finishing.
//!
//! `update()` applies an action to the `App` and returns the side effects
//! the runner must perform (timers, sound, notices). No I/O happens here,
//! which keeps every screen transition testable without a terminal.
//!
//! ```text
//! App + Action  ->  update()  ->  App' + Vec<Effect>
//! ```

use log::{debug, warn};
use std::time::Duration;

use crate::core::{DeckError, DeckLevel};
use crate::machine::Advance;

use super::app::{App, Screen};
use super::timer::{Timer, TimerKind};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Asset preload finished `elapsed` after startup.
    AssetsLoaded { elapsed: Duration },
    SelectDeck(DeckLevel),
    /// Turn the card over; the first turn to face-up draws it.
    Flip,
    DrawNext,
    /// Back to the deck picker.
    Back,
    ResetAll,
    ToggleMusic,
    Help,
    Quit,
    TimerFired(Timer),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Schedule { timer: Timer, after: Duration },
    CancelTimers,
    PlayFlip,
    StartMusic,
    StopMusic,
    /// Blocking message for the player.
    Notice(String),
    ShowHelp,
    Quit,
}

/// Apply `action` to `app`, returning the effects to run.
pub fn update(app: &mut App, action: Action) -> Vec<Effect> {
    debug!("{:?} on {:?}", action, app.screen);
    match action {
        Action::Quit => vec![Effect::Quit],
        Action::Help => vec![Effect::ShowHelp],
        Action::TimerFired(timer) => timer_fired(app, timer),
        Action::AssetsLoaded { elapsed } => assets_loaded(app, elapsed),
        _ if app.screen == Screen::Loading => vec![Effect::Notice("Still loading...".to_string())],
        Action::ToggleMusic => toggle_music(app),
        Action::SelectDeck(level) => select_deck(app, level),
        Action::Flip => flip(app),
        Action::DrawNext => draw_next(app),
        Action::Back => back(app),
        Action::ResetAll => reset_all(app),
    }
}

fn assets_loaded(app: &mut App, elapsed: Duration) -> Vec<Effect> {
    if app.screen != Screen::Loading || app.assets_loaded {
        return Vec::new();
    }
    app.assets_loaded = true;
    let after = app.timings.loading_gate.saturating_sub(elapsed);
    vec![schedule(app, TimerKind::LoadingGate, after)]
}

fn timer_fired(app: &mut App, timer: Timer) -> Vec<Effect> {
    if timer.generation != app.generation {
        debug!(
            "dropping stale {:?} (generation {} != {})",
            timer.kind, timer.generation, app.generation
        );
        return Vec::new();
    }

    match (timer.kind, app.screen) {
        (TimerKind::LoadingGate, Screen::Loading) => {
            app.screen = Screen::Picker;
            Vec::new()
        }
        (TimerKind::Transition, Screen::Transition(level)) => {
            app.screen = Screen::Card(level);
            app.face_up = false;
            Vec::new()
        }
        (TimerKind::Reshuffle, Screen::Shuffling(level)) => {
            app.machine.reshuffle(level);
            app.face_up = false;
            app.next_generation();
            match app.machine.select_deck(level) {
                Ok(()) => {
                    app.screen = Screen::Card(level);
                    Vec::new()
                }
                Err(err) => {
                    warn!("reopening deck {} after reshuffle failed: {}", level, err);
                    app.screen = Screen::Picker;
                    vec![deck_notice(app, &err)]
                }
            }
        }
        (kind, screen) => {
            debug!("{:?} timer has nothing to do on {:?}", kind, screen);
            Vec::new()
        }
    }
}

fn select_deck(app: &mut App, level: DeckLevel) -> Vec<Effect> {
    if app.screen != Screen::Picker {
        return vec![Effect::Notice("Go back to the deck picker first.".to_string())];
    }
    if let Err(err) = app.machine.select_deck(level) {
        return vec![deck_notice(app, &err)];
    }
    app.next_generation();
    app.face_up = false;
    app.screen = Screen::Transition(level);
    vec![schedule(app, TimerKind::Transition, app.timings.transition)]
}

fn flip(app: &mut App) -> Vec<Effect> {
    let Screen::Card(level) = app.screen else {
        return vec![Effect::Notice("There is no card to flip.".to_string())];
    };

    let mut effects = vec![Effect::PlayFlip];
    if !app.face_up && app.drawn_card().is_none() {
        if let Err(err) = app.machine.draw_card(level) {
            effects.push(deck_notice(app, &err));
            return effects;
        }
    }
    app.face_up = !app.face_up;
    effects
}

fn draw_next(app: &mut App) -> Vec<Effect> {
    let Screen::Card(level) = app.screen else {
        return vec![Effect::Notice("There is no card on the table.".to_string())];
    };
    if !app.face_up || app.drawn_card().is_none() {
        return vec![Effect::Notice("Flip the card first.".to_string())];
    }

    match app.machine.advance_to_next(level) {
        Ok(Advance::Ready) => {
            app.face_up = false;
            Vec::new()
        }
        Ok(Advance::Exhausted) => {
            app.next_generation();
            app.screen = Screen::Shuffling(level);
            vec![schedule(app, TimerKind::Reshuffle, app.timings.reshuffle)]
        }
        Err(err) => vec![deck_notice(app, &err)],
    }
}

fn back(app: &mut App) -> Vec<Effect> {
    match app.screen {
        Screen::Transition(_) | Screen::Card(_) => {}
        Screen::Shuffling(level) => {
            // Leaving mid-shuffle finishes the refill now instead of
            // stranding the deck exhausted.
            app.machine.reshuffle(level);
        }
        Screen::Picker | Screen::Loading => return Vec::new(),
    }
    app.machine.return_to_picker();
    app.next_generation();
    app.face_up = false;
    app.screen = Screen::Picker;
    vec![Effect::CancelTimers]
}

fn reset_all(app: &mut App) -> Vec<Effect> {
    if app.screen != Screen::Picker {
        return vec![Effect::Notice("Decks can only be reset from the deck picker.".to_string())];
    }
    app.machine.reset_all();
    app.next_generation();
    app.face_up = false;
    vec![
        Effect::CancelTimers,
        Effect::Notice("All decks reshuffled.".to_string()),
    ]
}

fn toggle_music(app: &mut App) -> Vec<Effect> {
    app.music_on = !app.music_on;
    if app.music_on {
        vec![Effect::StartMusic]
    } else {
        vec![Effect::StopMusic]
    }
}

fn schedule(app: &App, kind: TimerKind, after: Duration) -> Effect {
    Effect::Schedule {
        timer: Timer {
            kind,
            generation: app.generation,
        },
        after,
    }
}

/// Player-facing wording for a refused deck operation, naming the deck by
/// its label.
fn deck_notice(app: &App, err: &DeckError) -> Effect {
    let label = |level: &DeckLevel| app.machine.deck(*level).label().to_string();
    let message = match err {
        DeckError::Exhausted(level) => format!("Every card in \"{}\" has been drawn!", label(level)),
        DeckError::NotSelected(level) => format!("\"{}\" is not the open deck.", label(level)),
        DeckError::AlreadyDrawn(level) => {
            format!("A card from \"{}\" is already on the table.", label(level))
        }
        DeckError::NothingDrawn(level) => {
            format!("No card from \"{}\" is on the table.", label(level))
        }
        DeckError::EmptyDeck(level) => format!("\"{}\" has no cards.", label(level)),
        DeckError::InvalidLevel(_) | DeckError::WrongDeckCount(_) => err.to_string(),
    };
    Effect::Notice(message)
}
