//! # Terminal shell
//!
//! The presentation layer. Draws screens with ratatui, reads key presses
//! from crossterm, and performs the effects returned by `action::update`.
//!
//! This is the only module that does terminal I/O or owns tokio tasks.
//!
//! ## Event loop
//!
//! One task, one action at a time. Terminal events and expired timers
//! arrive through `tokio::select!`; each is turned into an `Action`,
//! applied with `update()`, and its effects run to completion before the
//! screen is redrawn and the next event is taken. Timers are tokio tasks
//! tagged with the app generation; see `timer` for how stale ones are
//! dropped.

pub mod action;
pub mod app;
pub mod assets;
pub mod audio;
pub mod command;
pub mod config;
pub mod render;
pub mod timer;

pub use action::{update, Action, Effect};
pub use app::{App, Screen};
pub use config::{ConfigError, Overrides, ResolvedConfig, Timings};
pub use timer::{Timer, TimerKind, TimerQueue};

use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use log::{info, warn};
use ratatui::DefaultTerminal;
use std::io;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::time::Instant;

use crate::core::DrawRng;
use crate::machine::DeckMachine;

use self::assets::AssetManifest;
use self::audio::{play_best_effort, AudioSink, Muted, TerminalBell};
use self::command::CommandError;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Overlay state that lives outside the game: the last notice and whether
/// the help popup is open. Both clear on the next key press.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct View {
    pub notice: Option<String>,
    pub show_help: bool,
}

/// Owns the app and performs its effects.
pub struct Runner {
    pub app: App,
    pub view: View,
    timers: TimerQueue,
    audio: Box<dyn AudioSink>,
}

impl Runner {
    pub fn new(app: App, timers: TimerQueue, audio: Box<dyn AudioSink>) -> Self {
        Self {
            app,
            view: View::default(),
            timers,
            audio,
        }
    }

    /// Apply one action and run its effects. Returns true on quit.
    pub fn handle(&mut self, action: Action) -> bool {
        if !matches!(action, Action::TimerFired(_)) {
            self.view = View::default();
        }
        let effects = update(&mut self.app, action);
        let mut quit = false;
        for effect in effects {
            match effect {
                Effect::Schedule { timer, after } => self.timers.schedule(timer, after),
                Effect::CancelTimers => self.timers.cancel_all(),
                Effect::PlayFlip => play_best_effort("flip sound", || self.audio.play_flip()),
                Effect::StartMusic => play_best_effort("music", || self.audio.start_music()),
                Effect::StopMusic => play_best_effort("music", || self.audio.stop_music()),
                Effect::Notice(message) => self.view.notice = Some(message),
                Effect::ShowHelp => self.view.show_help = true,
                Effect::Quit => quit = true,
            }
        }
        quit
    }

    /// Handle one terminal event. Returns true on quit.
    ///
    /// Input that cannot be decoded or mapped is reported on the notice
    /// line and the game carries on; any other read failure is returned.
    pub fn input(&mut self, event: io::Result<Event>) -> io::Result<bool> {
        let event = match event {
            Ok(event) => event,
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                warn!("undecodable terminal input: {}", err);
                self.reject(&CommandError::Undecodable);
                return Ok(false);
            }
            Err(err) => return Err(err),
        };
        match command::parse_event(&event) {
            Ok(Some(action)) => Ok(self.handle(action)),
            Ok(None) => Ok(false),
            Err(err) => {
                self.reject(&err);
                Ok(false)
            }
        }
    }

    /// Report input that did not map to an action.
    pub fn reject(&mut self, err: &CommandError) {
        self.view = View {
            notice: Some(err.to_string()),
            show_help: false,
        };
    }

    pub fn audio(&self) -> &dyn AudioSink {
        self.audio.as_ref()
    }
}

/// The ratatui terminal; raw mode and the alternate screen are restored on
/// drop, including early returns.
struct Tui {
    terminal: DefaultTerminal,
}

impl Tui {
    fn init() -> io::Result<Self> {
        let terminal = ratatui::try_init()?;
        info!("terminal initialized");
        Ok(Self { terminal })
    }

    fn draw(&mut self, runner: &Runner) -> io::Result<()> {
        self.terminal
            .draw(|frame| render::draw(frame, &runner.app, &runner.view))?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        ratatui::restore();
    }
}

/// Run the game until the player quits or terminal input ends.
pub async fn run(config: ResolvedConfig) -> Result<(), ShellError> {
    let started = Instant::now();
    let table = config.deck_table()?;
    let rng = config.seed.map_or_else(DrawRng::from_entropy, DrawRng::new);
    info!("draw seed {}", rng.seed());

    let app = App::new(DeckMachine::new(table, rng), config.timings);
    let (timer_tx, mut timer_rx) = mpsc::unbounded_channel();
    let mut runner = Runner::new(app, TimerQueue::new(timer_tx), Box::new(Muted::default()));

    let mut tui = Tui::init()?;
    tui.draw(&runner)?;

    let manifest = AssetManifest::new(&config.assets);
    let report = manifest.preload().await;
    info!(
        "assets: {} found, {} missing",
        report.found.len(),
        report.missing.len()
    );
    if config.audio_enabled {
        runner.audio = Box::new(TerminalBell::new(
            io::stderr(),
            report.has(&manifest.flip_sound()),
            report.has(&manifest.music()),
        ));
    }

    let elapsed = started.elapsed();
    if runner.handle(Action::AssetsLoaded { elapsed }) {
        return Ok(());
    }

    let mut events = EventStream::new();
    loop {
        tui.draw(&runner)?;
        let quit = tokio::select! {
            event = events.next() => match event {
                Some(event) => runner.input(event)?,
                None => {
                    info!("terminal input closed");
                    break;
                }
            },
            Some(timer) = timer_rx.recv() => runner.handle(Action::TimerFired(timer)),
        };
        if quit {
            break;
        }
    }

    play_best_effort("music", || runner.audio.stop_music());
    info!("shell exiting");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::DeckTable;
    use crate::core::DeckLevel;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::time::Duration;

    fn runner() -> (Runner, mpsc::UnboundedReceiver<Timer>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let app = App::new(
            DeckMachine::new(DeckTable::builtin().unwrap(), DrawRng::new(11)),
            Timings::default(),
        );
        let runner = Runner::new(app, TimerQueue::new(tx), Box::new(Muted::default()));
        (runner, rx)
    }

    fn key(c: char) -> io::Result<Event> {
        Ok(Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)))
    }

    #[tokio::test(start_paused = true)]
    async fn test_runner_drives_timers_through_update() {
        let (mut runner, mut rx) = runner();

        runner.handle(Action::AssetsLoaded {
            elapsed: Duration::from_millis(1000),
        });
        let gate = rx.recv().await.unwrap();
        assert_eq!(gate.kind, TimerKind::LoadingGate);
        runner.handle(Action::TimerFired(gate));
        assert_eq!(runner.app.screen, Screen::Picker);

        runner.input(key('1')).unwrap();
        let transition = rx.recv().await.unwrap();
        runner.handle(Action::TimerFired(transition));
        assert_eq!(runner.app.screen, Screen::Card(DeckLevel::ALL[1]));
    }

    #[tokio::test(start_paused = true)]
    async fn test_back_cancels_pending_transition() {
        let (mut runner, mut rx) = runner();
        runner.app.screen = Screen::Picker;

        runner.handle(Action::SelectDeck(DeckLevel::ALL[0]));
        assert_eq!(runner.timers.pending(), 1);
        runner.handle(Action::Back);
        assert_eq!(runner.timers.pending(), 0);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
        assert_eq!(runner.app.screen, Screen::Picker);
    }

    #[tokio::test]
    async fn test_notices_help_and_music() {
        let (mut runner, _rx) = runner();
        runner.app.screen = Screen::Picker;

        assert!(!runner.handle(Action::ToggleMusic));
        assert!(runner.audio().music_playing());

        runner.handle(Action::Flip);
        assert_eq!(runner.view.notice.as_deref(), Some("There is no card to flip."));

        runner.handle(Action::Help);
        assert!(runner.view.show_help);
        assert_eq!(runner.view.notice, None);

        runner.handle(Action::ToggleMusic);
        assert_eq!(runner.view, View::default());

        assert!(runner.handle(Action::Quit));
    }

    #[tokio::test]
    async fn test_undecodable_input_is_rejected_not_fatal() {
        let (mut runner, _rx) = runner();
        runner.app.screen = Screen::Picker;

        // A lone 0xFF byte decodes lossily to U+FFFD.
        let lossy = String::from_utf8_lossy(&[0xFF]).into_owned();
        let c = lossy.chars().next().unwrap();
        assert!(!runner.input(key(c)).unwrap());
        assert!(runner.view.notice.as_deref().unwrap().starts_with("unknown key"));

        let bad = io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8");
        assert!(!runner.input(Err(bad)).unwrap());
        assert_eq!(
            runner.view.notice,
            Some(CommandError::Undecodable.to_string())
        );
        assert_eq!(runner.app.screen, Screen::Picker);

        // The game is still running and takes the next key.
        assert!(runner.input(key('q')).unwrap());
    }

    #[tokio::test]
    async fn test_other_read_errors_are_fatal() {
        let (mut runner, _rx) = runner();
        let gone = io::Error::new(io::ErrorKind::BrokenPipe, "tty closed");
        assert!(runner.input(Err(gone)).is_err());
    }
}
