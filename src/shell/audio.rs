//! Best-effort audio.
//!
//! Sound never feeds back into game state. The shell calls the sink
//! through `play_best_effort`, which logs and swallows every failure.

use log::warn;
use std::io::Write;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("audio asset {0} is not available")]
    Unavailable(String),
    #[error("audio output failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Output for the flip effect and the background loop.
pub trait AudioSink {
    /// Play the short flip sound from the start.
    fn play_flip(&mut self) -> Result<(), AudioError>;

    /// Start the looping background track.
    fn start_music(&mut self) -> Result<(), AudioError>;

    /// Pause the background track.
    fn stop_music(&mut self) -> Result<(), AudioError>;

    /// Whether the background track is playing.
    fn music_playing(&self) -> bool;
}

/// Run an audio call, logging instead of propagating errors.
pub fn play_best_effort<F>(what: &str, call: F)
where
    F: FnOnce() -> Result<(), AudioError>,
{
    if let Err(err) = call() {
        warn!("{} failed: {}", what, err);
    }
}

/// Terminal audio: the flip sound is the terminal bell.
///
/// The terminal has no way to loop a track, so music only tracks its
/// on/off state. Both fail with `Unavailable` when the matching asset was
/// missing at load time, mirroring a browser audio element with no source.
#[derive(Debug)]
pub struct TerminalBell<W: Write> {
    out: W,
    flip_loaded: bool,
    music_loaded: bool,
    music_on: bool,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W, flip_loaded: bool, music_loaded: bool) -> Self {
        Self {
            out,
            flip_loaded,
            music_loaded,
            music_on: false,
        }
    }
}

impl<W: Write> AudioSink for TerminalBell<W> {
    fn play_flip(&mut self) -> Result<(), AudioError> {
        if !self.flip_loaded {
            return Err(AudioError::Unavailable("flip sound".to_string()));
        }
        self.out.write_all(b"\x07")?;
        self.out.flush()?;
        Ok(())
    }

    fn start_music(&mut self) -> Result<(), AudioError> {
        if !self.music_loaded {
            return Err(AudioError::Unavailable("music".to_string()));
        }
        self.music_on = true;
        Ok(())
    }

    fn stop_music(&mut self) -> Result<(), AudioError> {
        self.music_on = false;
        Ok(())
    }

    fn music_playing(&self) -> bool {
        self.music_on
    }
}

/// Sink used with `--mute`: accepts everything, plays nothing.
#[derive(Debug, Default)]
pub struct Muted {
    music_on: bool,
}

impl AudioSink for Muted {
    fn play_flip(&mut self) -> Result<(), AudioError> {
        Ok(())
    }

    fn start_music(&mut self) -> Result<(), AudioError> {
        self.music_on = true;
        Ok(())
    }

    fn stop_music(&mut self) -> Result<(), AudioError> {
        self.music_on = false;
        Ok(())
    }

    fn music_playing(&self) -> bool {
        self.music_on
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bell_writes_bel_byte() {
        let mut bell = TerminalBell::new(Vec::new(), true, true);
        bell.play_flip().unwrap();
        bell.play_flip().unwrap();
        assert_eq!(bell.out, b"\x07\x07");
    }

    #[test]
    fn test_missing_assets_report_unavailable() {
        let mut bell = TerminalBell::new(Vec::new(), false, false);
        assert!(matches!(bell.play_flip(), Err(AudioError::Unavailable(_))));
        assert!(matches!(bell.start_music(), Err(AudioError::Unavailable(_))));
        assert!(!bell.music_playing());
        assert!(bell.out.is_empty());
    }

    #[test]
    fn test_music_toggle_state() {
        let mut bell = TerminalBell::new(Vec::new(), true, true);
        bell.start_music().unwrap();
        assert!(bell.music_playing());
        bell.stop_music().unwrap();
        assert!(!bell.music_playing());
    }

    #[test]
    fn test_best_effort_swallows_errors() {
        let mut bell = TerminalBell::new(Vec::new(), false, false);
        play_best_effort("flip sound", || bell.play_flip());

        let mut called = false;
        play_best_effort("noop", || {
            called = true;
            Ok(())
        });
        assert!(called);
    }
}
