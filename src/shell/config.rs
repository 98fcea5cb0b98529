//! # Configuration
//!
//! Settings resolve in order: defaults -> config file -> CLI flags.
//! The config file is TOML with every field optional, so a file only needs
//! the values it changes.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::cards::{DeckSpec, DeckTable};
use crate::core::DeckError;

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TRANSITION_MS: u64 = 1200;
pub const DEFAULT_RESHUFFLE_MS: u64 = 1500;
pub const DEFAULT_LOADING_GATE_MS: u64 = 3000;
pub const DEFAULT_ASSETS_DIR: &str = "assets";

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid deck file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid deck file {path}: {source}")]
    Decks {
        path: PathBuf,
        #[source]
        source: DeckError,
    },
    #[error("built-in decks are invalid: {0}")]
    Builtin(#[from] DeckError),
}

// ============================================================================
// Config file (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ConfigFile {
    pub seed: Option<u64>,
    pub decks: Option<PathBuf>,
    pub assets: Option<PathBuf>,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub audio: AudioConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TimingConfig {
    pub transition_ms: Option<u64>,
    pub reshuffle_ms: Option<u64>,
    pub loading_gate_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AudioConfig {
    pub enabled: Option<bool>,
}

impl ConfigFile {
    /// Parse a config file's contents.
    pub fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read and parse the config file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file = Self::parse(&text, path)?;
        info!("loaded config from {}", path.display());
        Ok(file)
    }
}

/// Values given on the command line. `None` leaves the file or default.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub seed: Option<u64>,
    pub decks: Option<PathBuf>,
    pub assets: Option<PathBuf>,
    pub mute: bool,
}

// ============================================================================
// Resolved config (concrete values, no Options)
// ============================================================================

/// Fixed delays driving the screen transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub transition: Duration,
    pub reshuffle: Duration,
    pub loading_gate: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            transition: Duration::from_millis(DEFAULT_TRANSITION_MS),
            reshuffle: Duration::from_millis(DEFAULT_RESHUFFLE_MS),
            loading_gate: Duration::from_millis(DEFAULT_LOADING_GATE_MS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// `None` seeds the draw RNG from entropy.
    pub seed: Option<u64>,
    /// `None` uses the built-in decks.
    pub decks: Option<PathBuf>,
    pub assets: PathBuf,
    pub timings: Timings,
    pub audio_enabled: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self::resolve(ConfigFile::default(), Overrides::default())
    }
}

impl ResolvedConfig {
    /// Merge defaults, the config file and command-line overrides.
    #[must_use]
    pub fn resolve(file: ConfigFile, overrides: Overrides) -> Self {
        let ms = |value: Option<u64>, default: u64| Duration::from_millis(value.unwrap_or(default));
        let resolved = Self {
            seed: overrides.seed.or(file.seed),
            decks: overrides.decks.or(file.decks),
            assets: overrides
                .assets
                .or(file.assets)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR)),
            timings: Timings {
                transition: ms(file.timing.transition_ms, DEFAULT_TRANSITION_MS),
                reshuffle: ms(file.timing.reshuffle_ms, DEFAULT_RESHUFFLE_MS),
                loading_gate: ms(file.timing.loading_gate_ms, DEFAULT_LOADING_GATE_MS),
            },
            audio_enabled: !overrides.mute && file.audio.enabled.unwrap_or(true),
        };
        debug!("resolved config: {:?}", resolved);
        resolved
    }

    /// Load the deck table named by the config, or the built-in one.
    pub fn deck_table(&self) -> Result<DeckTable, ConfigError> {
        match &self.decks {
            Some(path) => load_deck_file(path),
            None => Ok(DeckTable::builtin()?),
        }
    }
}

/// Read a JSON deck file: an array of four `{label, cards}` objects.
pub fn load_deck_file(path: &Path) -> Result<DeckTable, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let specs: Vec<DeckSpec> = serde_json::from_str(&text).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    let table = DeckTable::from_specs(specs).map_err(|source| ConfigError::Decks {
        path: path.to_path_buf(),
        source,
    })?;
    info!("loaded decks from {}", path.display());
    Ok(table)
}
