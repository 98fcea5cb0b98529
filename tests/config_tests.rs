//! Config and deck file loading tests.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use depth_cards::core::{DeckError, DeckLevel};
use depth_cards::shell::config::{load_deck_file, ConfigError, ConfigFile, Overrides, ResolvedConfig};

const DECKS_JSON: &str = r#"[
    {"label": "Level 0 - Hello", "cards": ["a", "b"]},
    {"label": "Level 1 - Closer", "cards": ["c"]},
    {"label": "Level 2 - Deeper", "cards": ["d", "e", "f"]},
    {"label": "Level 3 - Deepest", "cards": ["g"]}
]"#;

/// A config file pointing at a deck file loads that deck file.
#[test]
fn test_config_file_selects_deck_file() {
    let dir = tempfile::tempdir().unwrap();
    let decks = dir.path().join("decks.json");
    fs::write(&decks, DECKS_JSON).unwrap();
    let config_path = dir.path().join("game.toml");
    fs::write(
        &config_path,
        format!(
            "seed = 12\ndecks = {:?}\n[timing]\ntransition_ms = 10\n",
            decks.display().to_string()
        ),
    )
    .unwrap();

    let config = ResolvedConfig::resolve(ConfigFile::load(&config_path).unwrap(), Overrides::default());
    assert_eq!(config.seed, Some(12));
    assert_eq!(config.timings.transition, Duration::from_millis(10));

    let table = config.deck_table().unwrap();
    assert_eq!(table.deck(DeckLevel::ALL[2]).len(), 3);
    assert_eq!(table.deck(DeckLevel::ALL[0]).label(), "Level 0 - Hello");
}

/// Without a deck file the built-in table is used.
#[test]
fn test_builtin_decks_by_default() {
    let table = ResolvedConfig::default().deck_table().unwrap();
    assert!(table.iter().all(|deck| deck.len() >= 5));
}

/// Missing files surface as I/O errors naming the path.
#[test]
fn test_missing_files() {
    let path = PathBuf::from("/definitely/not/here.toml");
    let err = ConfigFile::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("here.toml"));

    let err = load_deck_file(&PathBuf::from("/definitely/not/decks.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

/// Malformed JSON and invalid deck tables are both rejected.
#[test]
fn test_bad_deck_files() {
    let dir = tempfile::tempdir().unwrap();

    let garbled = dir.path().join("garbled.json");
    fs::write(&garbled, "[{\"label\": ").unwrap();
    assert!(matches!(load_deck_file(&garbled), Err(ConfigError::Json { .. })));

    let three = dir.path().join("three.json");
    fs::write(
        &three,
        r#"[{"label": "a", "cards": ["x"]}, {"label": "b", "cards": ["y"]}, {"label": "c", "cards": ["z"]}]"#,
    )
    .unwrap();
    match load_deck_file(&three) {
        Err(ConfigError::Decks { source, .. }) => assert_eq!(source, DeckError::WrongDeckCount(3)),
        other => panic!("expected deck count error, got {:?}", other),
    }

    let empty = dir.path().join("empty.json");
    fs::write(
        &empty,
        r#"[{"label": "a", "cards": ["x"]}, {"label": "b", "cards": []}, {"label": "c", "cards": ["z"]}, {"label": "d", "cards": ["w"]}]"#,
    )
    .unwrap();
    match load_deck_file(&empty) {
        Err(ConfigError::Decks { source, .. }) => {
            assert_eq!(source, DeckError::EmptyDeck(DeckLevel::ALL[1]))
        }
        other => panic!("expected empty deck error, got {:?}", other),
    }
}
