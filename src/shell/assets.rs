//! Media assets the shell preloads behind the loading cover.
//!
//! A missing asset is logged and reported, never fatal: the loading gate
//! still opens and the matching audio or image falls back to nothing.

use log::{debug, warn};
use std::path::{Path, PathBuf};

use crate::core::DeckLevel;

pub const COVER_IMAGE: &str = "cover.jpg";
pub const FLIP_SOUND: &str = "poker.mp3";
pub const MUSIC_LOOP: &str = "music.mp3";

/// Image shown on the back of a card from `level`.
#[must_use]
pub fn deck_back_image(level: DeckLevel) -> String {
    format!("level{}.png", level.raw())
}

/// Paths of every asset, relative to one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetManifest {
    root: PathBuf,
}

/// Outcome of a preload pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub found: Vec<PathBuf>,
    pub missing: Vec<PathBuf>,
}

impl LoadReport {
    /// Whether `path` was found.
    #[must_use]
    pub fn has(&self, path: &Path) -> bool {
        self.found.iter().any(|p| p == path)
    }
}

impl AssetManifest {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn cover(&self) -> PathBuf {
        self.root.join(COVER_IMAGE)
    }

    #[must_use]
    pub fn deck_back(&self, level: DeckLevel) -> PathBuf {
        self.root.join(deck_back_image(level))
    }

    #[must_use]
    pub fn flip_sound(&self) -> PathBuf {
        self.root.join(FLIP_SOUND)
    }

    #[must_use]
    pub fn music(&self) -> PathBuf {
        self.root.join(MUSIC_LOOP)
    }

    /// Every asset path: cover, four deck backs, flip sound, music.
    #[must_use]
    pub fn all(&self) -> Vec<PathBuf> {
        let mut paths = vec![self.cover()];
        paths.extend(DeckLevel::ALL.iter().map(|&level| self.deck_back(level)));
        paths.push(self.flip_sound());
        paths.push(self.music());
        paths
    }

    /// Check that every asset exists and is a readable file.
    pub async fn preload(&self) -> LoadReport {
        let mut report = LoadReport::default();
        for path in self.all() {
            match tokio::fs::metadata(&path).await {
                Ok(meta) if meta.is_file() => {
                    debug!("asset ready: {}", path.display());
                    report.found.push(path);
                }
                Ok(_) => {
                    warn!("asset {} is not a file", path.display());
                    report.missing.push(path);
                }
                Err(err) => {
                    warn!("asset {} unavailable: {}", path.display(), err);
                    report.missing.push(path);
                }
            }
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_paths() {
        let manifest = AssetManifest::new("media");
        assert_eq!(manifest.cover(), PathBuf::from("media/cover.jpg"));
        assert_eq!(
            manifest.deck_back(DeckLevel::ALL[2]),
            PathBuf::from("media/level2.png")
        );
        assert_eq!(manifest.all().len(), 7);
    }

    #[tokio::test]
    async fn test_preload_reports_missing_assets() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(FLIP_SOUND), b"mp3").unwrap();
        std::fs::write(dir.path().join("level0.png"), b"png").unwrap();
        std::fs::create_dir(dir.path().join(MUSIC_LOOP)).unwrap();

        let manifest = AssetManifest::new(dir.path());
        let report = manifest.preload().await;

        assert_eq!(report.found.len(), 2);
        assert_eq!(report.missing.len(), 5);
        assert!(report.has(&manifest.flip_sound()));
        assert!(!report.has(&manifest.music()));
    }
}
