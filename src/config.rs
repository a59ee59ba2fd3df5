//! Configuration for the flashcards app, read from `flashcards.toml`.

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "flashcards.toml";
pub const VOCAB_FILE: &str = "vocab.csv";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default = "default_vocab_file")]
    pub vocab_file: PathBuf,
    #[serde(default = "default_true")]
    pub shuffle: bool,
    #[serde(default)]
    pub window: WindowConfig,
}

fn default_vocab_file() -> PathBuf {
    PathBuf::from(VOCAB_FILE)
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vocab_file: default_vocab_file(),
            shuffle: true,
            window: WindowConfig::default(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Missing file means defaults; a broken one is logged and ignored.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => {
                log::info!("Using config from {}", path.display());
                config
            }
            Err(ConfigError::IOFailed(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Self::default()
            }
            Err(e) => {
                log::warn!("{} ({}), using defaults", e, path.display());
                Self::default()
            }
        }
    }

    /// Vocab file with relative paths resolved against `base`.
    pub fn vocab_path(&self, base: &Path) -> PathBuf {
        resolve(&self.vocab_file, base)
    }

    /// File name shown to the user in guidance text and dialogs.
    pub fn vocab_name(&self) -> String {
        self.vocab_file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| VOCAB_FILE.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
}

fn default_title() -> String {
    "Galaxy Vocab Flashcards".to_string()
}
fn default_width() -> f32 {
    760.0
}
fn default_height() -> f32 {
    520.0
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_width(),
            height: default_height(),
        }
    }
}

/// Directory holding the running executable, or the working directory if
/// it can't be determined.
pub fn app_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn resolve(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.vocab_file, PathBuf::from("vocab.csv"));
        assert!(config.shuffle);
        assert_eq!(config.window.width, 760.0);
        assert_eq!(config.window.height, 520.0);
        assert_eq!(config.vocab_name(), "vocab.csv");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
vocab_file = "words/gre.csv"

[window]
title = "GRE"
"#,
        )
        .unwrap();

        assert_eq!(config.vocab_file, PathBuf::from("words/gre.csv"));
        assert!(config.shuffle);
        assert_eq!(config.window.title, "GRE");
        assert_eq!(config.window.height, 520.0);
        assert_eq!(config.vocab_name(), "gre.csv");
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_or_default(&dir.path().join(CONFIG_FILE));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_broken_file_is_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "shuffle = \"maybe\"").unwrap();

        assert!(matches!(Config::load(&path), Err(ConfigError::ParseFailed(_))));
        assert_eq!(Config::load_or_default(&path), Config::default());
    }

    #[test]
    fn test_vocab_path_resolution() {
        let base = Path::new("/opt/flashcards");
        let config = Config::default();
        assert_eq!(config.vocab_path(base), PathBuf::from("/opt/flashcards/vocab.csv"));

        let config = Config {
            vocab_file: PathBuf::from("/data/words.csv"),
            ..Config::default()
        };
        assert_eq!(config.vocab_path(base), PathBuf::from("/data/words.csv"));
    }
}
