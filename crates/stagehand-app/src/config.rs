//! Application configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Config file picked up from the working directory when no path is given.
pub const CONFIG_FILE: &str = "stagehand.json";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Window and content locations.
///
/// Missing keys in a config file fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Directory of scene descriptor files.
    pub scenes_dir: PathBuf,
    pub style_file: PathBuf,
    /// Directory the editor saves maps into.
    pub maps_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "GameEngine2".to_string(),
            width: 1000,
            height: 800,
            scenes_dir: PathBuf::from("scenes"),
            style_file: PathBuf::from("Style.txt"),
            maps_dir: PathBuf::from("maps"),
        }
    }
}

impl AppConfig {
    /// Read a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&source).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Use the first argument as a config path, else [`CONFIG_FILE`] if it
    /// exists, else the defaults.
    pub fn resolve(args: impl IntoIterator<Item = String>) -> Result<Self, ConfigError> {
        match args.into_iter().next() {
            Some(path) => Self::load(Path::new(&path)),
            None => Self::load_or_default(Path::new(CONFIG_FILE)),
        }
    }

    fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("No {} found, using default config", path.display());
            Ok(Self::default())
        }
    }
}
