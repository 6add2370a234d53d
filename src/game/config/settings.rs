//! Game Settings
//!
//! The window contract (size, title) and where assets live. Read from a
//! JSON file; every key is optional and falls back to its default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable naming an explicit settings file
pub const SETTINGS_ENV_VAR: &str = "UPSIDE_DOWN_SETTINGS";

/// Settings file looked up in the working directory
pub const SETTINGS_FILE: &str = "settings.json";

/// Smallest window that still fits the popup panel
pub const MIN_SCREEN_WIDTH: u32 = 420;
pub const MIN_SCREEN_HEIGHT: u32 = 180;

/// Largest window side accepted; the GPU surface is further clamped to
/// the device's texture limit at startup
pub const MAX_SCREEN_DIMENSION: u32 = 8192;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Window and asset settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub screen_width: u32,
    pub screen_height: u32,
    pub screen_title: String,
    /// Root of the asset tree (`sprites/` lives under it)
    pub assets_dir: PathBuf,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            screen_width: 1280,
            screen_height: 720,
            screen_title: "Upside Down".to_string(),
            assets_dir: PathBuf::from("assets"),
        }
    }
}

impl GameSettings {
    /// Load and validate settings from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: GameSettings =
            serde_json::from_str(&contents).map_err(|source| SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject windows too small for the home screen layout or too large
    /// for any GPU surface.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.screen_width < MIN_SCREEN_WIDTH || self.screen_height < MIN_SCREEN_HEIGHT {
            return Err(SettingsError::Invalid(format!(
                "screen size {}x{} is smaller than the minimum {}x{}",
                self.screen_width, self.screen_height, MIN_SCREEN_WIDTH, MIN_SCREEN_HEIGHT
            )));
        }
        if self.screen_width > MAX_SCREEN_DIMENSION || self.screen_height > MAX_SCREEN_DIMENSION {
            return Err(SettingsError::Invalid(format!(
                "screen size {}x{} exceeds the maximum side of {}",
                self.screen_width, self.screen_height, MAX_SCREEN_DIMENSION
            )));
        }
        if self.screen_title.trim().is_empty() {
            return Err(SettingsError::Invalid("screen_title must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Which settings file to read, if any: the env override first, then
/// `settings.json` in the working directory.
pub fn settings_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(SETTINGS_ENV_VAR) {
        return Some(PathBuf::from(path));
    }
    let local = PathBuf::from(SETTINGS_FILE);
    local.exists().then_some(local)
}

/// Load settings from [`settings_path`], or defaults when there is no file.
pub fn load_settings() -> Result<GameSettings, SettingsError> {
    match settings_path() {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading settings");
            GameSettings::from_path(&path)
        }
        None => {
            tracing::debug!("no settings file, using defaults");
            Ok(GameSettings::default())
        }
    }
}
