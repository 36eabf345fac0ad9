//! User settings
//!
//! Stored as YAML, by default in `~/.config/chord-helper/settings.yaml`
//! (the platform config directory elsewhere). Every field has a default, so
//! the file is optional and may list only the keys the user changed:
//!
//! ```yaml
//! power-chord-mode: true
//! show-tab-notation: false
//! ```

use crate::error::ChordError;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "settings.yaml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Settings {
    /// Show only power chords when suggesting fingerings
    pub power_chord_mode: bool,
    /// Print tab notation under each diagram
    pub show_tab_notation: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            power_chord_mode: false,
            show_tab_notation: true,
        }
    }
}

impl Settings {
    /// Read settings from `path`; defaults if the file doesn't exist.
    ///
    /// # Errors
    /// [`ChordError::Settings`] if the file exists but can't be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ChordError> {
        if !path.exists() {
            log::debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| ChordError::Settings(format!("reading {}: {}", path.display(), e)))?;

        // An empty file deserializes as unit, not as a map
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let settings = serde_yaml::from_str(&contents)
            .map_err(|e| ChordError::Settings(format!("parsing {}: {}", path.display(), e)))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Like [`Settings::load`], but a broken file only logs a warning
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            log::warn!("{}. Using defaults.", e);
            Self::default()
        })
    }

    /// Write settings to `path`, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<(), ChordError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ChordError::Settings(format!("creating {}: {}", parent.display(), e))
            })?;
        }

        let yaml = serde_yaml::to_string(self)
            .map_err(|e| ChordError::Settings(format!("serializing: {}", e)))?;
        std::fs::write(path, yaml)
            .map_err(|e| ChordError::Settings(format!("writing {}: {}", path.display(), e)))?;

        log::info!("Saved settings to {}", path.display());
        Ok(())
    }
}

/// Default settings file location, if the platform has a config directory
pub fn default_settings_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", crate::APP_NAME).map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
}
