//! Carousel settings, persisted as JSON in the platform config directory.

use crate::constants::{ARROW_HIDE_DELAY_MS, SETTINGS_DIR_NAME, SETTINGS_FILE_NAME};
use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselSettings {
    /// Milliseconds of inactivity before the arrows hide
    pub arrow_hide_delay_ms: u64,
    /// Whether the pager reports a pinch gesture as running until told otherwise
    pub initial_gesture_active: bool,
    /// Encrypted auth token appended to sources that require it
    pub auth_token: Option<String>,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            arrow_hide_delay_ms: ARROW_HIDE_DELAY_MS,
            initial_gesture_active: false,
            auth_token: None,
        }
    }
}

impl CarouselSettings {
    pub fn arrow_hide_delay(&self) -> Duration {
        Duration::from_millis(self.arrow_hide_delay_ms)
    }

    /// Load from the default location, falling back to defaults on any failure.
    pub fn load() -> Self {
        let Some(path) = settings_path() else {
            tracing::warn!("No config directory, using default settings");
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::error!("Failed to load settings from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> SettingsResult<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Save to the default location
    pub fn save(&self) -> SettingsResult<()> {
        let path = settings_path().ok_or(SettingsError::NoConfigDir)?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> SettingsResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// `<config_dir>/attachment-carousel/settings.json`
pub fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
}
