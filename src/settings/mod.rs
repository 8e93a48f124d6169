//! Application settings persisted as TOML in the platform config directory.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarSettings {
    /// "light", "dark" or "system"
    pub theme: String,
    /// When true the widget lets the user pick a today-or-later date before
    /// adding an event; when false day cells are inert and the "Add event"
    /// button is always enabled
    pub date_selection: bool,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            theme: "system".to_string(),
            date_selection: true,
        }
    }
}

impl CalendarSettings {
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Load from the default location, falling back to defaults when the
    /// file is missing or unreadable.
    pub fn load_or_default() -> Self {
        let Some(path) = default_settings_path() else {
            log::warn!("No config directory available; using default settings");
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load(&path) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!(
                    "Failed to load settings from {}: {err}",
                    path.display()
                );
                Self::default()
            }
        }
    }
}

/// Path of the settings file under the platform config directory.
pub fn default_settings_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "month-calendar")
        .map(|dirs| dirs.config_dir().join("settings.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = CalendarSettings::default();
        assert_eq!(settings.theme, "system");
        assert!(settings.date_selection);
    }

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let settings: CalendarSettings = toml::from_str("theme = \"dark\"").unwrap();
        assert_eq!(settings.theme, "dark");
        assert!(settings.date_selection);
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "theme = [not toml").unwrap();
        assert!(matches!(
            CalendarSettings::load(&path),
            Err(SettingsError::Parse(_))
        ));
    }
}
