//! TOML-based application configuration.
//!
//! Stores user preferences: theme and font presets plus the sleep ritual
//! clock targets. Configuration is stored at `<data_dir>/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::ConfigError;

/// Available theme presets.
pub const THEMES: [&str; 5] = ["Clean", "Nature", "Ocean", "Sunset", "Focus"];

/// Available font presets.
pub const FONTS: [&str; 4] = ["Modern", "Typewriter", "Classic", "Bold"];

/// Sleep ritual clock targets, as `HH:MM` strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RitualConfig {
    #[serde(default = "default_bedtime")]
    pub bedtime: String,
    #[serde(default = "default_wake")]
    pub wake: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `<data_dir>/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_font")]
    pub font: String,
    #[serde(default)]
    pub ritual: RitualConfig,
}

fn default_theme() -> String {
    "Clean".into()
}
fn default_font() -> String {
    "Modern".into()
}
fn default_bedtime() -> String {
    "23:00".into()
}
fn default_wake() -> String {
    "08:00".into()
}

impl Default for RitualConfig {
    fn default() -> Self {
        Self {
            bedtime: default_bedtime(),
            wake: default_wake(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            font: default_font(),
            ritual: RitualConfig::default(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("."),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load from disk or write and return the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Load from disk, returning the default on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Set the theme preset. Unknown names are rejected.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` when `name` is not a known preset
    /// (case-insensitive match against [`THEMES`]).
    pub fn set_theme(&mut self, name: &str) -> Result<(), ConfigError> {
        match THEMES.iter().find(|t| t.eq_ignore_ascii_case(name)) {
            Some(theme) => {
                self.theme = (*theme).to_string();
                Ok(())
            }
            None => Err(ConfigError::InvalidValue {
                key: "theme".into(),
                message: format!("unknown theme: {name}"),
            }),
        }
    }

    /// Set the font preset. Unknown names are rejected.
    pub fn set_font(&mut self, name: &str) -> Result<(), ConfigError> {
        match FONTS.iter().find(|f| f.eq_ignore_ascii_case(name)) {
            Some(font) => {
                self.font = (*font).to_string();
                Ok(())
            }
            None => Err(ConfigError::InvalidValue {
                key: "font".into(),
                message: format!("unknown font: {name}"),
            }),
        }
    }

    /// Set the wake target. Must be `HH:MM`.
    pub fn set_wake(&mut self, hhmm: &str) -> Result<(), ConfigError> {
        if crate::ritual::parse_hhmm(hhmm).is_none() {
            return Err(ConfigError::InvalidValue {
                key: "ritual.wake".into(),
                message: format!("expected HH:MM, got: {hhmm}"),
            });
        }
        self.ritual.wake = hhmm.to_string();
        Ok(())
    }

    /// Set the bedtime target. Must be `HH:MM`.
    pub fn set_bedtime(&mut self, hhmm: &str) -> Result<(), ConfigError> {
        if crate::ritual::parse_hhmm(hhmm).is_none() {
            return Err(ConfigError::InvalidValue {
                key: "ritual.bedtime".into(),
                message: format!("expected HH:MM, got: {hhmm}"),
            });
        }
        self.ritual.bedtime = hhmm.to_string();
        Ok(())
    }
}
