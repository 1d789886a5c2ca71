//! Runtime settings for the demo driver
//!
//! Persisted as JSON next to the binary; a missing or unreadable file falls
//! back to defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::TICK_HZ;

/// Demo driver configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Tick cadence in Hz
    pub tick_hz: u32,
    /// Number of ticks to run (0 = run until every slider freezes)
    pub ticks: u64,
    /// Sliders to spawn
    pub slider_count: usize,
    /// RNG seed for the spawned population; None picks one from entropy
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_hz: TICK_HZ,
            ticks: 200,
            slider_count: 4,
            seed: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings file: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Settings {
    /// Load settings from `path`, falling back to defaults when the file is
    /// missing or malformed. The fallback is logged, not fatal.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::info!("Using default settings ({err})");
                Self::default()
            }
        }
    }

    fn try_load(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Write settings to `path` as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let path = Path::new("/nonexistent/slider-sim-settings.json");
        assert_eq!(Settings::load(path), Settings::default());
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("slider-sim-settings-bad.json");
        fs::write(&path, "{not json").unwrap();
        assert_eq!(Settings::load(&path), Settings::default());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join("slider-sim-settings-ok.json");
        let settings = Settings {
            tick_hz: 30,
            ticks: 50,
            slider_count: 2,
            seed: Some(42),
        };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path), settings);
        let _ = fs::remove_file(&path);
    }
}
