//! Runtime configuration
//!
//! Loaded once at startup from an optional JSON file named by the
//! `FRUITFALL_CONFIG` environment variable. Anything missing or broken
//! falls back to the shipped defaults, which reproduce the tracking and
//! play-field contract exactly.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::vision::HueBand;

/// Startup settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    // === Vision ===
    /// HSV band the marker must fall in
    pub band: HueBand,
    /// Capture frame width in pixels
    pub frame_width: u32,
    /// Capture frame height in pixels
    pub frame_height: u32,
    /// Run on the built-in synthetic sweep instead of a capture device
    pub synthetic_source: bool,

    // === Presenter ===
    /// Show the tracked marker position in the HUD
    pub show_marker: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            band: HueBand::default(),
            frame_width: 500,
            frame_height: 375,
            synthetic_source: true,
            show_marker: false,
        }
    }
}

impl Settings {
    /// Environment variable naming the settings file
    const CONFIG_ENV: &'static str = "FRUITFALL_CONFIG";

    /// Load settings, falling back to defaults on any failure
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(Self::CONFIG_ENV) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.to_string_lossy());
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring {}: {}", path.to_string_lossy(), err);
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!("Could not read {}: {}", path.to_string_lossy(), err);
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_reproduce_the_tracking_contract() {
        let settings = Settings::default();

        assert_eq!(settings.band.lower, [40, 100, 100]);
        assert_eq!(settings.band.upper, [70, 225, 255]);
        assert_eq!((settings.frame_width, settings.frame_height), (500, 375));
        assert!(settings.synthetic_source);
        assert!(!settings.show_marker);
    }

    #[test]
    fn test_save_writes_readable_json() {
        let path = std::env::temp_dir().join("fruitfall-settings-test.json");
        let settings = Settings {
            show_marker: true,
            ..Settings::default()
        };

        settings.save(&path).unwrap();
        let json = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let reloaded: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(reloaded, settings);
    }
}
