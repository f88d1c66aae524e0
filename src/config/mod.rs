// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use tubelens::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.inactivity_timeout_secs = Some(5);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.inactivity_timeout_secs, Some(5));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "TubeLens";

/// Default inactivity window before playback controls auto-hide, in seconds.
pub const DEFAULT_INACTIVITY_TIMEOUT_SECS: u64 = 3;
/// Minimum configurable inactivity window in seconds.
pub const MIN_INACTIVITY_TIMEOUT_SECS: u64 = 1;
/// Maximum configurable inactivity window in seconds.
pub const MAX_INACTIVITY_TIMEOUT_SECS: u64 = 30;

/// Window within which the second unlock tap must arrive, in seconds.
/// Fixed by product behavior, not user-configurable. Hosts arm their
/// timer with this value when the machine emits `ScheduleUnlockTimeout`.
pub const UNLOCK_CONFIRM_WINDOW_SECS: u64 = 2;

/// Default forward/backward seek step in seconds.
pub const DEFAULT_SEEK_STEP_SECS: u64 = 10;
/// Minimum configurable seek step in seconds.
pub const MIN_SEEK_STEP_SECS: u64 = 1;
/// Maximum configurable seek step in seconds.
pub const MAX_SEEK_STEP_SECS: u64 = 60;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Overrides the built-in feed endpoint when set.
    pub feed_url: Option<String>,
    #[serde(default)]
    pub inactivity_timeout_secs: Option<u64>,
    #[serde(default)]
    pub seek_step_secs: Option<u64>,
    #[serde(default)]
    pub playback_speed: Option<f64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed_url: None,
            inactivity_timeout_secs: Some(DEFAULT_INACTIVITY_TIMEOUT_SECS),
            seek_step_secs: Some(DEFAULT_SEEK_STEP_SECS),
            playback_speed: Some(1.0),
        }
    }
}

impl Config {
    /// Forward/backward seek step, clamped to the valid range.
    ///
    /// A `settings.toml` is user-editable, so every raw field is treated
    /// as untrusted; consumers go through these accessors.
    #[must_use]
    pub fn seek_step(&self) -> u64 {
        self.seek_step_secs
            .unwrap_or(DEFAULT_SEEK_STEP_SECS)
            .clamp(MIN_SEEK_STEP_SECS, MAX_SEEK_STEP_SECS)
    }

    /// Controls auto-hide window, clamped to the valid range.
    #[must_use]
    pub fn inactivity_window(&self) -> std::time::Duration {
        let secs = self
            .inactivity_timeout_secs
            .unwrap_or(DEFAULT_INACTIVITY_TIMEOUT_SECS)
            .clamp(MIN_INACTIVITY_TIMEOUT_SECS, MAX_INACTIVITY_TIMEOUT_SECS);
        std::time::Duration::from_secs(secs)
    }

    /// Initial playback speed, clamped to the speeds the player offers.
    #[must_use]
    pub fn speed(&self) -> crate::domain::player::PlaybackSpeed {
        crate::domain::player::PlaybackSpeed::new(self.playback_speed.unwrap_or(1.0))
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> io::Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> io::Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> io::Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, content)?;
    Ok(())
}
