//! Persisted timing preferences, loaded from and saved to a
//! `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.animation_speed = Some(6.0);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use crate::notifications::engine::DEFAULT_ANIMATION_SPEED;
use crate::notifications::{DEFAULT_CONFIRM_TIMEOUT, DEFAULT_DURATION};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedToast";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Display duration for plain toasts, in seconds.
    #[serde(default)]
    pub default_duration_secs: Option<f32>,
    /// Confirmation countdown window, in seconds.
    #[serde(default)]
    pub confirm_timeout_secs: Option<f32>,
    /// Base animation rate (exit rate; entry is twice it).
    #[serde(default)]
    pub animation_speed: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_duration_secs: Some(DEFAULT_DURATION),
            confirm_timeout_secs: Some(DEFAULT_CONFIRM_TIMEOUT),
            animation_speed: Some(DEFAULT_ANIMATION_SPEED),
        }
    }
}

impl Config {
    /// Display duration with the preset fallback applied.
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.default_duration_secs.unwrap_or(DEFAULT_DURATION)
    }

    /// Confirmation window with the preset fallback applied.
    #[must_use]
    pub fn confirm_timeout(&self) -> f32 {
        self.confirm_timeout_secs.unwrap_or(DEFAULT_CONFIRM_TIMEOUT)
    }

    /// Animation rate with the preset fallback applied.
    #[must_use]
    pub fn animation_speed(&self) -> f32 {
        self.animation_speed.unwrap_or(DEFAULT_ANIMATION_SPEED)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
