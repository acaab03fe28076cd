// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use lingua::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Pin the interface language
//! config.language = Some("en".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Lingua";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Preferred interface language (e.g. "pt", "en"). `None` defers to the
    /// OS locale and the built-in default.
    pub language: Option<String>,
    /// Locale consulted when a key is missing from the active locale.
    #[serde(default)]
    pub fallback_language: Option<String>,
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
