// SPDX-License-Identifier: MPL-2.0
//! This module handles the toaster's configuration, including loading and
//! saving host preferences to a `toaster.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toaster::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.responsive = Some(true);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;

const CONFIG_FILE: &str = "toaster.toml";
const APP_NAME: &str = "IcedToaster";

/// Host-facing configuration resolved once at toaster construction.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Initial viewport width override (px).
    pub width: Option<f32>,
    /// Enables responsive mobile/desktop layout switching.
    #[serde(default)]
    pub responsive: Option<bool>,
    /// Overrides the mobile breakpoint (px).
    #[serde(default)]
    pub mobile_breakpoint: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: None,
            responsive: Some(false),
            mobile_breakpoint: Some(defaults::MOBILE_BREAKPOINT),
        }
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
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}
