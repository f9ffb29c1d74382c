// SPDX-License-Identifier: MPL-2.0
//! This module handles the persisted user preferences, stored in a
//! `settings.toml` file. The only preference today is the chosen language,
//! written under the `lang` key.
//!
//! # Examples
//!
//! ```no_run
//! use brenon_cloud::config;
//!
//! let path = config::default_config_path().expect("no config directory");
//!
//! // Load existing configuration
//! let mut settings = config::load_from_path(&path).unwrap_or_default();
//!
//! // Modify a setting
//! settings.lang = Some("es".to_string());
//!
//! // Save the modified configuration
//! config::save_to_path(&settings, &path).expect("Failed to save config");
//! ```

pub mod paths;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "settings.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Last language chosen by the user. Kept as a raw tag: values outside
    /// the supported set are ignored when read, not rejected on load.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

/// Path of the settings file inside the resolved config directory.
pub fn default_config_path() -> Option<PathBuf> {
    paths::config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Reads a settings file. Unparseable content yields the default config.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "ignoring unreadable settings file"
            );
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
