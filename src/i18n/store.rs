// SPDX-License-Identifier: MPL-2.0
//! Where the chosen language is remembered between visits.

use crate::config::{self, Config};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Key/value persistence for the `lang` preference.
///
/// Values are returned raw; validation against the supported set happens
/// in the locale resolver.
pub trait PreferenceStore {
    fn load_lang(&self) -> Result<Option<String>>;
    fn save_lang(&mut self, lang: &str) -> Result<()>;
}

/// Stores the preference in `settings.toml`.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: Option<PathBuf>,
}

impl ConfigStore {
    /// Uses the standard config location (see [`config::paths`]).
    pub fn new() -> Self {
        Self {
            path: config::default_config_path(),
        }
    }

    /// Uses an explicit settings file.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for ConfigStore {
    fn load_lang(&self) -> Result<Option<String>> {
        match &self.path {
            Some(path) if path.exists() => Ok(config::load_from_path(path)?.lang),
            _ => Ok(None),
        }
    }

    fn save_lang(&mut self, lang: &str) -> Result<()> {
        let Some(path) = &self.path else {
            return Err(Error::Io(
                "no config directory available to save the language preference".to_string(),
            ));
        };

        let mut cfg = if path.exists() {
            config::load_from_path(path)?
        } else {
            Config::default()
        };
        cfg.lang = Some(lang.to_string());
        config::save_to_path(&cfg, path)
    }
}

/// In-process store, for embedding without a filesystem and for tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    lang: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lang(lang: impl Into<String>) -> Self {
        Self {
            lang: Some(lang.into()),
        }
    }

    pub fn lang(&self) -> Option<&str> {
        self.lang.as_deref()
    }
}

impl PreferenceStore for MemoryStore {
    fn load_lang(&self) -> Result<Option<String>> {
        Ok(self.lang.clone())
    }

    fn save_lang(&mut self, lang: &str) -> Result<()> {
        self.lang = Some(lang.to_string());
        Ok(())
    }
}
