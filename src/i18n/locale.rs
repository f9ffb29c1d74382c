// SPDX-License-Identifier: MPL-2.0
//! The closed set of locales the site ships translations for.

use serde::{Deserialize, Serialize};
use std::fmt;
use unic_langid::LanguageIdentifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "en")]
    En,
    #[serde(rename = "pt-br")]
    PtBr,
    #[serde(rename = "es")]
    Es,
}

impl Locale {
    /// Locale consulted when a key is missing from the active one.
    pub const DEFAULT: Locale = Locale::En;

    pub const ALL: [Locale; 3] = [Locale::En, Locale::PtBr, Locale::Es];

    /// Canonical lowercase tag, as written to storage and URLs.
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::PtBr => "pt-br",
            Locale::Es => "es",
        }
    }

    /// Exact match against the canonical tags. `"PT-BR"` is not accepted;
    /// callers that read case-insensitive sources lowercase first.
    pub fn parse(tag: &str) -> Option<Locale> {
        Locale::ALL.into_iter().find(|locale| locale.as_str() == tag)
    }

    /// Maps an environment language tag (e.g. `pt-BR`, `es_MX`, `de`) to a
    /// supported locale by the prefix of its language subtag.
    pub fn from_environment_tag(tag: &str) -> Locale {
        let lowered = tag.to_lowercase();
        let language = match lowered.parse::<LanguageIdentifier>() {
            Ok(id) => id.language.as_str().to_string(),
            Err(_) => lowered,
        };

        if language.starts_with("pt") {
            Locale::PtBr
        } else if language.starts_with("es") {
            Locale::Es
        } else {
            Locale::DEFAULT
        }
    }

    /// Label shown in the language selection control.
    pub fn native_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::PtBr => "Português (Brasil)",
            Locale::Es => "Español",
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::DEFAULT
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
