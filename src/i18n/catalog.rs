// SPDX-License-Identifier: MPL-2.0
//! Translation catalog: one TOML file per locale, flattened at load time into
//! a map from dotted key (`sections.how.title`) to leaf entry.
//!
//! # Invariants
//!
//! - Only leaves are stored. A key naming a table has no entry.
//! - Every key of a non-default locale also exists in [`Locale::DEFAULT`],
//!   so the default is always a complete fallback source.
//! - The catalog is immutable once built.

use super::locale::Locale;
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use toml::{Table, Value};

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// A translation leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Text(String),
    /// Ordered content for programmatic consumers, e.g. step sequences.
    List(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct Catalog {
    locales: HashMap<Locale, HashMap<String, Entry>>,
}

impl Catalog {
    /// Loads the translation files embedded in the binary.
    pub fn embedded() -> Result<Self> {
        let mut sources = Vec::with_capacity(Locale::ALL.len());
        for locale in Locale::ALL {
            let filename = format!("{}.toml", locale.as_str());
            let file = Asset::get(&filename).ok_or_else(|| {
                Error::Catalog(format!("no translation file for locale `{}`", locale))
            })?;
            sources.push((locale, String::from_utf8_lossy(file.data.as_ref()).into_owned()));
        }
        Self::from_sources(sources.iter().map(|(locale, text)| (*locale, text.as_str())))
    }

    /// Builds a catalog from TOML documents, one per locale.
    ///
    /// Every supported locale must be present.
    pub fn from_sources<'a>(sources: impl IntoIterator<Item = (Locale, &'a str)>) -> Result<Self> {
        let mut locales = HashMap::new();
        for (locale, text) in sources {
            let table: Table = toml::from_str(text)
                .map_err(|err| Error::Catalog(format!("{}: {}", locale, err)))?;
            let mut entries = HashMap::new();
            flatten(locale, "", &table, &mut entries)?;
            locales.insert(locale, entries);
        }

        let catalog = Self { locales };
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<()> {
        let mut tables = Vec::with_capacity(Locale::ALL.len());
        for locale in Locale::ALL {
            let entries = self.locales.get(&locale).ok_or_else(|| {
                Error::Catalog(format!("locale `{}` has no translations", locale))
            })?;
            tables.push((locale, entries));
        }

        let default = &self.locales[&Locale::DEFAULT];
        for (locale, entries) in tables.into_iter().filter(|(l, _)| *l != Locale::DEFAULT) {
            if let Some(key) = entries.keys().find(|key| !default.contains_key(*key)) {
                return Err(Error::Catalog(format!(
                    "key `{}` in `{}` is missing from default locale `{}`",
                    key,
                    locale,
                    Locale::DEFAULT
                )));
            }
            let untranslated = default
                .keys()
                .filter(|key| !entries.contains_key(*key))
                .count();
            if untranslated > 0 {
                tracing::debug!(%locale, untranslated, "locale falls back to default");
            }
        }
        Ok(())
    }

    /// Entry for `key` in exactly `locale`, without fallback.
    pub fn get(&self, locale: Locale, key: &str) -> Option<&Entry> {
        self.locales.get(&locale).and_then(|entries| entries.get(key))
    }

    /// All keys of `locale`, sorted.
    pub fn keys(&self, locale: Locale) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .locales
            .get(&locale)
            .map(|entries| entries.keys().map(String::as_str).collect())
            .unwrap_or_default();
        keys.sort_unstable();
        keys
    }
}

fn flatten(
    locale: Locale,
    prefix: &str,
    table: &Table,
    out: &mut HashMap<String, Entry>,
) -> Result<()> {
    for (segment, value) in table {
        let key = if prefix.is_empty() {
            segment.clone()
        } else {
            format!("{}.{}", prefix, segment)
        };
        match value {
            Value::String(text) => {
                out.insert(key, Entry::Text(text.clone()));
            }
            Value::Array(items) => {
                let list = items
                    .iter()
                    .map(|item| match item {
                        Value::String(text) => Ok(text.clone()),
                        _ => Err(Error::Catalog(format!(
                            "{}: `{}` must contain only strings",
                            locale, key
                        ))),
                    })
                    .collect::<Result<Vec<_>>>()?;
                out.insert(key, Entry::List(list));
            }
            Value::Table(inner) => flatten(locale, &key, inner, out)?,
            other => {
                return Err(Error::Catalog(format!(
                    "{}: `{}` has unsupported {} value",
                    locale,
                    key,
                    other.type_str()
                )))
            }
        }
    }
    Ok(())
}
