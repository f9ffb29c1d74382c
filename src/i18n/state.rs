// SPDX-License-Identifier: MPL-2.0
//! Active locale state and the binder that renders it into the page.
//!
//! [`I18n`] is the only writer of the active locale. Initial binding renders
//! the detected locale; [`I18n::set_locale`] is the single transition and
//! runs its side effects synchronously, in a fixed order:
//!
//! 1. persist the preference
//! 2. rewrite the `lang` query parameter in place
//! 3. update the document `lang` attribute
//! 4. rebind every marked element
//! 5. broadcast [`LocaleChanged`]

use super::catalog::{Catalog, Entry};
use super::detect::{resolve_locale, LocaleSource, LocaleSources, LANG_QUERY_PARAM};
use super::interpolate::{interpolate, Params};
use super::locale::Locale;
use super::resolve::{resolve, Resolved};
use super::store::PreferenceStore;
use crate::error::Result;
use crate::page::{Document, Element, Page};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::broadcast;

/// Attribute naming the translation key of an element.
pub const KEY_ATTRIBUTE: &str = "data-i18n";
/// Optional attribute whose value is bound to the `{name}` placeholder.
pub const NAME_ATTRIBUTE: &str = "data-i18n-name";
/// Id of the optional language selection control.
pub const LANG_SELECT_ID: &str = "lang-select";
/// Name under which [`LocaleChanged`] is announced.
pub const LOCALE_CHANGED_EVENT: &str = "i18n:changed";

const EVENT_CAPACITY: usize = 16;

/// Payload of the locale-changed notification: `{ "lang": "es" }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleChanged {
    pub lang: Locale,
}

/// A resolved translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation<'a> {
    Text(String),
    /// List-valued keys are handed over unchanged and never interpolated.
    List(&'a [String]),
    /// No locale defines the key; carries the key itself.
    Missing(String),
}

impl Translation<'_> {
    /// Displayable text. `None` for lists.
    pub fn into_text(self) -> Option<String> {
        match self {
            Translation::Text(text) | Translation::Missing(text) => Some(text),
            Translation::List(_) => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Translation::Missing(_))
    }
}

pub struct I18n<S> {
    catalog: Arc<Catalog>,
    locale: Locale,
    source: LocaleSource,
    store: S,
    events: broadcast::Sender<LocaleChanged>,
}

impl<S: PreferenceStore> I18n<S> {
    /// Creates the state with an already chosen locale, without touching
    /// any page.
    pub fn new(catalog: Arc<Catalog>, store: S, locale: Locale) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            catalog,
            locale,
            source: LocaleSource::Default,
            store,
            events,
        }
    }

    /// Detects the initial locale and renders it into `page`.
    ///
    /// This is a render, not a transition: nothing is persisted, the URL is
    /// left alone and no notification is sent.
    pub fn init(
        catalog: Arc<Catalog>,
        store: S,
        page: &mut Page,
        forced: Option<String>,
    ) -> Result<Self> {
        let sources = LocaleSources::detect(forced, &page.location, &store)?;
        Ok(Self::init_with_sources(catalog, store, page, &sources))
    }

    /// Same as [`I18n::init`] with candidates gathered by the caller.
    pub fn init_with_sources(
        catalog: Arc<Catalog>,
        store: S,
        page: &mut Page,
        sources: &LocaleSources,
    ) -> Self {
        let (locale, source) = resolve_locale(sources);
        tracing::debug!(%locale, %source, "resolved initial locale");

        let mut i18n = Self::new(catalog, store, locale);
        i18n.source = source;

        page.document.set_lang(locale.as_str());
        let bound = i18n.apply(&mut page.document, None);
        tracing::debug!(bound, "bound translatable elements");

        if let Some(select) = page.document.get_element_by_id_mut(LANG_SELECT_ID) {
            select.set_attr("value", locale.as_str());
        }

        i18n
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Source that selected the initial locale.
    pub fn source(&self) -> LocaleSource {
        self.source
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Receiver for locale changes. Events sent before subscribing are not
    /// delivered.
    pub fn subscribe(&self) -> broadcast::Receiver<LocaleChanged> {
        self.events.subscribe()
    }

    /// Resolves `key` in the active locale, falling back to the default.
    pub fn t(&self, key: &str, params: Option<&Params>) -> Translation<'_> {
        match resolve(&self.catalog, self.locale, key) {
            Resolved::Found {
                entry: Entry::Text(template),
                ..
            } => Translation::Text(interpolate(template, params).into_owned()),
            Resolved::Found {
                entry: Entry::List(items),
                ..
            } => Translation::List(items),
            Resolved::Missing => {
                tracing::warn!(key, locale = %self.locale, "missing translation");
                Translation::Missing(key.to_string())
            }
        }
    }

    /// Like [`I18n::t`] but always yields a string; a list-valued key
    /// yields the key itself.
    pub fn text(&self, key: &str, params: Option<&Params>) -> String {
        self.t(key, params)
            .into_text()
            .unwrap_or_else(|| key.to_string())
    }

    /// List-valued translation, e.g. the steps of a flow.
    pub fn list(&self, key: &str) -> Option<&[String]> {
        match self.t(key, None) {
            Translation::List(items) => Some(items),
            _ => None,
        }
    }

    /// Rewrites the text of every element carrying [`KEY_ATTRIBUTE`].
    ///
    /// With `scope`, only descendants of the element with that id are
    /// visited (not the element itself); an unknown id binds nothing.
    /// Returns the number of elements rewritten.
    pub fn apply(&self, document: &mut Document, scope: Option<&str>) -> usize {
        let mut bound = 0;
        let mut bind = |el: &mut Element| {
            if self.bind_element(el) {
                bound += 1;
            }
        };

        match scope {
            None => document.body_mut().visit_mut(&mut bind),
            Some(id) => {
                let Some(root) = document.get_element_by_id_mut(id) else {
                    tracing::debug!(scope = id, "binding scope not found");
                    return 0;
                };
                for child in root.children_mut() {
                    child.visit_mut(&mut bind);
                }
            }
        }
        bound
    }

    fn bind_element(&self, el: &mut Element) -> bool {
        let Some(key) = el.attr(KEY_ATTRIBUTE) else {
            return false;
        };
        let params = el
            .attr(NAME_ATTRIBUTE)
            .filter(|name| !name.is_empty())
            .map(|name| Params::new().with("name", name));

        match self.t(key, params.as_ref()).into_text() {
            Some(text) => {
                el.set_text(text);
                true
            }
            None => false,
        }
    }

    /// Switches the active locale and propagates it to `page`.
    ///
    /// Returns `Ok(false)` without any side effect when `candidate` is not a
    /// supported locale. A storage failure aborts before the page changes.
    pub fn set_locale(&mut self, page: &mut Page, candidate: &str) -> Result<bool> {
        let Some(locale) = Locale::parse(candidate) else {
            tracing::debug!(candidate, "ignoring unsupported locale");
            return Ok(false);
        };

        self.store.save_lang(locale.as_str())?;
        self.locale = locale;

        page.location
            .replace_query_param(LANG_QUERY_PARAM, locale.as_str());
        page.document.set_lang(locale.as_str());
        let bound = self.apply(&mut page.document, None);
        tracing::info!(event = LOCALE_CHANGED_EVENT, %locale, bound, "locale changed");

        // No receivers is fine; the notification is fire-and-forget.
        let _ = self.events.send(LocaleChanged { lang: locale });
        Ok(true)
    }

    /// Handles a change event from the language selection control.
    pub fn on_language_select(&mut self, page: &mut Page, value: &str) -> Result<bool> {
        self.set_locale(page, value)
    }
}
