// SPDX-License-Identifier: MPL-2.0
//! Startup locale detection.

use super::locale::Locale;
use super::store::PreferenceStore;
use crate::error::Result;
use crate::page::Location;
use std::fmt;

/// Query parameter carrying the locale on any page URL.
pub const LANG_QUERY_PARAM: &str = "lang";

/// Where the active locale came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleSource {
    Forced,
    Url,
    Persisted,
    Environment,
    Default,
}

impl fmt::Display for LocaleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LocaleSource::Forced => "forced",
            LocaleSource::Url => "url",
            LocaleSource::Persisted => "persisted",
            LocaleSource::Environment => "environment",
            LocaleSource::Default => "default",
        };
        f.write_str(name)
    }
}

/// Raw locale candidates, highest priority first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleSources {
    pub forced: Option<String>,
    /// Value of the `lang` query parameter.
    pub url: Option<String>,
    pub persisted: Option<String>,
    /// Language tag reported by the OS, e.g. `pt-BR`.
    pub environment: Option<String>,
}

impl LocaleSources {
    /// Collects candidates from the page URL, the preference store and the
    /// operating system.
    pub fn detect(
        forced: Option<String>,
        location: &Location,
        store: &impl PreferenceStore,
    ) -> Result<Self> {
        Ok(Self {
            forced,
            url: location.query_param(LANG_QUERY_PARAM),
            persisted: store.load_lang()?,
            environment: sys_locale::get_locale(),
        })
    }
}

/// Picks the active locale from the first usable source.
///
/// # Resolution Order
///
/// 1. Forced override, if supported
/// 2. URL `lang` parameter, matched case-insensitively
/// 3. Persisted preference, if supported
/// 4. Environment language tag, mapped by prefix (`pt*`, `es*`, else `en`)
/// 5. [`Locale::DEFAULT`]
pub fn resolve_locale(sources: &LocaleSources) -> (Locale, LocaleSource) {
    // 1. Forced override
    if let Some(locale) = sources.forced.as_deref().and_then(Locale::parse) {
        return (locale, LocaleSource::Forced);
    }

    // 2. URL query parameter
    if let Some(locale) = sources
        .url
        .as_deref()
        .and_then(|value| Locale::parse(&value.to_lowercase()))
    {
        return (locale, LocaleSource::Url);
    }

    // 3. Persisted preference
    if let Some(locale) = sources.persisted.as_deref().and_then(Locale::parse) {
        return (locale, LocaleSource::Persisted);
    }

    // 4. Environment language
    if let Some(tag) = sources.environment.as_deref().filter(|tag| !tag.is_empty()) {
        return (Locale::from_environment_tag(tag), LocaleSource::Environment);
    }

    (Locale::DEFAULT, LocaleSource::Default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::store::MemoryStore;

    fn all_sources() -> LocaleSources {
        LocaleSources {
            forced: Some("es".into()),
            url: Some("PT-BR".into()),
            persisted: Some("en".into()),
            environment: Some("es-MX".into()),
        }
    }

    #[test]
    fn priority_ladder_falls_through_in_order() {
        let mut sources = all_sources();
        sources.environment = Some("pt-PT".into());
        assert_eq!(resolve_locale(&sources), (Locale::Es, LocaleSource::Forced));

        sources.forced = None;
        assert_eq!(resolve_locale(&sources), (Locale::PtBr, LocaleSource::Url));

        sources.url = None;
        assert_eq!(resolve_locale(&sources), (Locale::En, LocaleSource::Persisted));

        sources.persisted = None;
        assert_eq!(
            resolve_locale(&sources),
            (Locale::PtBr, LocaleSource::Environment)
        );

        sources.environment = None;
        assert_eq!(resolve_locale(&sources), (Locale::En, LocaleSource::Default));
    }

    #[test]
    fn invalid_candidates_are_skipped() {
        let sources = LocaleSources {
            forced: Some("fr".into()),
            url: Some("de".into()),
            persisted: Some("klingon".into()),
            environment: Some("es-AR".into()),
        };
        assert_eq!(
            resolve_locale(&sources),
            (Locale::Es, LocaleSource::Environment)
        );
    }

    #[test]
    fn forced_and_persisted_are_case_sensitive() {
        let sources = LocaleSources {
            forced: Some("ES".into()),
            persisted: Some("PT-BR".into()),
            ..Default::default()
        };
        assert_eq!(resolve_locale(&sources), (Locale::En, LocaleSource::Default));
    }

    #[test]
    fn unknown_environment_language_maps_to_default() {
        let sources = LocaleSources {
            environment: Some("ja-JP".into()),
            ..Default::default()
        };
        assert_eq!(
            resolve_locale(&sources),
            (Locale::En, LocaleSource::Environment)
        );
    }

    #[test]
    fn detect_reads_url_and_store() {
        let location = Location::parse("https://brenon.cloud/?lang=Es").unwrap();
        let store = MemoryStore::with_lang("pt-br");
        let sources = LocaleSources::detect(Some("en".into()), &location, &store).unwrap();

        assert_eq!(sources.forced.as_deref(), Some("en"));
        assert_eq!(sources.url.as_deref(), Some("Es"));
        assert_eq!(sources.persisted.as_deref(), Some("pt-br"));
    }
}
