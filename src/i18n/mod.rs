// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the site.
//!
//! Translations live in one TOML file per locale under `assets/i18n/` and are
//! embedded at build time. Keys are dotted paths into those files
//! (`sections.how.title`); leaves are strings or lists of strings.
//!
//! # Features
//!
//! - Locale detection from a forced override, the `lang` URL parameter, the
//!   saved preference, or the system language
//! - Fallback to the default locale (`en`) for missing keys, and to the raw
//!   key when no locale defines it
//! - `{name}` placeholder interpolation
//! - Runtime language switching that persists the choice, rewrites the URL,
//!   rebinds the page and broadcasts a change event
//!
//! # Example
//!
//! ```
//! use brenon_cloud::i18n::{Catalog, I18n, Locale, MemoryStore, Params};
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(Catalog::embedded().unwrap());
//! let i18n = I18n::new(catalog, MemoryStore::new(), Locale::En);
//!
//! let params = Params::new().with("name", "Kong");
//! assert_eq!(i18n.text("ui.whatIs", Some(&params)), "What is Kong?");
//! ```

pub mod catalog;
pub mod detect;
pub mod interpolate;
pub mod locale;
pub mod resolve;
pub mod state;
pub mod store;

pub use catalog::{Catalog, Entry};
pub use detect::{resolve_locale, LocaleSource, LocaleSources, LANG_QUERY_PARAM};
pub use interpolate::{interpolate, Params};
pub use locale::Locale;
pub use state::{
    I18n, LocaleChanged, Translation, KEY_ATTRIBUTE, LANG_SELECT_ID, LOCALE_CHANGED_EVENT,
    NAME_ATTRIBUTE,
};
pub use store::{ConfigStore, MemoryStore, PreferenceStore};
