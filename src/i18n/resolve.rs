// SPDX-License-Identifier: MPL-2.0
//! Key lookup with fallback to the default locale.

use super::catalog::{Catalog, Entry};
use super::locale::Locale;

/// Outcome of looking a key up in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved<'a> {
    /// Leaf found; `from` is the locale that supplied it.
    Found { entry: &'a Entry, from: Locale },
    Missing,
}

/// Looks `key` up in `locale`, then in [`Locale::DEFAULT`].
pub fn resolve<'a>(catalog: &'a Catalog, locale: Locale, key: &str) -> Resolved<'a> {
    if let Some(entry) = catalog.get(locale, key) {
        return Resolved::Found {
            entry,
            from: locale,
        };
    }

    if locale != Locale::DEFAULT {
        if let Some(entry) = catalog.get(Locale::DEFAULT, key) {
            tracing::debug!(%locale, key, "translation falls back to default locale");
            return Resolved::Found {
                entry,
                from: Locale::DEFAULT,
            };
        }
    }

    Resolved::Missing
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_sources([
            (
                Locale::En,
                "[ui]\nback = \"Back to Home\"\nonly_en = \"English only\"\n",
            ),
            (Locale::PtBr, "[ui]\nback = \"Voltar para a Home\"\n"),
            (Locale::Es, ""),
        ])
        .unwrap()
    }

    #[test]
    fn active_locale_wins() {
        let catalog = catalog();
        assert_eq!(
            resolve(&catalog, Locale::PtBr, "ui.back"),
            Resolved::Found {
                entry: &Entry::Text("Voltar para a Home".into()),
                from: Locale::PtBr,
            }
        );
    }

    #[test]
    fn missing_key_falls_back_to_default() {
        let catalog = catalog();
        match resolve(&catalog, Locale::PtBr, "ui.only_en") {
            Resolved::Found { entry, from } => {
                assert_eq!(entry, &Entry::Text("English only".into()));
                assert_eq!(from, Locale::En);
            }
            Resolved::Missing => panic!("expected fallback"),
        }
    }

    #[test]
    fn key_absent_everywhere_is_missing() {
        let catalog = catalog();
        assert_eq!(resolve(&catalog, Locale::Es, "ui.nope"), Resolved::Missing);
        assert_eq!(resolve(&catalog, Locale::En, "nope"), Resolved::Missing);
    }

    #[test]
    fn empty_key_and_table_keys_are_missing() {
        let catalog = catalog();
        assert_eq!(resolve(&catalog, Locale::En, ""), Resolved::Missing);
        assert_eq!(resolve(&catalog, Locale::En, "ui"), Resolved::Missing);
        assert_eq!(resolve(&catalog, Locale::En, "ui.back.deeper"), Resolved::Missing);
    }
}
