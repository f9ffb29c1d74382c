// SPDX-License-Identifier: MPL-2.0
use brenon_cloud::app::{self, Flags};
use brenon_cloud::config::{self, Config};
use brenon_cloud::i18n::{
    Catalog, ConfigStore, Entry, I18n, Locale, LocaleChanged, LocaleSource, LocaleSources,
    MemoryStore, Params, PreferenceStore, Translation, KEY_ATTRIBUTE, LANG_SELECT_ID,
};
use brenon_cloud::page::{Document, Element, Location, Page};
use brenon_cloud::site;
use std::ffi::OsString;
use std::sync::Arc;
use tempfile::tempdir;

fn catalog() -> Arc<Catalog> {
    Arc::new(Catalog::embedded().expect("embedded catalog should load"))
}

fn home(href: &str) -> Page {
    Page::new(Location::parse(href).unwrap(), site::home_page())
}

fn text_by_key<'a>(el: &'a Element, key: &str) -> Option<&'a str> {
    if el.attr(KEY_ATTRIBUTE) == Some(key) {
        return Some(el.text());
    }
    el.children().iter().find_map(|child| text_by_key(child, key))
}

#[test]
fn every_default_key_resolves_under_every_locale() {
    let catalog = catalog();
    for locale in Locale::ALL {
        let i18n = I18n::new(catalog.clone(), MemoryStore::new(), locale);
        for key in catalog.keys(Locale::DEFAULT) {
            match i18n.t(key, None) {
                Translation::Text(text) => {
                    assert!(!text.is_empty(), "{} `{}` is empty", locale, key)
                }
                Translation::List(items) => {
                    assert!(!items.is_empty(), "{} `{}` is empty", locale, key)
                }
                Translation::Missing(_) => panic!("{} `{}` is missing", locale, key),
            }
        }
    }
}

#[test]
fn absent_key_resolves_to_itself() {
    let i18n = I18n::new(catalog(), MemoryStore::new(), Locale::Es);
    for key in ["", "nope", "ui.nope", "sections.how", "ui.back.more"] {
        assert_eq!(i18n.text(key, None), key);
    }
}

#[test]
fn back_link_scenario() {
    let catalog = catalog();
    let pt = I18n::new(catalog.clone(), MemoryStore::new(), Locale::PtBr);
    assert_eq!(pt.text("ui.back", None), "Voltar para a Home");

    // Nothing usable besides an unsupported forced tag: the default wins.
    let mut page = Page::new(
        Location::parse("https://brenon.cloud/service?service=kong&lang=fr").unwrap(),
        site::service_page("kong"),
    );
    let sources = LocaleSources::detect(Some("fr".into()), &page.location, &MemoryStore::new())
        .map(|sources| LocaleSources {
            environment: None,
            ..sources
        })
        .unwrap();
    let forced = I18n::init_with_sources(catalog, MemoryStore::new(), &mut page, &sources);

    assert_eq!(forced.locale(), Locale::En);
    assert_eq!(forced.source(), LocaleSource::Default);
    assert_eq!(forced.text("ui.back", None), "Back to Home");
    assert_eq!(text_by_key(page.document.body(), "ui.back"), Some("Back to Home"));
}

#[test]
fn what_is_scenario() {
    let i18n = I18n::new(catalog(), MemoryStore::new(), Locale::En);
    let params = Params::new().with("name", "Kong");
    assert_eq!(i18n.text("ui.whatIs", Some(&params)), "What is Kong?");
    assert_eq!(i18n.text("ui.whatIs", Some(&Params::new())), "What is ?");
    assert_eq!(i18n.text("ui.whatIs", None), "What is {name}?");
}

#[test]
fn switching_from_en_to_es_updates_everything() {
    let dir = tempdir().expect("failed to create temp dir");
    let settings = dir.path().join("settings.toml");
    let mut page = home("https://brenon.cloud/?lang=en");

    let mut i18n = I18n::init(catalog(), ConfigStore::at(&settings), &mut page, None).unwrap();
    assert_eq!(i18n.locale(), Locale::En);
    assert_eq!(text_by_key(page.document.body(), "hero.title"), Some("Welcome to Brenon.Cloud"));
    assert!(!settings.exists(), "initial bind must not persist");

    let mut rx = i18n.subscribe();
    assert!(i18n.set_locale(&mut page, "es").unwrap());

    let saved = config::load_from_path(&settings).unwrap();
    assert_eq!(saved.lang.as_deref(), Some("es"));
    assert_eq!(page.document.lang(), Some("es"));
    assert_eq!(page.location.href(), "https://brenon.cloud/?lang=es");
    assert_eq!(text_by_key(page.document.body(), "hero.title"), Some("Bienvenido a Brenon.Cloud"));
    assert_eq!(
        text_by_key(page.document.body(), "footer.rights"),
        Some("Todos los derechos reservados.")
    );
    assert_eq!(rx.try_recv().unwrap(), LocaleChanged { lang: Locale::Es });
}

#[test]
fn unsupported_set_leaves_state_storage_and_url_alone() {
    let dir = tempdir().expect("failed to create temp dir");
    let settings = dir.path().join("settings.toml");
    config::save_to_path(&Config { lang: Some("pt-br".into()) }, &settings).unwrap();

    let mut page = home("https://brenon.cloud/");
    let mut i18n = I18n::init(catalog(), ConfigStore::at(&settings), &mut page, None).unwrap();
    assert_eq!((i18n.locale(), i18n.source()), (Locale::PtBr, LocaleSource::Persisted));

    let before = page.clone();
    assert!(!i18n.set_locale(&mut page, "de").unwrap());
    assert_eq!(i18n.locale(), Locale::PtBr);
    assert_eq!(page, before);
    assert_eq!(config::load_from_path(&settings).unwrap().lang.as_deref(), Some("pt-br"));
}

#[test]
fn selection_control_follows_locale_and_drives_changes() {
    let mut page = home("https://brenon.cloud/?lang=PT-BR");
    let mut i18n = I18n::init(catalog(), MemoryStore::new(), &mut page, None).unwrap();
    let select = page.document.get_element_by_id(LANG_SELECT_ID).unwrap();
    assert_eq!(select.attr("value"), Some("pt-br"));

    assert!(!i18n.on_language_select(&mut page, "xx").unwrap());
    assert!(i18n.on_language_select(&mut page, "en").unwrap());
    assert_eq!(i18n.store().lang(), Some("en"));
    assert_eq!(page.location.href(), "https://brenon.cloud/?lang=en");
}

#[test]
fn page_without_selection_control_binds_normally() {
    let body = Element::new("body")
        .with_child(Element::new("h1").with_attr(KEY_ATTRIBUTE, "hero.title"));
    let location = Location::parse("https://brenon.cloud/").unwrap();
    let mut page = Page::new(location, Document::new(body));
    let i18n = I18n::init(catalog(), MemoryStore::new(), &mut page, Some("es".into())).unwrap();

    assert_eq!(i18n.locale(), Locale::Es);
    assert_eq!(page.document.body().children()[0].text(), "Bienvenido a Brenon.Cloud");
}

#[tokio::test]
async fn change_notification_reaches_async_listeners() {
    let mut page = home("https://brenon.cloud/");
    let mut i18n = I18n::init(catalog(), MemoryStore::new(), &mut page, Some("en".into())).unwrap();
    let mut rx = i18n.subscribe();

    let listener = tokio::spawn(async move { rx.recv().await });
    i18n.set_locale(&mut page, "pt-br").unwrap();

    let event = tokio::time::timeout(std::time::Duration::from_secs(1), listener)
        .await
        .expect("listener timed out")
        .expect("listener panicked")
        .expect("channel closed");
    assert_eq!(event.lang, Locale::PtBr);
}

#[test]
fn language_change_via_config_file() {
    let dir = tempdir().expect("failed to create temp dir");
    let settings = dir.path().join("settings.toml");

    let mut store = ConfigStore::at(&settings);
    store.save_lang("es").unwrap();

    let flags =
        Flags::parse(pico_args::Arguments::from_vec(vec![OsString::from("locale")])).unwrap();
    let mut out = Vec::new();
    app::run_with_store(&flags, ConfigStore::at(&settings), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "es (persisted)\n");

    let flags = Flags::parse(pico_args::Arguments::from_vec(
        ["set", "pt-br"].iter().map(OsString::from).collect(),
    ))
    .unwrap();
    let mut out = Vec::new();
    app::run_with_store(&flags, ConfigStore::at(&settings), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "https://brenon.cloud/?lang=pt-br\n");
    assert_eq!(store.load_lang().unwrap().as_deref(), Some("pt-br"));
}

#[test]
fn list_entries_are_never_bound_as_text() {
    let catalog = catalog();
    assert!(matches!(
        catalog.get(Locale::En, "service.n8n.how"),
        Some(Entry::List(items)) if items.len() == 3
    ));

    let body = Element::new("body")
        .with_child(
            Element::new("ol")
                .with_attr(KEY_ATTRIBUTE, "service.n8n.how")
                .with_text("keep"),
        );
    let mut document = Document::new(body);
    let i18n = I18n::new(catalog, MemoryStore::new(), Locale::Es);
    assert_eq!(i18n.apply(&mut document, None), 0);
    assert_eq!(document.body().children()[0].text(), "keep");
}
