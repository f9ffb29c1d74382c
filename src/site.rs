// SPDX-License-Identifier: MPL-2.0
//! Markup of the site pages, annotated with translation markers.
//!
//! Text nodes start empty; [`crate::i18n::I18n::apply`] fills them in.
//! List-valued keys (flows, steps, feature lists) are expanded separately
//! by [`fill_lists`], since the binder never writes lists into text.

use crate::i18n::{I18n, Locale, PreferenceStore, KEY_ATTRIBUTE, LANG_SELECT_ID, NAME_ATTRIBUTE};
use crate::page::{Document, Element};

/// Attribute naming a list-valued key to expand into `<li>` children.
pub const LIST_ATTRIBUTE: &str = "data-i18n-list";

/// Services with a detail page, by catalog id.
pub const SERVICE_IDS: [&str; 7] = [
    "authentik",
    "docker",
    "grafana",
    "kong",
    "n8n",
    "portainer",
    "uptime-kuma",
];

fn t(tag: &str, key: &str) -> Element {
    Element::new(tag).with_attr(KEY_ATTRIBUTE, key)
}

fn list(tag: &str, key: &str) -> Element {
    Element::new(tag).with_attr(LIST_ATTRIBUTE, key)
}

fn language_select() -> Element {
    Element::new("select")
        .with_id(LANG_SELECT_ID)
        .with_attr("value", Locale::DEFAULT.as_str())
        .with_children(Locale::ALL.into_iter().map(|locale| {
            Element::new("option")
                .with_attr("value", locale.as_str())
                .with_text(locale.native_name())
        }))
}

fn header() -> Element {
    Element::new("header").with_child(
        Element::new("nav")
            .with_child(t("a", "nav.how").with_attr("href", "#how"))
            .with_child(t("a", "nav.services").with_attr("href", "#services"))
            .with_child(t("a", "nav.status").with_attr("href", "/status"))
            .with_child(language_select()),
    )
}

fn footer() -> Element {
    Element::new("footer").with_child(t("small", "footer.rights"))
}

fn card(title_key: &str, desc_key: &str) -> Element {
    Element::new("article")
        .with_attr("class", "card")
        .with_child(t("h3", title_key))
        .with_child(t("p", desc_key))
}

/// The landing page.
pub fn home_page() -> Document {
    let cards = ["authentik", "kong", "docker", "kuma", "grafana", "n8n"].map(|name| {
        card(
            &format!("sections.how.cards.{}Title", name),
            &format!("sections.how.cards.{}Desc", name),
        )
    });

    let main = Element::new("main")
        .with_child(
            Element::new("section")
                .with_id("hero")
                .with_child(t("h1", "hero.title"))
                .with_child(t("p", "hero.subtitle"))
                .with_child(t("a", "hero.ctaStart").with_attr("href", "#how"))
                .with_child(t("a", "hero.ctaExplore").with_attr("href", "#services")),
        )
        .with_child(
            Element::new("section")
                .with_id("how")
                .with_child(t("h2", "sections.how.title"))
                .with_child(t("p", "sections.how.intro"))
                .with_child(list("ol", "sections.how.flow"))
                .with_children(cards)
                .with_child(t("a", "sections.how.learnMore")),
        )
        .with_child(
            Element::new("section")
                .with_id("services")
                .with_child(t("h2", "sections.services.title"))
                .with_child(card("sections.how.cards.n8nTitle", "cards.n8nDesc"))
                .with_child(card("sections.how.cards.kumaTitle", "cards.kumaDesc"))
                .with_child(card("sections.how.cards.grafanaTitle", "cards.grafanaDesc")),
        )
        .with_child(
            Element::new("section")
                .with_id("docker")
                .with_child(t("h2", "sections.docker.title"))
                .with_child(t("p", "sections.docker.intro"))
                .with_child(card("sections.docker.card1Title", "sections.docker.card1Desc"))
                .with_child(card("sections.docker.card2Title", "sections.docker.card2Desc"))
                .with_child(card("sections.docker.card3Title", "sections.docker.card3Desc"))
                .with_child(list("ol", "sections.docker.flow"))
                .with_child(t("a", "sections.docker.ctaDocker"))
                .with_child(t("a", "sections.docker.ctaPortainer"))
                .with_child(t("a", "sections.docker.ctaOpenPortainer")),
        )
        .with_child(
            Element::new("section")
                .with_id("about")
                .with_child(t("h2", "sections.about.title"))
                .with_child(t("p", "sections.about.text")),
        );

    Document::new(
        Element::new("body")
            .with_child(header())
            .with_child(main)
            .with_child(footer()),
    )
}

/// Detail page of one service. Unknown ids render the not-found variant.
pub fn service_page(service_id: &str) -> Document {
    let main = if SERVICE_IDS.contains(&service_id) {
        let key = |field: &str| format!("service.{}.{}", service_id, field);
        Element::new("main")
            .with_id("service")
            .with_child(t("a", "ui.back").with_attr("href", "/"))
            .with_child(t("p", &key("tagline")))
            .with_child(t("h2", "ui.whatIs").with_attr(NAME_ATTRIBUTE, service_id))
            .with_child(t("p", &key("what")))
            .with_child(t("h2", "ui.howItWorks"))
            .with_child(list("ol", &key("how")))
            .with_child(t("h2", "ui.keyFeatures"))
            .with_child(list("ul", &key("features")))
            .with_child(t("h2", "ui.relatedLinks"))
            .with_child(t("a", "ui.officialDocs"))
            .with_child(t("a", "ui.statusPage"))
    } else {
        Element::new("main")
            .with_id("service")
            .with_child(t("h1", "ui.notFoundTitle"))
            .with_child(t("p", "ui.notFoundSubtitle"))
            .with_child(t("p", "ui.tryThese"))
            .with_child(Element::new("ul").with_children(SERVICE_IDS.into_iter().map(|id| {
                Element::new("li").with_child(
                    Element::new("a")
                        .with_attr("href", format!("/service?service={}", id))
                        .with_text(id),
                )
            })))
            .with_child(t("a", "ui.back").with_attr("href", "/"))
    };

    Document::new(
        Element::new("body")
            .with_child(header())
            .with_child(main)
            .with_child(footer()),
    )
}

/// Replaces the children of every [`LIST_ATTRIBUTE`] element with one `<li>`
/// per item of its list translation. Returns the number of lists filled.
pub fn fill_lists<S: PreferenceStore>(i18n: &I18n<S>, document: &mut Document) -> usize {
    let mut filled = 0;
    document.body_mut().visit_mut(&mut |el| {
        let Some(items) = el.attr(LIST_ATTRIBUTE).and_then(|key| i18n.list(key)) else {
            return;
        };
        let items: Vec<Element> = items
            .iter()
            .map(|item| Element::new("li").with_text(item.as_str()))
            .collect();
        el.set_children(items);
        filled += 1;
    });
    filled
}
