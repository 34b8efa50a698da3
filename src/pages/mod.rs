//! Page builders.
//!
//! Each builder is a pure function from the indexed dataset to a
//! [`RenderedPage`]: the route it lives at plus the finished HTML document.
//! Builders never touch the filesystem; [`crate::generate`] writes the pages.
//!
//! Fragments are built with [maud](https://maud.lambda.xyz/), which escapes
//! every interpolated value, and then substituted into the site layout by
//! [`crate::template::Layout`].
//!
//! | Builder | Route |
//! |---------|-------|
//! | [`home::render_home`] | `/` |
//! | [`states::render_states_index`] | `/scratch-and-dent-appliances/` |
//! | [`states::render_state_page`] | `/scratch-and-dent-appliances/{state}/` |
//! | [`city::render_city_page`] | `/scratch-and-dent-appliances/{state}/{city}/` |
//! | [`forms::render_advertise`] | `/advertise-with-us/` |
//! | [`forms::render_add_store`] | `/stores/new/` |
//! | [`info::render_about`] | `/about/` |
//! | [`info::render_contact`] | `/contact/` |

pub mod chrome;
pub mod city;
pub mod forms;
pub mod home;
pub mod info;
pub mod states;

use crate::config::SiteConfig;
use crate::index::SiteIndex;
use crate::naming::BasePath;
use crate::template::{Layout, PageParts};
use chrome::SiteChrome;
use maud::{Markup, PreEscaped, html};

/// What a page is, for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Home,
    StatesIndex,
    State,
    City,
    Advertise,
    AddStore,
    About,
    Contact,
}

/// A finished page.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub kind: PageKind,
    /// Short display label (`"Texas"`, `"Austin, TX"`).
    pub label: String,
    /// Directory-style route relative to the site root.
    pub route: String,
    pub html: String,
}

/// Everything a builder reads. Built once per run and passed explicitly.
pub struct PageContext<'a> {
    pub index: &'a SiteIndex,
    pub config: &'a SiteConfig,
    pub base: &'a BasePath,
    pub chrome: &'a SiteChrome,
    pub layout: &'a Layout,
}

/// Head metadata for one page.
pub(crate) struct PageMeta {
    pub title: String,
    pub og_title: String,
    pub og_description: String,
}

impl<'a> PageContext<'a> {
    /// Site-absolute href for a route, honoring the base path.
    pub fn href(&self, route: &str) -> String {
        self.base.prefix(route)
    }

    /// Fully qualified URL when `site.url` is configured, else the href.
    pub fn url(&self, route: &str) -> String {
        self.config.absolute_url(&self.href(route))
    }

    pub fn site_name(&self) -> &str {
        &self.config.site.name
    }

    /// Wrap `content` in the layout with the shared header and footer.
    pub(crate) fn finish(
        &self,
        kind: PageKind,
        label: impl Into<String>,
        route: String,
        meta: PageMeta,
        content: Markup,
        json_ld: Option<serde_json::Value>,
        extra_scripts: Markup,
    ) -> RenderedPage {
        let parts = PageParts {
            title: escape(&meta.title),
            canonical: escape(&self.url(&route)),
            og_title: escape(&meta.og_title),
            og_description: escape(&meta.og_description),
            header: self.chrome.header.clone(),
            content: content.into_string(),
            footer: self.chrome.footer.clone(),
            json_ld: json_ld
                .map(|v| json_ld_script(&v).into_string())
                .unwrap_or_default(),
            extra_scripts: extra_scripts.into_string(),
        };
        RenderedPage {
            kind,
            label: label.into(),
            route,
            html: self.layout.render(&parts),
        }
    }
}

/// HTML-escape text for direct substitution into the layout.
pub fn escape(text: &str) -> String {
    html! { (text) }.into_string()
}

/// Serialize JSON for embedding inside a `<script>` element.
///
/// `</` is written as `<\/` so record text cannot close the element early.
pub fn script_json(value: &serde_json::Value) -> String {
    value.to_string().replace("</", "<\\/")
}

/// A `<script type="application/ld+json">` block.
pub fn json_ld_script(value: &serde_json::Value) -> Markup {
    html! {
        script type="application/ld+json" { (PreEscaped(script_json(value))) }
    }
}
