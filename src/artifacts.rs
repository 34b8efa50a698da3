//! Non-HTML outputs: `search.json`, `sitemap.xml`, `robots.txt`.
//!
//! All three are derived from the same route table, [`site_routes`], which
//! lists every generated page in sitemap order:
//!
//! 1. home
//! 2. states index
//! 3. each state, input order
//! 4. each city, input order
//! 5. advertise, add store, about, contact
//!
//! Locations are site-absolute hrefs, or full URLs when `site.url` is set.

use crate::config::SiteConfig;
use crate::index::SiteIndex;
use crate::naming::{
    self, ABOUT_ROUTE, ADD_STORE_ROUTE, ADVERTISE_ROUTE, BasePath, CONTACT_ROUTE, STATES_ROUTE,
};
use chrono::NaiveDate;
use maud::html;
use serde::Serialize;

pub const SEARCH_FILE: &str = "search.json";
pub const SITEMAP_FILE: &str = "sitemap.xml";
pub const ROBOTS_FILE: &str = "robots.txt";

/// Every page route, in sitemap order.
pub fn site_routes(index: &SiteIndex) -> Vec<String> {
    let mut routes = vec![String::new(), STATES_ROUTE.to_string()];
    routes.extend(index.states().iter().map(naming::state_route));
    routes.extend(
        index
            .cities_with_states()
            .map(|(state, city)| naming::city_route(state, city)),
    );
    routes.extend(
        [ADVERTISE_ROUTE, ADD_STORE_ROUTE, ABOUT_ROUTE, CONTACT_ROUTE]
            .into_iter()
            .map(String::from),
    );
    routes
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    State,
    City,
}

/// One record in `search.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchEntry {
    /// `state-{code}` or `city-{code}-{slug}`.
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Site-absolute href, always relative to the host.
    pub url: String,
}

/// States (input order) followed by cities (input order).
pub fn search_entries(index: &SiteIndex, base: &BasePath) -> Vec<SearchEntry> {
    let states = index.states().iter().map(|state| SearchEntry {
        id: format!("state-{}", state.code),
        title: state.name.clone(),
        kind: EntryKind::State,
        url: base.prefix(&naming::state_route(state)),
    });
    let cities = index.cities_with_states().map(|(state, city)| SearchEntry {
        id: format!("city-{}-{}", city.state, city.slug),
        title: format!("{}, {}", city.name, city.state),
        kind: EntryKind::City,
        url: base.prefix(&naming::city_route(state, city)),
    });
    states.chain(cities).collect()
}

/// `search.json` contents: a pretty-printed array.
pub fn search_json(entries: &[SearchEntry]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(entries)
}

/// Locations for every route, absolute when `site.url` is configured.
pub fn sitemap_locations(index: &SiteIndex, config: &SiteConfig, base: &BasePath) -> Vec<String> {
    site_routes(index)
        .iter()
        .map(|route| config.absolute_url(&base.prefix(route)))
        .collect()
}

pub fn render_sitemap(locations: &[String], lastmod: NaiveDate) -> String {
    let lastmod = lastmod.format("%Y-%m-%d").to_string();
    let body = html! {
        urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9" {
            @for loc in locations {
                url { loc { (loc) } lastmod { (lastmod) } }
            }
        }
    };
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{}\n",
        body.into_string()
    )
}

pub fn render_robots(config: &SiteConfig, base: &BasePath) -> String {
    format!(
        "User-agent: *\nAllow: /\nSitemap: {}\n",
        config.absolute_url(&base.prefix(SITEMAP_FILE))
    )
}
