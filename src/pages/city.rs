//! City pages: store listings with map, KPIs and open-now badges.
//!
//! Featured stores are listed first; otherwise input order is kept. The
//! page carries two client-side contracts:
//!
//! - an inline script defining `window.cityCenter` and `window.storeMarkers`
//!   (id, name, address, coords per store, in listing order), read by
//!   `assets/js/map.js`; each card's "Show on map" link carries its
//!   position in that array as `data-idx`
//! - a `data-hours` attribute on each `.store-card` holding the raw
//!   schedule JSON, read by `assets/js/hours.js`

use super::{PageContext, PageKind, PageMeta, RenderedPage, script_json};
use crate::naming;
use crate::types::{City, State, Store};
use maud::{Markup, PreEscaped, html};
use serde_json::json;

const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.3/dist/leaflet.js";
const LEAFLET_JS_SRI: &str = "sha256-DtkscE02c5HqYbeNT9+7yAL+PUE0uAt2E11tdgkYfCY=";
const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.3/dist/leaflet.css";
const LEAFLET_CSS_SRI: &str = "sha256-sA+4dM+b3kDCejM27C1lRs7Uib6kVrknv0N1tEYtA38=";

/// Per-city counters shown as chips above the listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CityKpis {
    pub stores: usize,
    pub delivery: usize,
    pub install: usize,
}

impl CityKpis {
    pub fn from_stores(stores: &[&Store]) -> Self {
        Self {
            stores: stores.len(),
            delivery: stores.iter().filter(|s| s.services.delivery).count(),
            install: stores.iter().filter(|s| s.services.install).count(),
        }
    }
}

/// Featured stores first, relative order otherwise preserved.
pub fn featured_first<'a>(mut stores: Vec<&'a Store>) -> Vec<&'a Store> {
    stores.sort_by_key(|s| !s.featured);
    stores
}

/// The inline script consumed by the map renderer.
pub fn map_data_script(city: &City, stores: &[&Store]) -> Markup {
    let markers: Vec<_> = stores
        .iter()
        .map(|s| {
            json!({
                "id": s.id,
                "name": s.name,
                "address": s.address,
                "coords": s.coords,
            })
        })
        .collect();
    let center = json!(city.center);
    let markers = serde_json::Value::Array(markers);
    html! {
        script {
            (PreEscaped(format!(
                "window.cityCenter = {};\nwindow.storeMarkers = {};",
                script_json(&center),
                script_json(&markers)
            )))
        }
    }
}

fn store_card(idx: usize, store: &Store) -> Markup {
    let products = store.categories.labels();
    let services = store.services.labels();
    html! {
        div.card.store-card id={ "store-" (store.id) } data-hours=(store.hours.to_string()) {
            h3 {
                (store.name)
                @if store.featured {
                    " " span.badge.featured { "Featured" }
                }
            }
            p { (store.address) }
            p {
                a href={ "tel:" (store.phone) } { (store.phone) }
                " | "
                a href=(store.website) target="_blank" rel="noopener" { "Website" }
            }
            p {
                "Products: "
                @if products.is_empty() { "N/A" } @else { (products.join(", ")) }
            }
            p {
                "Services: "
                @if services.is_empty() { "None" } @else { (services.join(", ")) }
            }
            p { "Status: " span.open-status { "Checking…" } }
            p { a.show-on-map href="#" data-idx=(idx) { "Show on map" } }
        }
    }
}

pub fn render_city_page(ctx: &PageContext, state: &State, city: &City) -> RenderedPage {
    let route = naming::city_route(state, city);
    let stores = featured_first(ctx.index.stores_in(&city.state, &city.slug));
    let kpis = CityKpis::from_stores(&stores);
    let place = format!("{}, {}", city.name, state.code);

    let content = html! {
        div.container {
            h1 { (place) }
            p {
                "Looking for discount appliances in " (place) "? Save big on refrigerators, "
                "washers and dryers, ranges and more when you shop scratch & dent. Expect "
                "savings from 30–70% off full retail prices at the stores listed below."
            }
            div.kpi {
                span.chip { (kpis.stores) " stores" }
                span.chip { (kpis.delivery) " offer delivery" }
                span.chip { (kpis.install) " offer install" }
            }
            nav.quick-nav aria-label="Quick navigation" {
                h2 { "Quick Navigation" }
                ul {
                    @for store in &stores {
                        li { a href={ "#store-" (store.id) } { (store.name) } }
                    }
                }
            }
            div #map.map-container aria-label="Map of stores" {}
            div.grid.grid-3 {
                @for (idx, store) in stores.iter().enumerate() {
                    (store_card(idx, store))
                }
            }
        }
    };

    let businesses: Vec<_> = stores
        .iter()
        .map(|store| {
            json!({
                "@type": "LocalBusiness",
                "name": store.name,
                "telephone": store.phone,
                "address": {
                    "@type": "PostalAddress",
                    "streetAddress": store.address,
                    "addressLocality": city.name,
                    "addressRegion": city.state,
                    "addressCountry": "US",
                },
                "geo": {
                    "@type": "GeoCoordinates",
                    "latitude": store.coords[0],
                    "longitude": store.coords[1],
                },
                "url": store.website,
            })
        })
        .collect();
    let json_ld = json!({
        "@context": "https://schema.org",
        "@type": "ItemList",
        "name": format!("{place} scratch & dent stores"),
        "itemListElement": businesses,
    });

    let extra_scripts = html! {
        (map_data_script(city, &stores))
        script src=(LEAFLET_JS) integrity=(LEAFLET_JS_SRI) crossorigin="" {}
        link rel="stylesheet" href=(LEAFLET_CSS) integrity=(LEAFLET_CSS_SRI) crossorigin="";
        script src=(ctx.href("assets/js/map.js")) defer {}
        script src=(ctx.href("assets/js/hours.js")) defer {}
    };

    let title = format!("{place} Scratch & Dent Appliance Stores");
    ctx.finish(
        PageKind::City,
        place.clone(),
        route,
        PageMeta {
            og_title: title.clone(),
            title,
            og_description: format!("Discover discount appliance outlets in {place}."),
        },
        content,
        Some(json_ld),
        extra_scripts,
    )
}
