//! The A–Z states index and one page per state.

use super::{PageContext, PageKind, PageMeta, RenderedPage};
use crate::index::compare_names;
use crate::naming::{self, STATES_ROUTE};
use crate::types::{City, State};
use maud::html;
use serde_json::json;
use std::collections::BTreeMap;

/// Group states (already sorted by name) under the uppercased first letter
/// of their name.
pub fn group_by_letter<'a>(states: &[&'a State]) -> BTreeMap<String, Vec<&'a State>> {
    let mut groups: BTreeMap<String, Vec<&State>> = BTreeMap::new();
    for &state in states {
        let letter = state
            .name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "#".to_string());
        groups.entry(letter).or_default().push(state);
    }
    groups
}

pub fn render_states_index(ctx: &PageContext) -> RenderedPage {
    let states = ctx.index.states_alphabetical();
    let groups = group_by_letter(&states);

    let content = html! {
        div.container {
            h1 { "Browse States" }
            p {
                "Explore scratch & dent appliance outlets across the nation. "
                "Select a state to see participating cities and stores."
            }
            p.letter-nav {
                @for (i, letter) in groups.keys().enumerate() {
                    @if i > 0 { " | " }
                    a href={ "#" (letter) } { (letter) }
                }
            }
            @for (letter, members) in &groups {
                h3 id=(letter) { (letter) }
                ul {
                    @for state in members {
                        li {
                            a href=(ctx.href(&naming::state_route(state))) { (state.name) }
                            " – " (state.cities_count) " cities, " (state.stores_count) " stores"
                        }
                    }
                }
            }
        }
    };

    let items: Vec<_> = states
        .iter()
        .enumerate()
        .map(|(i, state)| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": state.name,
                "url": ctx.url(&naming::state_route(state)),
            })
        })
        .collect();
    let json_ld = json!({
        "@context": "https://schema.org",
        "@type": "ItemList",
        "itemListElement": items,
    });

    ctx.finish(
        PageKind::StatesIndex,
        "Browse States",
        STATES_ROUTE.to_string(),
        PageMeta {
            title: format!("Browse States – {}", ctx.site_name()),
            og_title: "Browse States".to_string(),
            og_description: "Select your state to find scratch and dent appliance stores."
                .to_string(),
        },
        content,
        Some(json_ld),
        html! {},
    )
}

/// A state's cities sorted by name.
pub fn sorted_cities<'a>(ctx: &PageContext<'a>, state: &State) -> Vec<&'a City> {
    let mut cities = ctx.index.cities_in(&state.code);
    cities.sort_by(|a, b| compare_names(&a.name, &b.name));
    cities
}

pub fn render_state_page(ctx: &PageContext, state: &State) -> RenderedPage {
    let route = naming::state_route(state);
    let cities = sorted_cities(ctx, state);
    let search_label = format!("Find cities in {}", state.name);

    let content = html! {
        div.container {
            h1 { (state.name) " Scratch & Dent Appliance Stores" }
            p {
                (state.name) " has " (cities.len()) " participating cities and "
                (state.stores_count) " scratch & dent appliance stores in our directory. "
                "Use the search box to find your city below."
            }
            div.search-input {
                input type="text" id="city-search" placeholder=(search_label) aria-label=(search_label);
            }
            div.grid.grid-3 id="city-list" {
                @for city in &cities {
                    div.card.city-card data-name=(city.name) id=(city.slug) {
                        h3 { (city.name) }
                        p { (city.stores_count) " stores" }
                        p { a href=(ctx.href(&naming::city_route(state, city))) { "View stores" } }
                    }
                }
            }
        }
    };

    let items: Vec<_> = cities
        .iter()
        .enumerate()
        .map(|(i, city)| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": format!("{}, {}", city.name, state.code),
                "url": ctx.url(&naming::city_route(state, city)),
            })
        })
        .collect();
    let json_ld = json!({
        "@context": "https://schema.org",
        "@type": "ItemList",
        "name": format!("{} cities", state.name),
        "itemListElement": items,
    });

    let title = format!("{} Scratch & Dent Appliance Stores", state.name);
    ctx.finish(
        PageKind::State,
        state.name.clone(),
        route,
        PageMeta {
            og_title: title.clone(),
            title,
            og_description: format!("Find scratch and dent appliance outlets in {}.", state.name),
        },
        content,
        Some(json_ld),
        html! {
            script src=(ctx.href("assets/js/search.js")) defer {}
        },
    )
}
