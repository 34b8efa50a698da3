//! Home page: totals, top states, category coverage.

use super::{PageContext, PageKind, PageMeta, RenderedPage};
use crate::naming;
use crate::types::Category;
use maud::html;
use serde_json::json;

/// Number of state cards on the home page.
pub const TOP_STATES: usize = 8;

pub fn render_home(ctx: &PageContext) -> RenderedPage {
    let index = ctx.index;
    let totals = index.category_totals();

    let content = html! {
        section.hero {
            div.container {
                h1 { "Discover Discount Appliances Near You" }
                p { "Browse our scratch & dent directory to find great deals on appliances in your state." }
                div.stats {
                    div.stat { h2 { (index.states().len()) } p { "States" } }
                    div.stat { h2 { (index.cities().len()) } p { "Cities" } }
                    div.stat { h2 { (index.stores().len()) } p { "Stores" } }
                }
            }
        }
        section.container {
            h2 { "Browse Top States" }
            div.grid.grid-3 {
                @for state in index.top_states(TOP_STATES) {
                    div.card {
                        h3 { (state.name) }
                        p { (state.cities_count) " cities, " (state.stores_count) " stores" }
                        p { a href=(ctx.href(&naming::state_route(state))) { "Browse " (state.name) } }
                    }
                }
            }
        }
        section.container {
            h2 { "Popular Appliance Categories" }
            div.grid.grid-4 {
                @for category in Category::ALL {
                    div.card.category-card {
                        h3 { (category.label()) }
                        p { (totals.get(category)) " stores" }
                    }
                }
            }
        }
        section.container {
            h2 { "Why Shop Scratch & Dent?" }
            p {
                "Buying scratch and dent appliances can save you money and keep still-perfectly "
                "working products out of landfills. Our directory helps you discover local "
                "warehouses and outlets offering deep discounts on gently blemished appliances."
            }
            div.grid.grid-3 {
                div.card {
                    h3 { "Big Savings" }
                    p { "Find deals with savings of 30–70% off retail prices on refrigerators, washers & dryers, ranges and more." }
                }
                div.card {
                    h3 { "Support Local" }
                    p { "Shop local businesses and outlets in your state and city – keeping money in your community." }
                }
                div.card {
                    h3 { "Reduce Waste" }
                    p { "Give slightly imperfect appliances a second life and help reduce unnecessary waste." }
                }
            }
        }
    };

    let json_ld = json!({
        "@context": "https://schema.org",
        "@type": "WebSite",
        "name": ctx.site_name(),
        "url": ctx.url(""),
        "description": ctx.config.site.description,
    });

    ctx.finish(
        PageKind::Home,
        "Home",
        String::new(),
        PageMeta {
            title: "Scratch & Dent Appliance Directory".to_string(),
            og_title: "Scratch & Dent Appliance Directory".to_string(),
            og_description: "Find discounted scratch and dent appliances in your state and city."
                .to_string(),
        },
        content,
        Some(json_ld),
        html! {},
    )
}
