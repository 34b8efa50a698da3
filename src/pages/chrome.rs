//! Header and footer shared by every page.
//!
//! Both are rendered once per build from the indexed dataset and handed to
//! each builder through [`super::PageContext`].

use crate::config::SiteConfig;
use crate::index::SiteIndex;
use crate::naming::{
    self, ABOUT_ROUTE, ADD_STORE_ROUTE, ADVERTISE_ROUTE, BasePath, CONTACT_ROUTE, STATES_ROUTE,
};
use crate::types::State;
use maud::{Markup, html};

/// Number of states listed under "Popular States".
pub const POPULAR_STATES: usize = 5;

/// Primary navigation, in display order.
pub const NAV_LINKS: [(&str, &str); 5] = [
    ("Home", ""),
    ("Browse States", STATES_ROUTE),
    ("Advertise", ADVERTISE_ROUTE),
    ("About", ABOUT_ROUTE),
    ("Contact", CONTACT_ROUTE),
];

#[derive(Debug, Clone)]
pub struct SiteChrome {
    pub header: String,
    pub footer: String,
}

impl SiteChrome {
    pub fn build(index: &SiteIndex, config: &SiteConfig, base: &BasePath) -> Self {
        Self {
            header: render_header(&config.site.name, base).into_string(),
            footer: render_footer(index, base).into_string(),
        }
    }
}

fn render_header(site_name: &str, base: &BasePath) -> Markup {
    html! {
        header.site-header {
            div.container {
                a.logo href=(base.prefix("")) { (site_name) }
                nav.site-nav {
                    @for (label, route) in NAV_LINKS {
                        a href=(base.prefix(route)) { (label) }
                    }
                    a.btn-add href=(base.prefix(ADD_STORE_ROUTE)) { "Add Your Store" }
                }
            }
        }
    }
}

fn render_footer(index: &SiteIndex, base: &BasePath) -> Markup {
    let state_link = |state: &State| {
        html! {
            li { a href=(base.prefix(&naming::state_route(state))) { (state.name) } }
        }
    };

    html! {
        footer {
            div.container.footer-inner {
                div {
                    h4 { "Quick Links" }
                    ul {
                        @for (label, route) in NAV_LINKS {
                            li { a href=(base.prefix(route)) { (label) } }
                        }
                        li { a href=(base.prefix(ADD_STORE_ROUTE)) { "Add Your Store" } }
                    }
                }
                div {
                    h4 { "Popular States" }
                    ul {
                        @for state in index.top_states(POPULAR_STATES) {
                            (state_link(state))
                        }
                    }
                }
                div {
                    h4 { "Browse by State" }
                    ul {
                        @for state in index.states_alphabetical() {
                            (state_link(state))
                        }
                    }
                }
            }
        }
    }
}
