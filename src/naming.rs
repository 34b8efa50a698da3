//! URL naming: slugs, site routes, and base-path prefixing.
//!
//! Every page lives at a directory-style route ending in `/`, written to
//! `{route}index.html` in the output directory. Routes are relative (no
//! leading slash) until [`BasePath::prefix`] turns them into hrefs:
//!
//! ```text
//! route                                   href (base "my-site")
//! ""                                      /my-site/
//! scratch-and-dent-appliances/            /my-site/scratch-and-dent-appliances/
//! scratch-and-dent-appliances/texas/      /my-site/scratch-and-dent-appliances/texas/
//! ```
//!
//! All links and asset references go through [`BasePath::prefix`] so the
//! generated site works both at a domain root and under a sub-path.

use crate::types::{City, State};
use std::path::PathBuf;

pub const STATES_ROUTE: &str = "scratch-and-dent-appliances/";
pub const ADVERTISE_ROUTE: &str = "advertise-with-us/";
pub const ADD_STORE_ROUTE: &str = "stores/new/";
pub const ABOUT_ROUTE: &str = "about/";
pub const CONTACT_ROUTE: &str = "contact/";

/// Turn a display name into a URL segment.
///
/// Lowercases, collapses each whitespace run into a single `-`, and drops
/// apostrophes. Distinct names can collide (`"O'Fallon"` and `"OFallon"` both
/// become `"ofallon"`); see [`crate::index`] for the collision report.
///
/// - `"New York"` → `"new-york"`
/// - `"  Coeur  d'Alene "` → `"-coeur-dalene-"`
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_space = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('-');
                in_space = true;
            }
            continue;
        }
        in_space = false;
        if c == '\'' {
            continue;
        }
        slug.extend(c.to_lowercase());
    }
    slug
}

pub fn state_route(state: &State) -> String {
    format!("{STATES_ROUTE}{}/", slugify(&state.name))
}

pub fn city_route(state: &State, city: &City) -> String {
    format!("{STATES_ROUTE}{}/{}/", slugify(&state.name), city.slug)
}

/// Output file for a directory-style route.
///
/// Empty, `.` and `..` segments are dropped, so the file always lands
/// inside the output directory.
pub fn route_file(route: &str) -> PathBuf {
    let mut path = PathBuf::new();
    for segment in route
        .split('/')
        .filter(|s| !s.is_empty() && *s != "." && *s != "..")
    {
        path.push(segment);
    }
    path.push("index.html");
    path
}

/// Normalized deployment sub-path.
///
/// Stored as either `""` (domain root) or `/segment[/segment...]` with no
/// trailing slash.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasePath(String);

impl BasePath {
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim().trim_matches('/');
        if trimmed.is_empty() {
            Self(String::new())
        } else {
            Self(format!("/{trimmed}"))
        }
    }

    /// The normalized base, `""` or `/segment`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Site-absolute href for `subpath`.
    ///
    /// - base `""`, `prefix("about/")` → `/about/`
    /// - base `"my-site"`, `prefix("about/")` → `/my-site/about/`
    /// - base `"my-site"`, `prefix("")` → `/my-site/`
    pub fn prefix(&self, subpath: &str) -> String {
        let clean = subpath.trim_start_matches('/');
        format!("{}/{}", self.0, clean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("New York"), "new-york");
        assert_eq!(slugify("North Carolina"), "north-carolina");
    }

    #[test]
    fn slugify_collapses_whitespace_runs() {
        assert_eq!(slugify("San \t  Luis   Obispo"), "san-luis-obispo");
    }

    #[test]
    fn slugify_strips_apostrophes() {
        assert_eq!(slugify("Coeur d'Alene"), "coeur-dalene");
        assert_eq!(slugify("O'Fallon"), slugify("OFallon"));
    }

    #[test]
    fn slugify_keeps_other_punctuation() {
        assert_eq!(slugify("St. Louis"), "st.-louis");
    }

    #[test]
    fn slugify_is_idempotent() {
        for name in [
            "New York",
            "  Coeur  d'Alene ",
            "St. Louis",
            "ÉLAN Springs",
            "a ' b",
            "",
        ] {
            let once = slugify(name);
            assert_eq!(slugify(&once), once, "not idempotent for {name:?}");
        }
    }

    #[test]
    fn base_path_normalizes_slashes() {
        assert_eq!(BasePath::new("my-site").as_str(), "/my-site");
        assert_eq!(BasePath::new("/my-site/").as_str(), "/my-site");
        assert_eq!(BasePath::new("//a/b//").as_str(), "/a/b");
        assert_eq!(BasePath::new("").as_str(), "");
        assert_eq!(BasePath::new("/").as_str(), "");
    }

    #[test]
    fn prefix_with_base() {
        let base = BasePath::new("my-site");
        assert_eq!(base.prefix("about/"), "/my-site/about/");
        assert_eq!(base.prefix("/about/"), "/my-site/about/");
        assert_eq!(base.prefix(""), "/my-site/");
    }

    #[test]
    fn prefix_without_base() {
        let base = BasePath::new("");
        assert_eq!(base.prefix("about/"), "/about/");
        assert_eq!(base.prefix("///assets/js/map.js"), "/assets/js/map.js");
        assert_eq!(base.prefix(""), "/");
    }

    #[test]
    fn prefix_root_has_single_trailing_slash() {
        for raw in ["", "/", "//", "site", "/site/", "a/b/", "///x///"] {
            let href = BasePath::new(raw).prefix("");
            assert!(href.ends_with('/'), "{raw:?} → {href}");
            assert!(!href.ends_with("//"), "{raw:?} → {href}");
            assert!(!href.contains("//"), "{raw:?} → {href}");
        }
    }

    #[test]
    fn routes_for_state_and_city() {
        let state = State {
            code: "NY".into(),
            name: "New York".into(),
            stores_count: 0,
            cities_count: 0,
        };
        let city = City {
            name: "Buffalo".into(),
            state: "NY".into(),
            slug: "buffalo".into(),
            stores_count: 0,
            center: [0.0, 0.0],
        };
        assert_eq!(state_route(&state), "scratch-and-dent-appliances/new-york/");
        assert_eq!(
            city_route(&state, &city),
            "scratch-and-dent-appliances/new-york/buffalo/"
        );
    }

    #[test]
    fn route_file_maps_to_index_html() {
        assert_eq!(route_file(""), PathBuf::from("index.html"));
        assert_eq!(route_file("about/"), PathBuf::from("about/index.html"));
        assert_eq!(
            route_file("scratch-and-dent-appliances/texas/austin/"),
            PathBuf::from("scratch-and-dent-appliances/texas/austin/index.html")
        );
    }

    #[test]
    fn route_file_stays_inside_output_dir() {
        assert_eq!(
            route_file("scratch-and-dent-appliances/texas/../../../../outside/"),
            PathBuf::from("scratch-and-dent-appliances/texas/outside/index.html")
        );
        assert_eq!(route_file("./../"), PathBuf::from("index.html"));
        let path = route_file("a/./b/../c/");
        assert!(
            path.components()
                .all(|c| matches!(c, std::path::Component::Normal(_))),
            "{}",
            path.display()
        );
    }
}
