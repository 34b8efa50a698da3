//! Shared test utilities for the sd-locator test suite.
//!
//! Provides record builders, the fixture dataset under `fixtures/data/`, and
//! a ready-to-render [`TestSite`].
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let site = TestSite::fixtures();
//! let page = render_home(&site.context());
//! assert!(page.html.contains("<h2>7</h2><p>Stores</p>"));
//! ```
//!
//! Fixture summary:
//!
//! ```text
//! TX Texas           Austin (stores 1, 2 featured, tx-3 overnight), Dallas (4 featured)
//! CA California      San Diego (6, malformed hours), Los Angeles (5)
//! NY New York        New York (no stores)
//! NC North Carolina  no cities
//! orphan             store 7, TX/houston
//! ```

use std::path::PathBuf;

use crate::config::SiteConfig;
use crate::data::load_dataset;
use crate::index::SiteIndex;
use crate::naming::BasePath;
use crate::pages::PageContext;
use crate::pages::chrome::SiteChrome;
use crate::template::Layout;
use crate::types::{City, State, Store};

// =========================================================================
// Fixtures
// =========================================================================

/// `fixtures/data/`, holding `states.json`, `cities.json`, `stores.json`.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/data")
}

/// The fixture dataset, loaded and indexed.
pub fn fixture_index() -> SiteIndex {
    let dataset = load_dataset(&fixtures_dir()).unwrap();
    SiteIndex::build(dataset).unwrap()
}

// =========================================================================
// Record builders
// =========================================================================

pub fn state(code: &str, name: &str, stores_count: u32, cities_count: u32) -> State {
    State {
        code: code.to_string(),
        name: name.to_string(),
        stores_count,
        cities_count,
    }
}

pub fn city(name: &str, state: &str, slug: &str) -> City {
    City {
        name: name.to_string(),
        state: state.to_string(),
        slug: slug.to_string(),
        stores_count: 0,
        center: [0.0, 0.0],
    }
}

/// A store with no categories, services or hours.
pub fn store(id: &str, state: &str, city_slug: &str, featured: bool) -> Store {
    Store {
        id: id.to_string(),
        name: format!("Store {id}"),
        state: state.to_string(),
        city_slug: city_slug.to_string(),
        address: String::new(),
        phone: String::new(),
        website: String::new(),
        coords: [0.0, 0.0],
        categories: Default::default(),
        services: Default::default(),
        hours: serde_json::json!({}),
        featured,
    }
}

// =========================================================================
// Rendering context
// =========================================================================

/// Owned inputs for a [`PageContext`].
///
/// Chrome and layout are built once from the initial config and base, so
/// later edits to `config` or `base` only reach what builders read through
/// the context directly.
pub struct TestSite {
    pub index: SiteIndex,
    pub config: SiteConfig,
    pub base: BasePath,
    pub chrome: SiteChrome,
    pub layout: Layout,
}

impl TestSite {
    /// The fixture dataset with stock config and no base path.
    pub fn fixtures() -> Self {
        let index = fixture_index();
        let config = SiteConfig::default();
        let base = BasePath::default();
        let chrome = SiteChrome::build(&index, &config, &base);
        let layout = Layout::embedded(&config.site.analytics_id, base.as_str());
        Self {
            index,
            config,
            base,
            chrome,
            layout,
        }
    }

    pub fn context(&self) -> PageContext<'_> {
        PageContext {
            index: &self.index,
            config: &self.config,
            base: &self.base,
            chrome: &self.chrome,
            layout: &self.layout,
        }
    }
}
