//! Normalized directory records shared by every pipeline stage.
//!
//! These are produced once by [`crate::data`] from the raw JSON inputs and
//! held read-only for the rest of the run. Optional input fields have already
//! been defaulted here, so page builders never deal with missing values.

use serde::Serialize;

/// A `[latitude, longitude]` pair.
pub type Coords = [f64; 2];

/// A US state (or territory) with its upstream-computed counters.
///
/// `stores_count` and `cities_count` are trusted as-is and never
/// cross-checked against the actual city and store records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct State {
    /// Two-letter code, unique across the dataset.
    pub code: String,
    /// Display name, unique across the dataset.
    pub name: String,
    pub stores_count: u32,
    pub cities_count: u32,
}

/// A city. Its identity within the dataset is the `(state, slug)` pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct City {
    pub name: String,
    /// References [`State::code`].
    pub state: String,
    /// URL segment, unique within its state.
    pub slug: String,
    pub stores_count: u32,
    pub center: Coords,
}

/// Appliance categories a store carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Categories {
    pub refrigerators: bool,
    pub washers_dryers: bool,
    pub stoves_ranges: bool,
    pub dishwashers: bool,
}

impl Categories {
    /// Display labels of the carried categories, in fixed order.
    pub fn labels(&self) -> Vec<&'static str> {
        Category::ALL
            .iter()
            .filter(|c| self.has(**c))
            .map(|c| c.label())
            .collect()
    }

    pub fn has(&self, category: Category) -> bool {
        match category {
            Category::Refrigerators => self.refrigerators,
            Category::WashersDryers => self.washers_dryers,
            Category::StovesRanges => self.stoves_ranges,
            Category::Dishwashers => self.dishwashers,
        }
    }

    /// Per-key logical OR of two category sets.
    pub fn union(self, other: Categories) -> Categories {
        Categories {
            refrigerators: self.refrigerators || other.refrigerators,
            washers_dryers: self.washers_dryers || other.washers_dryers,
            stoves_ranges: self.stoves_ranges || other.stoves_ranges,
            dishwashers: self.dishwashers || other.dishwashers,
        }
    }
}

/// The four tallied appliance categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Refrigerators,
    WashersDryers,
    StovesRanges,
    Dishwashers,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Refrigerators,
        Category::WashersDryers,
        Category::StovesRanges,
        Category::Dishwashers,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Refrigerators => "Refrigerators",
            Category::WashersDryers => "Washers & Dryers",
            Category::StovesRanges => "Stoves & Ranges",
            Category::Dishwashers => "Dishwashers",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Services {
    pub delivery: bool,
    pub install: bool,
}

impl Services {
    pub fn labels(&self) -> Vec<&'static str> {
        let mut labels = Vec::new();
        if self.delivery {
            labels.push("Delivery");
        }
        if self.install {
            labels.push("Install");
        }
        labels
    }
}

/// A store listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Store {
    /// Unique id, used for page anchors (`#store-{id}`).
    pub id: String,
    pub name: String,
    /// References [`State::code`].
    pub state: String,
    /// References [`City::slug`] within `state`.
    pub city_slug: String,
    pub address: String,
    pub phone: String,
    pub website: String,
    pub coords: Coords,
    pub categories: Categories,
    pub services: Services,
    /// Opening hours exactly as supplied (`{"mon": ["09:00", "17:00"], ...}`).
    ///
    /// Kept raw because the browser-side evaluator consumes it verbatim;
    /// see [`crate::hours`] for the parsed form.
    pub hours: serde_json::Value,
    pub featured: bool,
}

/// The three record collections, in input order.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub states: Vec<State>,
    pub cities: Vec<City>,
    pub stores: Vec<Store>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_labels_follow_fixed_order() {
        let cats = Categories {
            dishwashers: true,
            refrigerators: true,
            ..Default::default()
        };
        assert_eq!(cats.labels(), vec!["Refrigerators", "Dishwashers"]);
    }

    #[test]
    fn union_is_per_key_or() {
        let a = Categories {
            refrigerators: true,
            ..Default::default()
        };
        let b = Categories {
            refrigerators: true,
            stoves_ranges: true,
            ..Default::default()
        };
        let merged = a.union(b);
        assert!(merged.refrigerators);
        assert!(merged.stoves_ranges);
        assert!(!merged.washers_dryers);
        assert!(!merged.dishwashers);
    }

    #[test]
    fn services_labels() {
        assert!(Services::default().labels().is_empty());
        let both = Services {
            delivery: true,
            install: true,
        };
        assert_eq!(both.labels(), vec!["Delivery", "Install"]);
    }
}
