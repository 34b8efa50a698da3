//! Lookup structures and aggregate counters over the loaded dataset.
//!
//! Stage 2 of the build. [`SiteIndex::build`] makes one pass over each
//! collection and produces:
//!
//! - state code → state
//! - state code → cities of that state (input order)
//! - `(state code, city slug)` → stores of that city (input order)
//! - totals for the four appliance categories
//!
//! Every city must reference a known state; that is the only hard check.
//! Stores whose `(state, city_slug)` matches no city are kept in the global
//! totals but appear on no city page. They are reported by
//! [`SiteIndex::orphan_stores`], alongside [`SiteIndex::slug_collisions`],
//! for the `check` command.

use crate::hours::{HoursError, OpeningHours};
use crate::naming;
use crate::types::{Category, City, Dataset, State, Store};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum IndexError {
    #[error("City '{city}' references unknown state code '{state}'")]
    UnknownState { city: String, state: String },
}

/// How many stores carry each category. A store counts once per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryTotals {
    pub refrigerators: usize,
    pub washers_dryers: usize,
    pub stoves_ranges: usize,
    pub dishwashers: usize,
}

impl CategoryTotals {
    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Refrigerators => self.refrigerators,
            Category::WashersDryers => self.washers_dryers,
            Category::StovesRanges => self.stoves_ranges,
            Category::Dishwashers => self.dishwashers,
        }
    }

    fn add(&mut self, store: &Store) {
        let cats = &store.categories;
        self.refrigerators += cats.refrigerators as usize;
        self.washers_dryers += cats.washers_dryers as usize;
        self.stoves_ranges += cats.stoves_ranges as usize;
        self.dishwashers += cats.dishwashers as usize;
    }
}

/// Two or more entities that resolve to the same page route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugCollision {
    pub route: String,
    pub names: Vec<String>,
}

#[derive(Debug)]
pub struct SiteIndex {
    dataset: Dataset,
    state_by_code: HashMap<String, usize>,
    /// Parallel to `dataset.cities`: index of each city's state.
    city_state: Vec<usize>,
    cities_by_state: HashMap<String, Vec<usize>>,
    stores_by_city: HashMap<(String, String), Vec<usize>>,
    category_totals: CategoryTotals,
}

impl SiteIndex {
    pub fn build(dataset: Dataset) -> Result<Self, IndexError> {
        let mut state_by_code = HashMap::new();
        for (i, state) in dataset.states.iter().enumerate() {
            state_by_code.insert(state.code.clone(), i);
        }

        let mut city_state = Vec::with_capacity(dataset.cities.len());
        let mut cities_by_state: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, city) in dataset.cities.iter().enumerate() {
            let state_idx = *state_by_code.get(&city.state).ok_or_else(|| {
                IndexError::UnknownState {
                    city: city.name.clone(),
                    state: city.state.clone(),
                }
            })?;
            city_state.push(state_idx);
            cities_by_state
                .entry(city.state.clone())
                .or_default()
                .push(i);
        }

        let mut stores_by_city: HashMap<(String, String), Vec<usize>> = HashMap::new();
        let mut category_totals = CategoryTotals::default();
        for (i, store) in dataset.stores.iter().enumerate() {
            stores_by_city
                .entry((store.state.clone(), store.city_slug.clone()))
                .or_default()
                .push(i);
            category_totals.add(store);
        }

        Ok(Self {
            dataset,
            state_by_code,
            city_state,
            cities_by_state,
            stores_by_city,
            category_totals,
        })
    }

    pub fn states(&self) -> &[State] {
        &self.dataset.states
    }

    pub fn cities(&self) -> &[City] {
        &self.dataset.cities
    }

    pub fn stores(&self) -> &[Store] {
        &self.dataset.stores
    }

    pub fn state(&self, code: &str) -> Option<&State> {
        self.state_by_code.get(code).map(|&i| &self.dataset.states[i])
    }

    /// Every city paired with its state, in input order.
    pub fn cities_with_states(&self) -> impl Iterator<Item = (&State, &City)> {
        self.dataset
            .cities
            .iter()
            .zip(&self.city_state)
            .map(|(city, &s)| (&self.dataset.states[s], city))
    }

    /// Cities of a state, in input order.
    pub fn cities_in(&self, state_code: &str) -> Vec<&City> {
        self.cities_by_state
            .get(state_code)
            .map(|ids| ids.iter().map(|&i| &self.dataset.cities[i]).collect())
            .unwrap_or_default()
    }

    /// Stores of a city, in input order.
    pub fn stores_in(&self, state_code: &str, city_slug: &str) -> Vec<&Store> {
        self.stores_by_city
            .get(&(state_code.to_string(), city_slug.to_string()))
            .map(|ids| ids.iter().map(|&i| &self.dataset.stores[i]).collect())
            .unwrap_or_default()
    }

    pub fn category_totals(&self) -> &CategoryTotals {
        &self.category_totals
    }

    /// The `n` states with the most stores. Ties keep input order.
    pub fn top_states(&self, n: usize) -> Vec<&State> {
        let mut states: Vec<&State> = self.dataset.states.iter().collect();
        states.sort_by(|a, b| b.stores_count.cmp(&a.stores_count));
        states.truncate(n);
        states
    }

    /// All states sorted by display name.
    pub fn states_alphabetical(&self) -> Vec<&State> {
        let mut states: Vec<&State> = self.dataset.states.iter().collect();
        states.sort_by(|a, b| compare_names(&a.name, &b.name));
        states
    }

    /// Stores whose `(state, city_slug)` matches no city.
    pub fn orphan_stores(&self) -> Vec<&Store> {
        let known: HashSet<(&str, &str)> = self
            .dataset
            .cities
            .iter()
            .map(|c| (c.state.as_str(), c.slug.as_str()))
            .collect();
        self.dataset
            .stores
            .iter()
            .filter(|s| !known.contains(&(s.state.as_str(), s.city_slug.as_str())))
            .collect()
    }

    /// Routes claimed by more than one state or city.
    ///
    /// Colliding pages overwrite each other in the output directory; the
    /// last one written wins.
    pub fn slug_collisions(&self) -> Vec<SlugCollision> {
        let mut routes: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for state in &self.dataset.states {
            routes
                .entry(naming::state_route(state))
                .or_default()
                .push(state.name.clone());
        }
        for (state, city) in self.cities_with_states() {
            routes
                .entry(naming::city_route(state, city))
                .or_default()
                .push(format!("{}, {}", city.name, state.code));
        }
        routes
            .into_iter()
            .filter(|(_, names)| names.len() > 1)
            .map(|(route, names)| SlugCollision { route, names })
            .collect()
    }

    /// Stores whose opening hours cannot be evaluated, with the reason.
    ///
    /// Such stores still render; their status badge stays at "Checking…".
    pub fn hours_problems(&self) -> Vec<(&Store, HoursError)> {
        self.dataset
            .stores
            .iter()
            .filter_map(|s| OpeningHours::parse(&s.hours).err().map(|e| (s, e)))
            .collect()
    }
}

/// Case-insensitive name ordering with a case-sensitive tie-break.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    #[test]
    fn fixture_index_groups_cities_by_state() {
        let index = fixture_index();
        let names: Vec<&str> = index.cities_in("TX").iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Austin", "Dallas"]);
        assert!(index.cities_in("NC").is_empty());
        assert!(index.cities_in("ZZ").is_empty());
    }

    #[test]
    fn fixture_index_groups_stores_by_city() {
        let index = fixture_index();
        let ids: Vec<&str> = index
            .stores_in("TX", "austin")
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "2", "tx-3"]);
        assert!(index.stores_in("CA", "austin").is_empty());
    }

    #[test]
    fn state_lookup_by_code() {
        let index = fixture_index();
        assert_eq!(index.state("CA").unwrap().name, "California");
        assert!(index.state("ca").is_none());
    }

    #[test]
    fn category_totals_count_each_store_once() {
        let index = fixture_index();
        let totals = index.category_totals();
        // Store 4 marks refrigerators under both keys; it counts once.
        assert_eq!(totals.refrigerators, 3);
        assert_eq!(totals.washers_dryers, 2);
        assert_eq!(totals.stoves_ranges, 2);
        assert_eq!(totals.dishwashers, 2);
        assert_eq!(totals.get(Category::Dishwashers), 2);
    }

    #[test]
    fn category_totals_match_per_store_flags() {
        let index = fixture_index();
        for category in Category::ALL {
            let expected = index
                .stores()
                .iter()
                .filter(|s| s.categories.has(category))
                .count();
            assert_eq!(index.category_totals().get(category), expected);
        }
    }

    #[test]
    fn unknown_state_code_fails() {
        let dataset = Dataset {
            states: vec![state("TX", "Texas", 1, 1)],
            cities: vec![city("Reno", "NV", "reno")],
            stores: vec![],
        };
        let err = SiteIndex::build(dataset).unwrap_err();
        assert_eq!(
            err,
            IndexError::UnknownState {
                city: "Reno".into(),
                state: "NV".into()
            }
        );
    }

    #[test]
    fn top_states_sorted_desc_with_stable_ties() {
        let dataset = Dataset {
            states: vec![
                state("AA", "Alpha", 5, 0),
                state("BB", "Bravo", 9, 0),
                state("CC", "Charlie", 5, 0),
                state("DD", "Delta", 1, 0),
            ],
            ..Default::default()
        };
        let index = SiteIndex::build(dataset).unwrap();
        let codes: Vec<&str> = index.top_states(3).iter().map(|s| s.code.as_str()).collect();
        assert_eq!(codes, vec!["BB", "AA", "CC"]);
        assert_eq!(index.top_states(10).len(), 4);
    }

    #[test]
    fn states_alphabetical_ignores_case() {
        let dataset = Dataset {
            states: vec![
                state("VT", "vermont", 0, 0),
                state("TX", "Texas", 0, 0),
                state("AL", "Alabama", 0, 0),
            ],
            ..Default::default()
        };
        let index = SiteIndex::build(dataset).unwrap();
        let names: Vec<&str> = index
            .states_alphabetical()
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["Alabama", "Texas", "vermont"]);
    }

    #[test]
    fn orphan_stores_are_reported() {
        let index = fixture_index();
        let orphans: Vec<&str> = index.orphan_stores().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(orphans, vec!["Orphan Outlet"]);
    }

    #[test]
    fn no_collisions_in_fixtures() {
        assert!(fixture_index().slug_collisions().is_empty());
    }

    #[test]
    fn slug_collisions_detected() {
        let dataset = Dataset {
            states: vec![
                state("MO", "O'Fallon", 0, 0),
                state("XO", "OFallon", 0, 0),
                state("TX", "Texas", 0, 0),
            ],
            cities: vec![
                city("Austin", "TX", "austin"),
                city("Austin Too", "TX", "austin"),
            ],
            stores: vec![],
        };
        let index = SiteIndex::build(dataset).unwrap();
        let collisions = index.slug_collisions();
        assert_eq!(collisions.len(), 2);
        assert_eq!(collisions[0].route, "scratch-and-dent-appliances/ofallon/");
        assert_eq!(collisions[0].names, vec!["O'Fallon", "OFallon"]);
        assert_eq!(
            collisions[1].route,
            "scratch-and-dent-appliances/texas/austin/"
        );
    }

    #[test]
    fn hours_problems_name_the_store() {
        let index = fixture_index();
        let problems = index.hours_problems();
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].0.name, "Harbor Discount");
        assert_eq!(problems[0].1, HoursError::NotAPair { day: "mon".into() });
    }

    #[test]
    fn cities_with_states_pairs_in_input_order() {
        let index = fixture_index();
        let pairs: Vec<(&str, &str)> = index
            .cities_with_states()
            .map(|(s, c)| (s.code.as_str(), c.slug.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("TX", "austin"),
                ("TX", "dallas"),
                ("CA", "san-diego"),
                ("CA", "los-angeles"),
                ("NY", "new-york"),
            ]
        );
    }
}
