//! Data loading and normalization.
//!
//! Stage 1 of the build. Reads the three record collections from the data
//! directory and converts them into the normalized types in [`crate::types`]:
//!
//! ```text
//! data/
//! ├── states.json    # [{code, name, stores_count, cities_count}]
//! ├── cities.json    # [{name, state, slug, stores_count, center}]
//! └── stores.json    # [{id, name, state, city_slug, address, ...}]
//! ```
//!
//! Only JSON well-formedness and the identifying fields are enforced. Every
//! optional store field falls back to an empty value during normalization:
//!
//! | Field | Missing or `null` becomes |
//! |-------|---------------------------|
//! | `phone`, `website`, `address` | `""` |
//! | `coords` | `[0, 0]` |
//! | `categories` / `appliances` | no categories |
//! | `services` | no delivery, no install |
//! | `hours` | `{}` (never open) |
//! | `featured` | `false` |
//!
//! Category data may arrive under `categories`, `appliances`, or both. The two
//! are merged key by key, so downstream code only ever sees
//! [`Store::categories`].

use crate::types::{Categories, City, Coords, Dataset, Services, State, Store};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const STATES_FILE: &str = "states.json";
pub const CITIES_FILE: &str = "cities.json";
pub const STORES_FILE: &str = "stores.json";

#[derive(Error, Debug)]
pub enum DataError {
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("JSON error in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Deserialize)]
struct RawState {
    code: String,
    name: String,
    #[serde(default)]
    stores_count: Option<u32>,
    #[serde(default)]
    cities_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct RawCity {
    name: String,
    state: String,
    slug: String,
    #[serde(default)]
    stores_count: Option<u32>,
    #[serde(default)]
    center: Option<Coords>,
}

/// Store ids appear as both numbers and strings in the wild.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

impl From<RawId> for String {
    fn from(id: RawId) -> Self {
        match id {
            RawId::Number(n) => n.to_string(),
            RawId::Text(s) => s,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawCategories {
    #[serde(default)]
    refrigerators: Option<bool>,
    #[serde(default)]
    washers_dryers: Option<bool>,
    #[serde(default)]
    stoves_ranges: Option<bool>,
    #[serde(default)]
    dishwashers: Option<bool>,
}

impl From<RawCategories> for Categories {
    fn from(raw: RawCategories) -> Self {
        Categories {
            refrigerators: raw.refrigerators.unwrap_or(false),
            washers_dryers: raw.washers_dryers.unwrap_or(false),
            stoves_ranges: raw.stoves_ranges.unwrap_or(false),
            dishwashers: raw.dishwashers.unwrap_or(false),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawServices {
    #[serde(default)]
    delivery: Option<bool>,
    #[serde(default)]
    install: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct RawStore {
    id: RawId,
    name: String,
    state: String,
    city_slug: String,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    website: Option<String>,
    #[serde(default)]
    coords: Option<Coords>,
    #[serde(default)]
    categories: Option<RawCategories>,
    #[serde(default)]
    appliances: Option<RawCategories>,
    #[serde(default)]
    services: Option<RawServices>,
    #[serde(default)]
    hours: Option<serde_json::Value>,
    #[serde(default)]
    featured: Option<bool>,
}

impl From<RawState> for State {
    fn from(raw: RawState) -> Self {
        State {
            code: raw.code,
            name: raw.name,
            stores_count: raw.stores_count.unwrap_or(0),
            cities_count: raw.cities_count.unwrap_or(0),
        }
    }
}

impl From<RawCity> for City {
    fn from(raw: RawCity) -> Self {
        City {
            name: raw.name,
            state: raw.state,
            slug: raw.slug,
            stores_count: raw.stores_count.unwrap_or(0),
            center: raw.center.unwrap_or([0.0, 0.0]),
        }
    }
}

impl From<RawStore> for Store {
    fn from(raw: RawStore) -> Self {
        let categories = Categories::from(raw.categories.unwrap_or_default())
            .union(raw.appliances.unwrap_or_default().into());
        let services = raw.services.unwrap_or_default();
        let hours = match raw.hours {
            Some(value @ serde_json::Value::Object(_)) => value,
            _ => serde_json::Value::Object(Default::default()),
        };
        Store {
            id: raw.id.into(),
            name: raw.name,
            state: raw.state,
            city_slug: raw.city_slug,
            address: raw.address.unwrap_or_default(),
            phone: raw.phone.unwrap_or_default(),
            website: raw.website.unwrap_or_default(),
            coords: raw.coords.unwrap_or([0.0, 0.0]),
            categories,
            services: Services {
                delivery: services.delivery.unwrap_or(false),
                install: services.install.unwrap_or(false),
            },
            hours,
            featured: raw.featured.unwrap_or(false),
        }
    }
}

/// Load and normalize all three collections from `data_dir`.
pub fn load_dataset(data_dir: &Path) -> Result<Dataset, DataError> {
    let states: Vec<RawState> = read_collection(&data_dir.join(STATES_FILE))?;
    let cities: Vec<RawCity> = read_collection(&data_dir.join(CITIES_FILE))?;
    let stores: Vec<RawStore> = read_collection(&data_dir.join(STORES_FILE))?;
    Ok(Dataset {
        states: states.into_iter().map(State::from).collect(),
        cities: cities.into_iter().map(City::from).collect(),
        stores: stores.into_iter().map(Store::from).collect(),
    })
}

fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DataError> {
    let content = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| DataError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::fixtures_dir;
    use serde_json::json;
    use tempfile::TempDir;

    fn parse_stores(json: &str) -> Result<Vec<Store>, serde_json::Error> {
        let raw: Vec<RawStore> = serde_json::from_str(json)?;
        Ok(raw.into_iter().map(Store::from).collect())
    }

    fn one_store(json: &str) -> Store {
        let mut stores = parse_stores(json).unwrap();
        assert_eq!(stores.len(), 1);
        stores.remove(0)
    }

    #[test]
    fn loads_fixture_dataset() {
        let dataset = load_dataset(&fixtures_dir()).unwrap();
        assert_eq!(dataset.states.len(), 4);
        assert_eq!(dataset.cities.len(), 5);
        assert_eq!(dataset.stores.len(), 7);
    }

    #[test]
    fn numeric_and_string_ids_normalize_to_strings() {
        let stores = parse_stores(
            r#"[
                {"id": 17, "name": "A", "state": "TX", "city_slug": "austin"},
                {"id": "tx-2", "name": "B", "state": "TX", "city_slug": "austin"}
            ]"#,
        )
        .unwrap();
        assert_eq!(stores[0].id, "17");
        assert_eq!(stores[1].id, "tx-2");
    }

    #[test]
    fn missing_optional_fields_default() {
        let store = one_store(r#"[{"id": 1, "name": "Bare", "state": "TX", "city_slug": "austin"}]"#);
        assert_eq!(store.phone, "");
        assert_eq!(store.website, "");
        assert_eq!(store.coords, [0.0, 0.0]);
        assert_eq!(store.categories, Categories::default());
        assert_eq!(store.services, Services::default());
        assert_eq!(store.hours, json!({}));
        assert!(!store.featured);
    }

    #[test]
    fn null_optional_fields_default() {
        let store = one_store(
            r#"[{"id": 1, "name": "Nulls", "state": "TX", "city_slug": "austin",
                 "services": null, "hours": null, "featured": null, "categories": null}]"#,
        );
        assert_eq!(store.services, Services::default());
        assert_eq!(store.hours, json!({}));
        assert!(!store.featured);
    }

    #[test]
    fn appliances_field_is_accepted() {
        let store = one_store(
            r#"[{"id": 1, "name": "A", "state": "TX", "city_slug": "austin",
                 "appliances": {"dishwashers": true}}]"#,
        );
        assert!(store.categories.dishwashers);
        assert!(!store.categories.refrigerators);
    }

    #[test]
    fn categories_and_appliances_merge_per_key() {
        let store = one_store(
            r#"[{"id": 1, "name": "A", "state": "TX", "city_slug": "austin",
                 "categories": {"refrigerators": true, "dishwashers": false},
                 "appliances": {"dishwashers": true}}]"#,
        );
        assert!(store.categories.refrigerators);
        assert!(store.categories.dishwashers);
    }

    #[test]
    fn partial_services_default_missing_key() {
        let store = one_store(
            r#"[{"id": 1, "name": "A", "state": "TX", "city_slug": "austin",
                 "services": {"delivery": true}}]"#,
        );
        assert!(store.services.delivery);
        assert!(!store.services.install);
    }

    #[test]
    fn hours_kept_verbatim() {
        let store = one_store(
            r#"[{"id": 1, "name": "A", "state": "TX", "city_slug": "austin",
                 "hours": {"mon": ["09:00", "17:00"], "sat": ["closed"]}}]"#,
        );
        assert_eq!(store.hours, json!({"mon": ["09:00", "17:00"], "sat": ["closed"]}));
    }

    #[test]
    fn missing_file_reports_path() {
        let tmp = TempDir::new().unwrap();
        let err = load_dataset(tmp.path()).unwrap_err();
        match err {
            DataError::Io { path, .. } => assert!(path.ends_with(STATES_FILE)),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_json_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(STATES_FILE), "[").unwrap();
        fs::write(tmp.path().join(CITIES_FILE), "[]").unwrap();
        fs::write(tmp.path().join(STORES_FILE), "[]").unwrap();
        let err = load_dataset(tmp.path()).unwrap_err();
        assert!(matches!(err, DataError::Json { .. }));
        assert!(err.to_string().contains(STATES_FILE));
    }

    #[test]
    fn missing_counters_default_to_zero() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(STATES_FILE),
            r#"[{"code": "TX", "name": "Texas"}]"#,
        )
        .unwrap();
        fs::write(
            tmp.path().join(CITIES_FILE),
            r#"[{"name": "Austin", "state": "TX", "slug": "austin"}]"#,
        )
        .unwrap();
        fs::write(tmp.path().join(STORES_FILE), "[]").unwrap();
        let dataset = load_dataset(tmp.path()).unwrap();
        assert_eq!(dataset.states[0].stores_count, 0);
        assert_eq!(dataset.cities[0].stores_count, 0);
        assert_eq!(dataset.cities[0].center, [0.0, 0.0]);
    }
}
