//! # sd-locator
//!
//! A static site generator for a directory of scratch and dent appliance
//! stores. Three JSON files describe states, cities, and stores; the build
//! turns them into a crawlable HTML site with per-state and per-city pages,
//! a client-side search index, a sitemap, and a robots file.
//!
//! # Architecture: Three-Stage Pipeline
//!
//! ```text
//! 1. Load      data/*.json      →  Dataset      (raw JSON → normalized records)
//! 2. Index     Dataset          →  SiteIndex    (lookups + aggregate counters)
//! 3. Generate  SiteIndex        →  dist/        (HTML pages + artifacts)
//! ```
//!
//! Every page builder is a pure function from the index to a finished HTML
//! string, so page logic is tested without touching the filesystem. Only
//! [`generate`] writes files.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`data`] | Stage 1: reads and normalizes `states.json`, `cities.json`, `stores.json` |
//! | [`index`] | Stage 2: lookup maps, category totals, data-quality reports |
//! | [`generate`] | Stage 3: writes pages, assets, and artifacts to the output directory |
//! | [`pages`] | One builder per page type, plus the shared header and footer |
//! | [`artifacts`] | `search.json`, `sitemap.xml`, `robots.txt` |
//! | [`template`] | `{{placeholder}}` substitution into the page layout |
//! | [`naming`] | Slugs, routes, and base-path prefixing |
//! | [`hours`] | Opening-hours parsing and open/closed evaluation |
//! | [`config`] | `config.toml` loading and validation |
//! | [`types`] | Normalized records shared by every stage |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Maud for Fragments, Text Substitution for the Layout
//!
//! Page bodies, header, and footer are built with [Maud](https://maud.lambda.xyz/),
//! which escapes every interpolated value. The surrounding layout is a plain
//! HTML file with `{{name}}` placeholders so a site can replace it without
//! recompiling; see [`template::Layout`].
//!
//! ## Normalize Once
//!
//! Input records tolerate missing optional fields and two spellings of the
//! category map (`categories` and `appliances`). [`data`] folds all of that
//! into one normalized [`types::Store`] so page builders never check for
//! absent values.
//!
//! ## Base Path Everywhere
//!
//! The site may be served from a sub-path (a GitHub Pages project site, for
//! example). Every link, asset reference, and artifact URL goes through
//! [`naming::BasePath::prefix`].

pub mod artifacts;
pub mod config;
pub mod data;
pub mod generate;
pub mod hours;
pub mod index;
pub mod naming;
pub mod output;
pub mod pages;
pub mod template;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
