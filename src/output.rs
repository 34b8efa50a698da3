//! CLI output formatting for all pipeline stages.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. Every entity (state,
//! city, page) is shown by its positional index and display name first; the
//! file it produced follows after `→`. The output reads as an inventory of
//! the directory while still letting users find each generated file.
//!
//! # Output Format
//!
//! ## Load
//!
//! ```text
//! Data
//!     4 states, 5 cities, 7 stores
//!
//! Categories
//!     Refrigerators: 3 stores
//!     Washers & Dryers: 2 stores
//!     Stoves & Ranges: 2 stores
//!     Dishwashers: 2 stores
//! ```
//!
//! ## Check
//!
//! ```text
//! Warnings
//!     Orphaned store 7 Orphan Outlet → TX/houston (no such city)
//!     Unreadable hours for store 6 Harbor Discount: 'mon' must be an [open, close] pair
//!     Slug collision → scratch-and-dent-appliances/ofallon/: O'Fallon, OFallon
//! ```
//!
//! ## Generate
//!
//! ```text
//! Home → index.html
//! Browse States → scratch-and-dent-appliances/index.html
//!
//! States
//! 001 Texas → scratch-and-dent-appliances/texas/index.html
//!
//! Cities
//! 001 Austin, TX → scratch-and-dent-appliances/texas/austin/index.html
//!
//! Pages
//! 001 Advertise With Us → advertise-with-us/index.html
//!
//! Artifacts
//!     search.json (9 entries)
//!     sitemap.xml (15 URLs)
//!     robots.txt
//!
//! Generated 4 state pages, 5 city pages, 4 pages
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure:
//! no I/O, no side effects.

use crate::artifacts::{ROBOTS_FILE, SEARCH_FILE, SITEMAP_FILE};
use crate::generate::{GenerateReport, PageRecord};
use crate::index::SiteIndex;
use crate::pages::PageKind;
use crate::types::Category;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Output file for a route, as shown to the user.
fn page_file(route: &str) -> String {
    format!("{route}index.html")
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

fn pages_of<'a>(report: &'a GenerateReport, kinds: &[PageKind]) -> Vec<&'a PageRecord> {
    report
        .pages
        .iter()
        .filter(|p| kinds.contains(&p.kind))
        .collect()
}

/// A numbered section of pages, or nothing when `pages` is empty.
fn page_section(title: &str, pages: &[&PageRecord]) -> Vec<String> {
    if pages.is_empty() {
        return Vec::new();
    }
    let mut lines = vec![String::new(), title.to_string()];
    for (i, page) in pages.iter().enumerate() {
        lines.push(format!(
            "{} {} \u{2192} {}",
            format_index(i + 1),
            page.label,
            page_file(&page.route)
        ));
    }
    lines
}

// ============================================================================
// Stage 1-2: Load and index
// ============================================================================

/// Format the loaded dataset: record counts and category totals.
pub fn format_load_output(index: &SiteIndex) -> Vec<String> {
    let mut lines = vec![
        "Data".to_string(),
        format!(
            "    {}, {}, {}",
            plural(index.states().len(), "state", "states"),
            plural(index.cities().len(), "city", "cities"),
            plural(index.stores().len(), "store", "stores"),
        ),
        String::new(),
        "Categories".to_string(),
    ];
    let totals = index.category_totals();
    for category in Category::ALL {
        lines.push(format!(
            "    {}: {}",
            category.label(),
            plural(totals.get(category), "store", "stores")
        ));
    }
    lines
}

pub fn print_load_output(index: &SiteIndex) {
    for line in format_load_output(index) {
        println!("{}", line);
    }
}

/// Format data-quality warnings. Empty when the data is clean.
pub fn format_warnings(index: &SiteIndex) -> Vec<String> {
    let mut warnings = Vec::new();
    for store in index.orphan_stores() {
        warnings.push(format!(
            "    Orphaned store {} {} \u{2192} {}/{} (no such city)",
            store.id, store.name, store.state, store.city_slug
        ));
    }
    for (store, err) in index.hours_problems() {
        warnings.push(format!(
            "    Unreadable hours for store {} {}: {}",
            store.id, store.name, err
        ));
    }
    for collision in index.slug_collisions() {
        warnings.push(format!(
            "    Slug collision \u{2192} {}: {}",
            collision.route,
            collision.names.join(", ")
        ));
    }
    if warnings.is_empty() {
        return warnings;
    }
    let mut lines = vec![String::new(), "Warnings".to_string()];
    lines.extend(warnings);
    lines
}

/// Print warnings and return how many there were.
pub fn print_warnings(index: &SiteIndex) -> usize {
    let lines = format_warnings(index);
    for line in &lines {
        println!("{}", line);
    }
    lines.len().saturating_sub(2)
}

// ============================================================================
// Stage 3: Generate
// ============================================================================

/// Format generate stage output showing every page and artifact written.
pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = Vec::new();
    for page in pages_of(report, &[PageKind::Home, PageKind::StatesIndex]) {
        lines.push(format!(
            "{} \u{2192} {}",
            page.label,
            page_file(&page.route)
        ));
    }

    let states = pages_of(report, &[PageKind::State]);
    let cities = pages_of(report, &[PageKind::City]);
    let info = pages_of(report, &[
        PageKind::Advertise,
        PageKind::AddStore,
        PageKind::About,
        PageKind::Contact,
    ]);
    lines.extend(page_section("States", &states));
    lines.extend(page_section("Cities", &cities));
    lines.extend(page_section("Pages", &info));

    lines.push(String::new());
    lines.push("Artifacts".to_string());
    lines.push(format!(
        "    {} ({})",
        SEARCH_FILE,
        plural(report.search_entries, "entry", "entries")
    ));
    lines.push(format!(
        "    {} ({})",
        SITEMAP_FILE,
        plural(report.sitemap_urls, "URL", "URLs")
    ));
    lines.push(format!("    {}", ROBOTS_FILE));
    if report.copied_files > 0 {
        lines.push(format!(
            "    {} copied from site sources",
            plural(report.copied_files, "file", "files")
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {}, {}, {}",
        plural(states.len(), "state page", "state pages"),
        plural(cities.len(), "city page", "city pages"),
        plural(info.len(), "page", "pages"),
    ));
    lines
}

pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
