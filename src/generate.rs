//! Static site generation.
//!
//! Stage 3 of the build. Takes the indexed dataset and writes the finished
//! site into a fresh output directory.
//!
//! ## Sequence
//!
//! 1. Refuse an output directory that is, or contains, the data or source
//!    directory; otherwise delete it and recreate it empty
//! 2. Write the embedded CSS and JavaScript under `assets/`
//! 3. Copy `<source>/assets/` over them, then `<source>/static/` into the
//!    output root
//! 4. Render every page (see [`render_pages`]) and write it to
//!    `{route}index.html`
//! 5. Write `search.json`, `sitemap.xml`, `robots.txt`
//!
//! Any failure aborts the run; partially written output is left in place.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── scratch-and-dent-appliances/
//! │   ├── index.html                 # States index
//! │   └── texas/
//! │       ├── index.html             # State page
//! │       └── austin/index.html      # City page
//! ├── advertise-with-us/index.html
//! ├── stores/new/index.html
//! ├── about/index.html
//! ├── contact/index.html
//! ├── assets/
//! │   ├── css/style.css
//! │   └── js/{main,search,map,hours}.js
//! ├── search.json
//! ├── sitemap.xml
//! └── robots.txt
//! ```

use crate::artifacts::{self, ROBOTS_FILE, SEARCH_FILE, SITEMAP_FILE};
use crate::config::SiteConfig;
use crate::index::SiteIndex;
use crate::naming::{self, BasePath};
use crate::pages::chrome::SiteChrome;
use crate::pages::info::{ABOUT_FILE, CONTACT_FILE, DEFAULT_ABOUT, DEFAULT_CONTACT};
use crate::pages::{
    PageContext, PageKind, RenderedPage, city, forms, home, info, states,
};
use crate::template::Layout;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to copy assets: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Refusing to replace {}: it contains {}", output.display(), protected.display())]
    UnsafeOutput { output: PathBuf, protected: PathBuf },
}

/// Layout override, relative to the source directory.
pub const LAYOUT_FILE: &str = "templates/_layout.html";
/// Markdown overrides for the info pages live here.
pub const PAGES_DIR: &str = "pages";
/// Copied into `<output>/assets/`.
pub const ASSETS_DIR: &str = "assets";
/// Copied into the output root.
pub const STATIC_DIR: &str = "static";

/// Assets shipped with the binary, relative to `<output>/assets/`.
const EMBEDDED_ASSETS: [(&str, &str); 5] = [
    ("css/style.css", include_str!("../static/css/style.css")),
    ("js/main.js", include_str!("../static/js/main.js")),
    ("js/search.js", include_str!("../static/js/search.js")),
    ("js/map.js", include_str!("../static/js/map.js")),
    ("js/hours.js", include_str!("../static/js/hours.js")),
];

/// Where the build reads from and writes to.
#[derive(Debug, Clone, Copy)]
pub struct SitePaths<'a> {
    pub data: &'a Path,
    pub source: &'a Path,
    pub output: &'a Path,
}

/// A page that was written, for reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRecord {
    pub kind: PageKind,
    pub label: String,
    pub route: String,
}

#[derive(Debug, Clone, Default)]
pub struct GenerateReport {
    /// Written pages, in generation order.
    pub pages: Vec<PageRecord>,
    /// Files copied from `<source>/assets/` and `<source>/static/`.
    pub copied_files: usize,
    pub search_entries: usize,
    pub sitemap_urls: usize,
}

impl GenerateReport {
    pub fn count(&self, kind: PageKind) -> usize {
        self.pages.iter().filter(|p| p.kind == kind).count()
    }
}

pub fn generate(
    paths: &SitePaths,
    index: &SiteIndex,
    config: &SiteConfig,
    base: &BasePath,
    today: NaiveDate,
) -> Result<GenerateReport, GenerateError> {
    ensure_safe_output(paths.output, &[paths.data, paths.source])?;
    reset_output_dir(paths.output)?;

    write_embedded_assets(paths.output)?;
    let mut copied_files = copy_tree(
        &paths.source.join(ASSETS_DIR),
        &paths.output.join(ASSETS_DIR),
    )?;
    copied_files += copy_tree(&paths.source.join(STATIC_DIR), paths.output)?;

    let layout = load_layout(paths.source, config, base)?;
    let chrome = SiteChrome::build(index, config, base);
    let ctx = PageContext {
        index,
        config,
        base,
        chrome: &chrome,
        layout: &layout,
    };

    let about = load_markdown(paths.source, ABOUT_FILE, DEFAULT_ABOUT)?;
    let contact = load_markdown(paths.source, CONTACT_FILE, DEFAULT_CONTACT)?;

    let mut pages = Vec::new();
    for page in render_pages(&ctx, &about, &contact) {
        write_page(paths.output, &page)?;
        pages.push(PageRecord {
            kind: page.kind,
            label: page.label,
            route: page.route,
        });
    }

    let entries = artifacts::search_entries(index, base);
    fs::write(
        paths.output.join(SEARCH_FILE),
        artifacts::search_json(&entries)?,
    )?;

    let locations = artifacts::sitemap_locations(index, config, base);
    fs::write(
        paths.output.join(SITEMAP_FILE),
        artifacts::render_sitemap(&locations, today),
    )?;
    fs::write(
        paths.output.join(ROBOTS_FILE),
        artifacts::render_robots(config, base),
    )?;

    Ok(GenerateReport {
        pages,
        copied_files,
        search_entries: entries.len(),
        sitemap_urls: locations.len(),
    })
}

/// Every page of the site, in sitemap order.
pub fn render_pages(ctx: &PageContext, about: &str, contact: &str) -> Vec<RenderedPage> {
    let mut pages = vec![home::render_home(ctx), states::render_states_index(ctx)];
    pages.extend(
        ctx.index
            .states()
            .iter()
            .map(|state| states::render_state_page(ctx, state)),
    );
    pages.extend(
        ctx.index
            .cities_with_states()
            .map(|(state, city)| city::render_city_page(ctx, state, city)),
    );
    pages.push(forms::render_advertise(ctx));
    pages.push(forms::render_add_store(ctx));
    pages.push(info::render_about(ctx, about));
    pages.push(info::render_contact(ctx, contact));
    pages
}

/// Fail if wiping `output` would destroy one of the `protected` directories.
pub fn ensure_safe_output(output: &Path, protected: &[&Path]) -> Result<(), GenerateError> {
    if !output.exists() {
        return Ok(());
    }
    let output = output.canonicalize()?;
    for dir in protected {
        if !dir.exists() {
            continue;
        }
        let dir = dir.canonicalize()?;
        if dir.starts_with(&output) {
            return Err(GenerateError::UnsafeOutput {
                output,
                protected: dir,
            });
        }
    }
    Ok(())
}

fn reset_output_dir(output: &Path) -> Result<(), GenerateError> {
    if output.exists() {
        fs::remove_dir_all(output)?;
    }
    fs::create_dir_all(output)?;
    Ok(())
}

fn write_embedded_assets(output: &Path) -> Result<(), GenerateError> {
    let assets = output.join(ASSETS_DIR);
    for (rel, contents) in EMBEDDED_ASSETS {
        let path = assets.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)?;
    }
    Ok(())
}

/// Copy every file under `src` into `dst`, keeping relative paths and
/// overwriting existing files. A missing `src` copies nothing.
fn copy_tree(src: &Path, dst: &Path) -> Result<usize, GenerateError> {
    if !src.is_dir() {
        return Ok(0);
    }
    let mut copied = 0;
    for entry in WalkDir::new(src).min_depth(1) {
        let entry = entry?;
        let Ok(rel) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

fn load_layout(source: &Path, config: &SiteConfig, base: &BasePath) -> Result<Layout, GenerateError> {
    let path = source.join(LAYOUT_FILE);
    let analytics_id = &config.site.analytics_id;
    if path.is_file() {
        Ok(Layout::new(fs::read_to_string(path)?, analytics_id, base.as_str()))
    } else {
        Ok(Layout::embedded(analytics_id, base.as_str()))
    }
}

fn load_markdown(source: &Path, file: &str, default: &str) -> Result<String, GenerateError> {
    let path = source.join(PAGES_DIR).join(file);
    if path.is_file() {
        Ok(fs::read_to_string(path)?)
    } else {
        Ok(default.to_string())
    }
}

fn write_page(output: &Path, page: &RenderedPage) -> Result<(), GenerateError> {
    let path = output.join(naming::route_file(&page.route));
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, &page.html)?;
    Ok(())
}
