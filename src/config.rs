//! Site configuration module.
//!
//! Handles loading and validating `config.toml` from the site source
//! directory. Every key is optional; stock defaults fill in the rest.
//!
//! ## Config File Location
//!
//! ```text
//! site/
//! ├── config.toml              # Site config (optional)
//! ├── assets/                  # Copied to dist/assets/ (overrides embedded)
//! ├── static/                  # Copied to dist/ root (favicon etc.)
//! ├── templates/_layout.html   # Layout override (optional)
//! └── pages/                   # about.md / contact.md overrides (optional)
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! name = "Scratch & Dent Locator"
//! description = "Directory of scratch and dent appliance stores across the United States."
//! url = ""                  # Public origin, e.g. "https://example.com"
//! base_path = ""            # Deployment sub-path; BASE_PATH env wins
//! analytics_id = "G-XXXXXXX"
//!
//! [contact]
//! email = "info@example.com"
//! form_endpoint = "https://formspree.io/f/maypkyzk"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::naming::BasePath;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const CONFIG_FILE: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site identity and deployment settings.
    pub site: SiteInfoConfig,
    /// Contact addresses and the hosted form endpoint.
    pub contact: ContactConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfoConfig {
    /// Brand name shown in the header and structured data.
    pub name: String,
    /// One-line description used in the home page structured data.
    pub description: String,
    /// Public origin without trailing slash. Empty keeps URLs site-relative.
    pub url: String,
    /// Sub-path the site is served under. Overridden by `--base-path` / `BASE_PATH`.
    pub base_path: String,
    /// Analytics measurement id substituted into the layout.
    pub analytics_id: String,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            name: "Scratch & Dent Locator".to_string(),
            description:
                "Directory of scratch and dent appliance stores across the United States."
                    .to_string(),
            url: String::new(),
            base_path: String::new(),
            analytics_id: "G-XXXXXXX".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    /// Address used by mailto links on the advertise and contact pages.
    pub email: String,
    /// Hosted endpoint receiving the add-store form. Nothing is processed locally.
    pub form_endpoint: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email: "info@example.com".to_string(),
            form_endpoint: "https://formspree.io/f/maypkyzk".to_string(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.name.trim().is_empty() {
            return Err(ConfigError::Validation("site.name must not be empty".into()));
        }
        if !self.site.url.is_empty() && !is_http_url(&self.site.url) {
            return Err(ConfigError::Validation(
                "site.url must start with http:// or https://".into(),
            ));
        }
        if !is_http_url(&self.contact.form_endpoint) {
            return Err(ConfigError::Validation(
                "contact.form_endpoint must start with http:// or https://".into(),
            ));
        }
        Ok(())
    }

    /// Resolve the effective base path.
    ///
    /// An explicit override (CLI flag or `BASE_PATH`) wins over `site.base_path`.
    pub fn base_path(&self, override_path: Option<&str>) -> BasePath {
        BasePath::new(override_path.unwrap_or(&self.site.base_path))
    }

    /// Absolute URL for an href when `site.url` is set, else the href itself.
    pub fn absolute_url(&self, href: &str) -> String {
        format!("{}{}", self.site.url.trim_end_matches('/'), href)
    }
}

fn is_http_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

/// Load config from `config.toml` in the given directory.
///
/// Missing file means stock defaults. Unknown keys are rejected and the
/// result is validated.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let config_path = root.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(SiteConfig::default());
    }
    let content = fs::read_to_string(&config_path)?;
    let config: SiteConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Scratch & Dent Locator Configuration
# ====================================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

[site]
# Brand name shown in the header, footer and structured data.
name = "Scratch & Dent Locator"

# Description used in the home page WebSite structured data.
description = "Directory of scratch and dent appliance stores across the United States."

# Public origin, without trailing slash (e.g. "https://example.com").
# When set, sitemap.xml, robots.txt and structured data use absolute URLs.
url = ""

# Sub-path the site is served under (e.g. "directory-site" for a GitHub
# Pages project site). The --base-path flag and BASE_PATH env var win.
base_path = ""

# Analytics measurement id substituted into the layout as {{gaId}}.
analytics_id = "G-XXXXXXX"

[contact]
# Address used by the "Email Us" and "Get Started" links.
email = "info@example.com"

# Hosted endpoint that receives add-store submissions.
form_endpoint = "https://formspree.io/f/maypkyzk"
"##
}
