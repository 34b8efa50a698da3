//! Placeholder substitution into the page layout.
//!
//! The layout is a plain HTML file containing `{{name}}` placeholders:
//!
//! | Placeholder | Value |
//! |-------------|-------|
//! | `{{title}}` | page `<title>` |
//! | `{{canonical}}` | canonical href |
//! | `{{ogTitle}}`, `{{ogDescription}}` | Open Graph metadata |
//! | `{{header}}`, `{{footer}}` | shared site chrome |
//! | `{{content}}` | page body |
//! | `{{jsonLd}}` | structured-data `<script>` block, may be empty |
//! | `{{extraScripts}}` | page-specific script tags, may be empty |
//! | `{{gaId}}` | analytics measurement id |
//! | `{{base}}` | normalized base path (`""` or `/segment`) |
//!
//! Substitution is textual and does no escaping: values must already be
//! HTML-safe. Unrecognized placeholders are left in place. The source is
//! scanned once, so placeholder-like text inside a substituted value is
//! never expanded.

use std::collections::HashMap;

const DEFAULT_LAYOUT: &str = include_str!("../static/layout.html");

/// A string with `{{name}}` placeholders.
#[derive(Debug, Clone)]
pub struct Template {
    source: String,
}

impl Template {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Replace every `{{name}}` whose name is in `values`.
    ///
    /// A `{{` that does not open a known name emits one `{` and the scan
    /// resumes at the next byte, so `{{{title}}}` still expands its inner
    /// placeholder.
    pub fn render(&self, values: &HashMap<&str, &str>) -> String {
        let mut out = String::with_capacity(self.source.len());
        let mut rest = self.source.as_str();
        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let Some(end) = after.find("}}") else {
                out.push_str(&rest[start..]);
                return out;
            };
            match values.get(&after[..end]) {
                Some(value) => {
                    out.push_str(value);
                    rest = &after[end + 2..];
                }
                None => {
                    out.push('{');
                    rest = &rest[start + 1..];
                }
            }
        }
        out.push_str(rest);
        out
    }
}

/// Per-page values for the layout. Unused fields stay empty.
#[derive(Debug, Clone, Default)]
pub struct PageParts {
    pub title: String,
    pub canonical: String,
    pub og_title: String,
    pub og_description: String,
    pub header: String,
    pub content: String,
    pub footer: String,
    pub json_ld: String,
    pub extra_scripts: String,
}

/// The site layout with its site-wide values bound.
#[derive(Debug, Clone)]
pub struct Layout {
    template: Template,
    analytics_id: String,
    base: String,
}

impl Layout {
    pub fn new(source: impl Into<String>, analytics_id: &str, base: &str) -> Self {
        Self {
            template: Template::new(source),
            analytics_id: analytics_id.to_string(),
            base: base.to_string(),
        }
    }

    /// The layout shipped with the binary.
    pub fn embedded(analytics_id: &str, base: &str) -> Self {
        Self::new(DEFAULT_LAYOUT, analytics_id, base)
    }

    pub fn render(&self, page: &PageParts) -> String {
        let values = HashMap::from([
            ("title", page.title.as_str()),
            ("canonical", page.canonical.as_str()),
            ("ogTitle", page.og_title.as_str()),
            ("ogDescription", page.og_description.as_str()),
            ("header", page.header.as_str()),
            ("content", page.content.as_str()),
            ("footer", page.footer.as_str()),
            ("jsonLd", page.json_ld.as_str()),
            ("extraScripts", page.extra_scripts.as_str()),
            ("gaId", self.analytics_id.as_str()),
            ("base", self.base.as_str()),
        ]);
        self.template.render(&values)
    }
}
