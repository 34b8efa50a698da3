//! About and contact pages, authored in markdown.
//!
//! The sources ship with the binary and can be replaced by
//! `<source>/pages/about.md` and `<source>/pages/contact.md`. Before markdown
//! rendering, these placeholders are substituted:
//!
//! | Placeholder | Value |
//! |-------------|-------|
//! | `{{base}}` | normalized base path (`""` or `/segment`) |
//! | `{{siteName}}` | `site.name` |
//! | `{{contactEmail}}` | `contact.email` |

use super::{PageContext, PageKind, PageMeta, RenderedPage};
use crate::naming::{ABOUT_ROUTE, CONTACT_ROUTE};
use crate::template::Template;
use maud::{PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use std::collections::HashMap;

pub const ABOUT_FILE: &str = "about.md";
pub const CONTACT_FILE: &str = "contact.md";

pub const DEFAULT_ABOUT: &str = include_str!("../../static/pages/about.md");
pub const DEFAULT_CONTACT: &str = include_str!("../../static/pages/contact.md");

/// Substitute site placeholders, then render markdown to HTML.
pub fn render_markdown(ctx: &PageContext, source: &str) -> String {
    let values = HashMap::from([
        ("base", ctx.base.as_str()),
        ("siteName", ctx.config.site.name.as_str()),
        ("contactEmail", ctx.config.contact.email.as_str()),
    ]);
    let markdown = Template::new(source).render(&values);
    let mut body = String::new();
    md_html::push_html(&mut body, Parser::new(&markdown));
    body
}

pub fn render_about(ctx: &PageContext, markdown: &str) -> RenderedPage {
    let site = ctx.site_name();
    render_info(
        ctx,
        PageKind::About,
        "About",
        ABOUT_ROUTE,
        markdown,
        PageMeta {
            title: format!("About – {site}"),
            og_title: format!("About {site}"),
            og_description: format!("Learn more about the {site} project and team."),
        },
    )
}

pub fn render_contact(ctx: &PageContext, markdown: &str) -> RenderedPage {
    let site = ctx.site_name();
    render_info(
        ctx,
        PageKind::Contact,
        "Contact",
        CONTACT_ROUTE,
        markdown,
        PageMeta {
            title: format!("Contact – {site}"),
            og_title: format!("Contact {site}"),
            og_description: format!("Get in touch with the {site} team."),
        },
    )
}

fn render_info(
    ctx: &PageContext,
    kind: PageKind,
    label: &str,
    route: &str,
    markdown: &str,
    meta: PageMeta,
) -> RenderedPage {
    let body = render_markdown(ctx, markdown);
    let content = html! {
        div.container { (PreEscaped(body)) }
    };
    ctx.finish(kind, label, route.to_string(), meta, content, None, html! {})
}
