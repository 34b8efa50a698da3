//! Advertise and add-store pages.
//!
//! Neither page processes anything locally: pricing cards link to a
//! `mailto:` address and the submission form posts to the hosted endpoint
//! in `contact.form_endpoint`.

use super::{PageContext, PageKind, PageMeta, RenderedPage};
use crate::naming::{ADD_STORE_ROUTE, ADVERTISE_ROUTE};
use maud::{Markup, html};

struct Plan {
    title: &'static str,
    price: &'static str,
    features: [&'static str; 3],
}

const PLANS: [Plan; 3] = [
    Plan {
        title: "Monthly Plan",
        price: "$19/mo",
        features: ["List your store", "Priority placement", "Cancel anytime"],
    },
    Plan {
        title: "Annual Plan",
        price: "$199/yr",
        features: ["List your store", "Featured badge", "Email support"],
    },
    Plan {
        title: "Lifetime Plan",
        price: "$499 one-time",
        features: ["Lifetime listing", "Top of results", "Dedicated support"],
    },
];

/// Day labels for the hours table; form field names use the lowercase form.
pub const DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

pub fn render_advertise(ctx: &PageContext) -> RenderedPage {
    let mailto = format!("mailto:{}?subject=Advertise", ctx.config.contact.email);
    let content = html! {
        div.container {
            h1 { "Advertise With Us" }
            p {
                "Reach motivated customers looking for discount appliances. "
                "Choose a plan that fits your business."
            }
            div.pricing-grid {
                @for plan in &PLANS {
                    div.pricing-card {
                        h3 { (plan.title) }
                        p.price { (plan.price) }
                        ul {
                            @for feature in plan.features {
                                li { (feature) }
                            }
                        }
                        p { a.btn href=(mailto) { "Get Started" } }
                    }
                }
            }
            h2 { "Frequently Asked Questions" }
            p {
                strong { "How do I pay?" }
                " Once you sign up, we'll send you an invoice via email. "
                "No payment is processed on this site."
            }
            p {
                strong { "Can I try it free?" }
                " Yes! Use our " a href=(ctx.href(ADD_STORE_ROUTE)) { "free listing" }
                " option to get started, then upgrade any time."
            }
        }
    };

    ctx.finish(
        PageKind::Advertise,
        "Advertise With Us",
        ADVERTISE_ROUTE.to_string(),
        PageMeta {
            title: format!("Advertise With Us – {}", ctx.site_name()),
            og_title: "Advertise With Us".to_string(),
            og_description: "Promote your scratch & dent appliance store to our visitors."
                .to_string(),
        },
        content,
        None,
        html! {},
    )
}

/// Every half hour of the day, `00:00` through `23:30`.
pub fn half_hour_slots() -> Vec<String> {
    (0..24)
        .flat_map(|hour| [0, 30].map(|minute| format!("{hour:02}:{minute:02}")))
        .collect()
}

fn hours_rows() -> Markup {
    let slots = half_hour_slots();
    let options = html! {
        @for slot in &slots {
            option value=(slot) { (slot) }
        }
    };
    html! {
        @for day in DAYS {
            @let field = day.to_lowercase();
            tr {
                th { (day) }
                td { select name={ "hours_" (field) "_open" } { (options) } }
                td { select name={ "hours_" (field) "_close" } { (options) } }
            }
        }
    }
}

pub fn render_add_store(ctx: &PageContext) -> RenderedPage {
    let content = html! {
        div.container {
            h1 { "Add Your Store" }
            p {
                "Submit your scratch & dent appliance store. Your submission will be "
                "reviewed before appearing in our directory."
            }
            form method="POST" action=(ctx.config.contact.form_endpoint) {
                div.form-group {
                    label for="business-name" { "Business Name" }
                    input type="text" id="business-name" name="business_name" required;
                }
                div.form-group {
                    label for="state" { "State" }
                    select id="state" name="state" required {
                        @for state in ctx.index.states_alphabetical() {
                            option value=(state.code) { (state.name) }
                        }
                    }
                }
                div.form-group {
                    label for="city" { "City" }
                    input type="text" id="city" name="city" required;
                }
                div.form-group {
                    label for="address" { "Address" }
                    input type="text" id="address" name="address" required;
                }
                div.form-group {
                    label for="phone" { "Phone" }
                    input type="tel" id="phone" name="phone" required;
                }
                div.form-group {
                    label for="website" { "Website" }
                    input type="url" id="website" name="website";
                }
                h2 { "Store Hours" }
                table.hours-table {
                    thead { tr { th { "Day" } th { "Open" } th { "Close" } } }
                    tbody { (hours_rows()) }
                }
                div.form-group {
                    label for="message" { "Additional Information" }
                    textarea id="message" name="message" rows="4" {}
                }
                button type="submit" { "Submit" }
            }
        }
    };

    ctx.finish(
        PageKind::AddStore,
        "Add Your Store",
        ADD_STORE_ROUTE.to_string(),
        PageMeta {
            title: format!("Add Your Store – {}", ctx.site_name()),
            og_title: "Add Your Store".to_string(),
            og_description:
                "Submit your scratch and dent appliance store to be listed in our directory."
                    .to_string(),
        },
        content,
        None,
        html! {},
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    #[test]
    fn half_hour_slots_cover_the_day() {
        let slots = half_hour_slots();
        assert_eq!(slots.len(), 48);
        assert_eq!(slots[0], "00:00");
        assert_eq!(slots[1], "00:30");
        assert_eq!(slots[19], "09:30");
        assert_eq!(slots[47], "23:30");
    }

    #[test]
    fn advertise_lists_three_plans() {
        let site = TestSite::fixtures();
        let page = render_advertise(&site.context());
        assert_eq!(page.route, "advertise-with-us/");
        let html = &page.html;
        assert_eq!(html.matches(r#"class="pricing-card""#).count(), 3);
        assert!(html.contains(r#"<p class="price">$19/mo</p>"#));
        assert!(html.contains(r#"<p class="price">$199/yr</p>"#));
        assert!(html.contains(r#"<p class="price">$499 one-time</p>"#));
        assert!(html.contains("<li>Priority placement</li>"));
    }

    #[test]
    fn advertise_mails_configured_address() {
        let mut site = TestSite::fixtures();
        site.config.contact.email = "ads@dents.example.com".into();
        let html = render_advertise(&site.context()).html;
        assert_eq!(
            html.matches(r#"href="mailto:ads@dents.example.com?subject=Advertise""#)
                .count(),
            3
        );
    }

    #[test]
    fn advertise_faq_links_free_listing_under_base() {
        let mut site = TestSite::fixtures();
        site.base = crate::naming::BasePath::new("dir");
        let html = render_advertise(&site.context()).html;
        assert!(html.contains(r#"<a href="/dir/stores/new/">free listing</a>"#));
        assert!(html.contains("<title>Advertise With Us – Scratch &amp; Dent Locator</title>"));
    }

    #[test]
    fn add_store_has_hours_table() {
        let site = TestSite::fixtures();
        let page = render_add_store(&site.context());
        assert_eq!(page.route, "stores/new/");
        let html = &page.html;
        for day in ["mon", "tue", "wed", "thu", "fri", "sat", "sun"] {
            assert!(html.contains(&format!(r#"name="hours_{day}_open""#)));
            assert!(html.contains(&format!(r#"name="hours_{day}_close""#)));
        }
        // 48 options in each of 14 selects
        assert_eq!(html.matches(r#"<option value="23:30">"#).count(), 14);
        assert!(html.contains("<th>Sun</th>"));
    }

    #[test]
    fn add_store_state_select_is_alphabetical() {
        let site = TestSite::fixtures();
        let html = render_add_store(&site.context()).html;
        let ca = html.find(r#"<option value="CA">California</option>"#).unwrap();
        let ny = html.find(r#"<option value="NY">New York</option>"#).unwrap();
        let nc = html.find(r#"<option value="NC">North Carolina</option>"#).unwrap();
        let tx = html.find(r#"<option value="TX">Texas</option>"#).unwrap();
        assert!(ca < ny && ny < nc && nc < tx);
    }

    #[test]
    fn add_store_posts_to_form_endpoint() {
        let mut site = TestSite::fixtures();
        let html = render_add_store(&site.context()).html;
        assert!(html.contains(r#"<form method="POST" action="https://formspree.io/f/maypkyzk">"#));

        site.config.contact.form_endpoint = "https://forms.example.com/x".into();
        let html = render_add_store(&site.context()).html;
        assert!(html.contains(r#"action="https://forms.example.com/x""#));
    }

    #[test]
    fn add_store_has_no_json_ld() {
        let site = TestSite::fixtures();
        let html = render_add_store(&site.context()).html;
        assert!(!html.contains("application/ld+json"));
    }
}
