use crate::config::BasePath;
use crate::models::{Property, PropertyStatus, PropertyType, Settings, PRICE_PLACEHOLDER};
use crate::render::detail::whatsapp_link;
use crate::render::labels::{status_badge, type_badge};
use crate::render::listing::{grid, FilterState, EMPTY_LISTING};
use crate::render::placeholder_icon;
use maud::{html, Markup, PreEscaped};
use serde::Serialize;
use std::collections::BTreeMap;

/// Everything the hydration script needs to refetch and redraw the grid
#[derive(Debug, Serialize)]
struct ListingConfig<'a> {
    api_base: &'a str,
    base_path: &'a str,
    empty_text: &'a str,
    price_placeholder: &'a str,
    placeholder_icon: String,
    /// Pre-rendered list, redrawn if a refetch fails
    initial: &'a [Property],
    type_labels: BTreeMap<String, String>,
    /// status -> (label, css class)
    status_badges: BTreeMap<String, (String, String)>,
}

impl<'a> ListingConfig<'a> {
    fn new(api_base: &'a str, base: &'a BasePath, initial: &'a [Property]) -> Self {
        let type_labels = PropertyType::KNOWN
            .iter()
            .map(|kind| (kind.as_str().to_string(), type_badge(kind).label.to_string()))
            .collect();
        let status_badges = [
            PropertyStatus::Active,
            PropertyStatus::Sold,
            PropertyStatus::Reserved,
        ]
        .iter()
        .map(|status| {
            let badge = status_badge(status);
            (
                status.as_str().to_string(),
                (badge.label.to_string(), badge.class.to_string()),
            )
        })
        .collect();

        Self {
            api_base,
            base_path: base.as_str(),
            empty_text: EMPTY_LISTING,
            price_placeholder: PRICE_PLACEHOLDER,
            placeholder_icon: placeholder_icon("icon icon--lg").into_string(),
            initial,
            type_labels,
            status_badges,
        }
    }
}

/// JSON for an inline `<script type="application/json">`
fn script_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

/// Body of the home page: hero, stats, filterable grid and contact CTA
pub fn home(properties: Vec<Property>, settings: &Settings, base: &BasePath, api_base: &str) -> Markup {
    let config = script_json(&ListingConfig::new(api_base, base, &properties))
        .unwrap_or_else(|_| "{}".into());
    let state = FilterState::new(properties);
    let whatsapp = whatsapp_link(settings, None);

    html! {
        section.hero {
            div.container {
                h1 { "Real Estate in" br; span.accent { "Santa Catarina" } }
                p { "Premium properties in Brazil's most beautiful region. Investments, oceanfront living, your new home." }
                a.btn-primary href="#properties" { "View Properties" }
            }
        }
        section.stats {
            div.container.stats__grid {
                @for (value, label) in [("60+", "Properties"), ("7", "Cities"), ("10+", "Years of Experience"), ("100%", "Legal Support")] {
                    div { div.stats__value { (value) } div.stats__label { (label) } }
                }
            }
        }
        section #properties.listing {
            div.container {
                h2 { "Properties" }
                p.muted { "Current listings from " (settings.site_name()) }
                (grid(&state, base))
                script #listing-config type="application/json" { (PreEscaped(config)) }
            }
        }
        section.cta-section {
            div.container {
                h2 { "Need a Consultation?" }
                p { "Contact us to find the perfect property for your goals: investment, relocation, or vacation." }
                @if let Some(href) = &whatsapp {
                    a.btn-primary.cta__whatsapp href=(href) target="_blank" rel="noopener noreferrer" {
                        "Contact via WhatsApp"
                    }
                }
            }
        }
    }
}
