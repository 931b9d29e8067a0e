//! Maud renderers for the exported pages.

pub mod card;
pub mod detail;
pub mod home;
pub mod labels;
pub mod listing;
pub mod shell;

pub use detail::{not_found, property_details, Gallery};
pub use home::home;
pub use listing::{FilterState, FILTER_OPTIONS};
pub use shell::{layout, PageMeta};

use maud::{html, Markup, PreEscaped};

/// Outline of a house, shown where a listing has no photos
pub(crate) fn placeholder_icon(class: &str) -> Markup {
    html! {
        svg class=(class) fill="none" stroke="currentColor" viewBox="0 0 24 24" aria-hidden="true" {
            (PreEscaped(r#"<path stroke-linecap="round" stroke-linejoin="round" stroke-width="1" d="M3 12l2-2m0 0l7-7 7 7M5 10v10a1 1 0 001 1h3m10-11l2 2m-2-2v10a1 1 0 01-1 1h-3m-6 0a1 1 0 001-1v-4a1 1 0 011-1h2a1 1 0 011 1v4a1 1 0 001 1m-6 0h6"/>"#))
        }
    }
}

/// Percent-encode a URI component, spaces as `%20`
pub(crate) fn encode_component(text: &str) -> String {
    // form encoding escapes a literal '+' as %2B, so every '+' left is a space
    url::form_urlencoded::byte_serialize(text.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
