use crate::config::BasePath;
use crate::models::Property;
use crate::render::labels::{status_badge, type_badge};
use crate::render::placeholder_icon;
use maud::{html, Markup};

/// One tile of the listing grid, linking to the property page
pub fn property_card(property: &Property, base: &BasePath) -> Markup {
    let status = status_badge(&property.status);
    let kind = type_badge(&property.kind);

    html! {
        a.card href=(base.property(property.id)) data-id=(property.id) {
            div.card__media {
                @if let Some(image) = property.images.first() {
                    img src=(image) alt=(property.title) loading="lazy";
                } @else {
                    div.card__placeholder { (placeholder_icon("icon icon--lg")) }
                }
                span class={ "badge badge--corner-left " (status.class) } { (status.label) }
                span class={ "badge badge--corner-right " (kind.class) } { (kind.label) }
            }
            div.card__body {
                h3.card__title { (property.title) }
                div.card__location { (property.location) }
                div.card__price { (property.formatted_price()) }
            }
        }
    }
}
