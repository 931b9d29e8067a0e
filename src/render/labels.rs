use crate::models::{PropertyStatus, PropertyType};

/// Text and CSS modifier for a status or type chip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge<'a> {
    pub label: &'a str,
    pub class: &'static str,
}

pub const DEFAULT_TYPE_CLASS: &str = "badge--type";

/// Known statuses get their own label and colour; anything else shows the raw
/// value with the active colour.
pub fn status_badge(status: &PropertyStatus) -> Badge<'_> {
    match status {
        PropertyStatus::Active => Badge {
            label: "For sale",
            class: "badge--active",
        },
        PropertyStatus::Sold => Badge {
            label: "Sold",
            class: "badge--sold",
        },
        PropertyStatus::Reserved => Badge {
            label: "Reserved",
            class: "badge--reserved",
        },
        PropertyStatus::Other(raw) => Badge {
            label: raw.as_str(),
            class: "badge--active",
        },
    }
}

pub fn type_badge(kind: &PropertyType) -> Badge<'_> {
    let label = match kind {
        PropertyType::Apartment => "Apartment",
        PropertyType::House => "House",
        PropertyType::Land => "Land",
        PropertyType::Commercial => "Commercial",
        PropertyType::Other(raw) => raw.as_str(),
    };
    Badge {
        label,
        class: DEFAULT_TYPE_CLASS,
    }
}
