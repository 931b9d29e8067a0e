//! Filterable listing grid.
//!
//! [`FilterState`] is the grid's state machine. The exported page seeds it
//! with the pre-rendered list; the hydration script runs the same transitions
//! in the browser, including the generation check that drops stale responses.

use crate::api::{FetchError, ListingApi};
use crate::config::BasePath;
use crate::models::{Property, PropertyType};
use crate::render::card::property_card;
use maud::{html, Markup};
use tracing::{debug, warn};

/// Shown when no active listing matches the current filter
pub const EMPTY_LISTING: &str = "No listings yet";

/// A filter button: `kind == None` means "all types"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub kind: Option<PropertyType>,
    pub label: &'static str,
}

impl FilterOption {
    /// Value of the `type` query parameter, empty for "all"
    pub fn key(&self) -> &str {
        self.kind.as_ref().map_or("", |kind| kind.as_str())
    }
}

pub const FILTER_OPTIONS: [FilterOption; 5] = [
    FilterOption {
        kind: None,
        label: "All",
    },
    FilterOption {
        kind: Some(PropertyType::Apartment),
        label: "Apartments",
    },
    FilterOption {
        kind: Some(PropertyType::House),
        label: "Houses",
    },
    FilterOption {
        kind: Some(PropertyType::Land),
        label: "Land",
    },
    FilterOption {
        kind: Some(PropertyType::Commercial),
        label: "Commercial",
    },
];

/// Handle for a refetch started by [`FilterState::select`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    pub filter: Option<PropertyType>,
}

/// Active filter, current list and loading flag of one grid
#[derive(Debug, Clone)]
pub struct FilterState {
    active: Option<PropertyType>,
    properties: Vec<Property>,
    loading: bool,
    generation: u64,
}

impl FilterState {
    pub fn new(initial: Vec<Property>) -> Self {
        Self {
            active: None,
            properties: initial,
            loading: false,
            generation: 0,
        }
    }

    pub fn active_filter(&self) -> Option<&PropertyType> {
        self.active.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Switch filter and start a refetch; any earlier ticket becomes stale
    pub fn select(&mut self, filter: Option<PropertyType>) -> FetchTicket {
        self.generation += 1;
        self.active = filter.clone();
        self.loading = true;
        FetchTicket {
            generation: self.generation,
            filter,
        }
    }

    /// Apply the outcome of a refetch.
    ///
    /// Returns whether the state changed. Stale tickets are ignored; a failed
    /// fetch ends the loading state but keeps the previous list.
    pub fn resolve(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Property>, FetchError>,
    ) -> bool {
        if ticket.generation != self.generation {
            debug!(
                "Dropping stale listing response for filter {:?}",
                ticket.filter
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(properties) => self.properties = properties,
            Err(err) => warn!("Failed to fetch properties: {}", err),
        }
        true
    }

    /// Select `filter`, fetch through `api` and apply the result
    pub async fn apply<A: ListingApi + ?Sized>(
        &mut self,
        api: &A,
        filter: Option<PropertyType>,
    ) -> bool {
        let ticket = self.select(filter);
        let result = api
            .list_properties(ticket.filter.clone())
            .await
            .map(|listing| listing.data);
        self.resolve(ticket, result)
    }

    /// Listings eligible for the public grid, in API order
    pub fn visible(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter().filter(|p| p.status.is_active())
    }
}

/// Filter buttons plus the grid body for the current state
pub fn grid(state: &FilterState, base: &BasePath) -> Markup {
    let visible: Vec<&Property> = state.visible().collect();

    html! {
        div.filters {
            @for option in FILTER_OPTIONS.iter() {
                @let active = option.kind.as_ref() == state.active_filter();
                button.filter-btn.active[active] type="button" data-filter=(option.key()) {
                    (option.label)
                }
            }
        }
        div #property-grid {
            @if state.is_loading() {
                div.loading { div.spinner {} }
            } @else if visible.is_empty() {
                div.empty { p { (EMPTY_LISTING) } }
            } @else {
                div.grid {
                    @for property in &visible {
                        (property_card(property, base))
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::memory::MemoryApi;
    use crate::models::{sample_property, PropertyStatus};
    use reqwest::StatusCode;
    use scraper::{Html, Selector};

    fn card_ids(html: &str) -> Vec<String> {
        let doc = Html::parse_fragment(html);
        let cards = Selector::parse("a.card").unwrap();
        doc.select(&cards)
            .filter_map(|el| el.value().attr("data-id").map(str::to_string))
            .collect()
    }

    #[test]
    fn test_only_active_listings_are_visible() {
        let state = FilterState::new(vec![
            sample_property(1, PropertyType::House, PropertyStatus::Active),
            sample_property(2, PropertyType::House, PropertyStatus::Sold),
            sample_property(3, PropertyType::Land, PropertyStatus::Reserved),
            sample_property(4, PropertyType::Land, PropertyStatus::Other("x".into())),
            sample_property(5, PropertyType::Apartment, PropertyStatus::Active),
        ]);
        let ids: Vec<u64> = state.visible().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 5]);

        let html = grid(&state, &BasePath::default()).into_string();
        assert_eq!(card_ids(&html), vec!["1", "5"]);
        let doc = Html::parse_fragment(&html);
        let container = Selector::parse("div#property-grid").unwrap();
        assert_eq!(doc.select(&container).count(), 1);
    }

    #[tokio::test]
    async fn test_filter_transition_to_sold_only_list() {
        let a = sample_property(1, PropertyType::House, PropertyStatus::Active);
        let b = sample_property(2, PropertyType::Land, PropertyStatus::Sold);
        let api = MemoryApi::with_properties(vec![a.clone(), b.clone()]);

        let mut state = FilterState::new(vec![a, b]);
        assert!(state.active_filter().is_none());
        let html = grid(&state, &BasePath::default()).into_string();
        assert_eq!(card_ids(&html), vec!["1"]);

        assert!(state.apply(&api, Some(PropertyType::Land)).await);
        assert_eq!(state.active_filter(), Some(&PropertyType::Land));
        assert!(!state.is_loading());

        let html = grid(&state, &BasePath::default()).into_string();
        assert!(card_ids(&html).is_empty());
        assert!(html.contains(EMPTY_LISTING));
    }

    #[test]
    fn test_loading_indicator_replaces_grid() {
        let mut state = FilterState::new(vec![sample_property(
            1,
            PropertyType::House,
            PropertyStatus::Active,
        )]);
        state.select(Some(PropertyType::House));

        let html = grid(&state, &BasePath::default()).into_string();
        assert!(html.contains("spinner"));
        assert!(card_ids(&html).is_empty());
        assert!(!html.contains(EMPTY_LISTING));
    }

    #[test]
    fn test_failed_refetch_keeps_previous_list() {
        let mut state = FilterState::new(vec![sample_property(
            1,
            PropertyType::House,
            PropertyStatus::Active,
        )]);
        let ticket = state.select(Some(PropertyType::Commercial));
        let changed = state.resolve(
            ticket,
            Err(FetchError::Status {
                resource: "properties",
                status: StatusCode::BAD_GATEWAY,
            }),
        );

        assert!(changed);
        assert!(!state.is_loading());
        assert_eq!(state.visible().count(), 1);
    }

    #[test]
    fn test_stale_response_cannot_overwrite_newer_one() {
        let house = sample_property(1, PropertyType::House, PropertyStatus::Active);
        let land = sample_property(2, PropertyType::Land, PropertyStatus::Active);
        let mut state = FilterState::new(vec![]);

        let first = state.select(Some(PropertyType::House));
        let second = state.select(Some(PropertyType::Land));

        // Second request completes first, then the superseded one arrives.
        assert!(state.resolve(second, Ok(vec![land])));
        assert!(!state.resolve(first, Ok(vec![house])));

        let ids: Vec<u64> = state.visible().map(|p| p.id).collect();
        assert_eq!(ids, vec![2]);
        assert_eq!(state.active_filter(), Some(&PropertyType::Land));
    }

    fn active_filter_keys(html: &str) -> Vec<String> {
        let doc = Html::parse_fragment(html);
        let active = Selector::parse("button.filter-btn.active").unwrap();
        doc.select(&active)
            .filter_map(|el| el.value().attr("data-filter").map(str::to_string))
            .collect()
    }

    #[test]
    fn test_active_filter_button_is_marked() {
        let mut state = FilterState::new(vec![]);
        let html = grid(&state, &BasePath::default()).into_string();
        assert_eq!(active_filter_keys(&html), vec![""]);

        let ticket = state.select(Some(PropertyType::Apartment));
        state.resolve(ticket, Ok(vec![]));
        let html = grid(&state, &BasePath::default()).into_string();
        assert_eq!(active_filter_keys(&html), vec!["apartment"]);
    }
}
