//! Trip-planning tool implementations for Voyagent.
//!
//! The deterministic layer the agent runtime calls into: calendar and
//! preference lookups, flight/hotel/activity search over the static catalogs,
//! budget validation, and the two payment-gated booking tools.
//!
//! The engines (`search`, `budget`, `booking`) are plain functions and
//! structs with no tool plumbing, so they can be tested and reused directly;
//! the `*_tool` modules wrap them in the dispatch contract.

pub mod activity_search;
pub mod booking;
pub mod budget;
pub mod budget_check;
pub mod calendar_lookup;
pub mod dates;
pub mod flight_booking;
pub mod flight_search;
pub mod hotel_booking;
pub mod hotel_search;
pub mod interests;
pub mod preferences_lookup;
pub mod search;

use booking::{BookingEngine, DEFAULT_REFERENCE_PREFIX};
use std::sync::Arc;
use voyagent_core::tool::ToolRegistry;
use voyagent_datasets::DatasetStore;

pub use interests::InterestFilter;

/// Create the full trip-planning tool registry backed by `store`, with the
/// default booking-reference prefix.
pub fn default_registry(store: Arc<DatasetStore>) -> ToolRegistry {
    registry_with_prefix(store, DEFAULT_REFERENCE_PREFIX)
}

/// Create the full registry with a custom booking-reference prefix.
pub fn registry_with_prefix(store: Arc<DatasetStore>, reference_prefix: &str) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Box::new(calendar_lookup::CalendarLookupTool::new(
        store.clone(),
    )));
    registry.register(Box::new(preferences_lookup::PreferencesLookupTool::new(
        store.clone(),
    )));
    registry.register(Box::new(flight_search::FlightSearchTool::new(store.clone())));
    registry.register(Box::new(hotel_search::HotelSearchTool::new(store.clone())));
    registry.register(Box::new(activity_search::ActivitySearchTool::new(
        store.clone(),
    )));
    registry.register(Box::new(budget_check::BudgetCheckTool::new(store.clone())));
    registry.register(Box::new(flight_booking::FlightBookingTool::new(
        store.clone(),
        BookingEngine::new(reference_prefix),
    )));
    registry.register(Box::new(hotel_booking::HotelBookingTool::new(
        store,
        BookingEngine::new(reference_prefix),
    )));
    registry
}


#[cfg(test)]
mod tests {
    use super::*;
    use test_fixtures::fixture_store;

    #[test]
    fn default_registry_declares_all_eight_tools() {
        let registry = default_registry(fixture_store());
        let mut names = registry.names();
        names.sort_unstable();
        assert_eq!(
            names,
            vec![
                "book_flight",
                "book_hotel",
                "calculate_budget",
                "get_user_calendar",
                "get_user_preferences",
                "search_activities",
                "search_flights",
                "search_hotels",
            ]
        );
    }

    #[test]
    fn every_definition_has_a_schema_and_description() {
        let registry = default_registry(fixture_store());
        for def in registry.definitions() {
            assert!(!def.description.is_empty(), "{} lacks description", def.name);
            assert_eq!(def.parameters["type"], "object", "{} schema", def.name);
        }
    }
}
