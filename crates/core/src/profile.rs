//! User profile types — calendar availability and travel preferences.
//!
//! Both are static per deployment: the calendar describes which days the user
//! can travel, the preferences describe budget limits, interests, and
//! accommodation taste. Loaded once by the dataset store, read-only after.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Availability status of a single calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarStatus {
    Available,
    Blocked,
}

/// A calendar day the user cannot travel, with the reason.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockedEvent {
    /// ISO-8601 date (YYYY-MM-DD)
    pub date: String,

    pub description: String,
}

/// The user's availability calendar.
///
/// Dates are zero-padded YYYY-MM-DD strings, so a `BTreeMap` keeps them in
/// chronological order and plain string comparison is a valid date comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCalendar {
    /// Date → availability status
    pub availability: BTreeMap<String, CalendarStatus>,

    /// Events behind the blocked dates (many blocked dates may share one event)
    #[serde(default)]
    pub blocked_events: Vec<BlockedEvent>,

    /// Free-form vacation preferences shown alongside calendar lookups
    /// (preferred months, trip length, pace)
    #[serde(default)]
    pub vacation_preferences: serde_json::Map<String, serde_json::Value>,
}

/// Budget limits from the user's preference profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetProfile {
    /// Total trip budget
    pub total: f64,

    /// ISO currency code
    pub currency: String,

    /// Per-category limits (e.g., "flights" → 1000.0)
    #[serde(default)]
    pub breakdown: BTreeMap<String, f64>,
}

/// Accommodation taste from the preference profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccommodationPreferences {
    /// Preferred lodging kind (e.g., "hotel", "resort")
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub min_rating: f64,

    #[serde(default)]
    pub amenities: Vec<String>,
}

/// The user's full travel preference profile. Singleton per deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreferences {
    pub budget: BudgetProfile,

    /// Interest categories (e.g., "beaches", "culture")
    #[serde(default)]
    pub interests: Vec<String>,

    /// Destinations the user has shown interest in
    #[serde(default)]
    pub destinations: Vec<String>,

    pub accommodation: AccommodationPreferences,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calendar_dates_iterate_in_order() {
        let json = serde_json::json!({
            "availability": {
                "2025-10-03": "blocked",
                "2025-10-01": "available",
                "2025-10-02": "available"
            }
        });
        let cal: UserCalendar = serde_json::from_value(json).unwrap();
        let dates: Vec<&String> = cal.availability.keys().collect();
        assert_eq!(dates, vec!["2025-10-01", "2025-10-02", "2025-10-03"]);
    }

    #[test]
    fn preferences_deserialize_wire_shape() {
        let json = serde_json::json!({
            "budget": {
                "total": 3000.0,
                "currency": "USD",
                "breakdown": { "flights": 1000.0, "hotels": 1500.0 }
            },
            "interests": ["beaches", "culture"],
            "destinations": ["Bali"],
            "accommodation": { "type": "hotel", "min_rating": 4.0, "amenities": ["wifi"] }
        });
        let prefs: UserPreferences = serde_json::from_value(json).unwrap();
        assert_eq!(prefs.budget.breakdown.get("flights"), Some(&1000.0));
        assert_eq!(prefs.accommodation.kind, "hotel");
    }
}
