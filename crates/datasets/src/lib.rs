//! Static dataset store for the Voyagent tool layer.
//!
//! Five read-only collections back every tool call: flights, hotels,
//! activities, the user calendar, and the user preference profile. They are
//! loaded eagerly from JSON files in a data directory, validated once, and
//! never mutated afterwards — searches compute derived fields into fresh
//! response structs instead of writing back.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::path::Path;
use voyagent_core::catalog::{Activity, Flight, Hotel};
use voyagent_core::error::DataError;
use voyagent_core::profile::{UserCalendar, UserPreferences};

/// File names expected inside the data directory.
pub const FLIGHTS_FILE: &str = "flights.json";
pub const HOTELS_FILE: &str = "hotels.json";
pub const ACTIVITIES_FILE: &str = "activities.json";
pub const CALENDAR_FILE: &str = "user_calendar.json";
pub const PREFERENCES_FILE: &str = "user_preferences.json";

// The catalog files wrap their rows in a named key, matching the wire shape
// the agent prompt documents ({"flights": [...]}).
#[derive(Deserialize)]
struct FlightsFile {
    flights: Vec<Flight>,
}

#[derive(Deserialize)]
struct HotelsFile {
    hotels: Vec<Hotel>,
}

#[derive(Deserialize)]
struct ActivitiesFile {
    activities: Vec<Activity>,
}

/// Read-only access to all five collections.
#[derive(Debug)]
pub struct DatasetStore {
    flights: Vec<Flight>,
    hotels: Vec<Hotel>,
    activities: Vec<Activity>,
    calendar: UserCalendar,
    preferences: UserPreferences,
}

impl DatasetStore {
    /// Load and validate every collection from `dir`.
    ///
    /// A missing file is `DataError::Unavailable`; unparseable JSON or a
    /// duplicate catalog id is `DataError::Malformed`. Both are fatal to
    /// startup — tools never observe a partially loaded store.
    pub fn load(dir: &Path) -> Result<Self, DataError> {
        let flights: FlightsFile = load_file(dir, FLIGHTS_FILE)?;
        let hotels: HotelsFile = load_file(dir, HOTELS_FILE)?;
        let activities: ActivitiesFile = load_file(dir, ACTIVITIES_FILE)?;
        let calendar: UserCalendar = load_file(dir, CALENDAR_FILE)?;
        let preferences: UserPreferences = load_file(dir, PREFERENCES_FILE)?;

        let store = Self::from_parts(
            flights.flights,
            hotels.hotels,
            activities.activities,
            calendar,
            preferences,
        )?;
        tracing::info!(
            flights = store.flights.len(),
            hotels = store.hotels.len(),
            activities = store.activities.len(),
            calendar_days = store.calendar.availability.len(),
            "datasets loaded from {}",
            dir.display()
        );
        Ok(store)
    }

    /// Assemble a store from in-memory collections, with the same id
    /// validation as `load`. Used by tests and embedded deployments.
    pub fn from_parts(
        flights: Vec<Flight>,
        hotels: Vec<Hotel>,
        activities: Vec<Activity>,
        calendar: UserCalendar,
        preferences: UserPreferences,
    ) -> Result<Self, DataError> {
        check_unique("flights", flights.iter().map(|f| f.flight_id.as_str()))?;
        check_unique("hotels", hotels.iter().map(|h| h.hotel_id.as_str()))?;
        check_unique("activities", activities.iter().map(|a| a.activity_id.as_str()))?;
        Ok(Self {
            flights,
            hotels,
            activities,
            calendar,
            preferences,
        })
    }

    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn calendar(&self) -> &UserCalendar {
        &self.calendar
    }

    pub fn preferences(&self) -> &UserPreferences {
        &self.preferences
    }
}

fn load_file<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<T, DataError> {
    let path = dir.join(file);
    let content = std::fs::read_to_string(&path).map_err(|e| DataError::Unavailable {
        collection: file.to_string(),
        reason: format!("{}: {e}", path.display()),
    })?;
    serde_json::from_str(&content).map_err(|e| DataError::Malformed {
        collection: file.to_string(),
        reason: e.to_string(),
    })
}

fn check_unique<'a>(
    collection: &str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), DataError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DataError::Malformed {
                collection: collection.to_string(),
                reason: format!("duplicate id '{id}'"),
            });
        }
    }
    Ok(())
}
