//! Search engine — pure filter/sort functions over the catalog collections.
//!
//! Every function here is deterministic and side-effect-free: it takes
//! catalog slices, filters and ranks them, and computes per-call derived
//! fields (total prices, nights) into fresh response structs. Zero matches is
//! a normal outcome carried with an explanatory message, never an error.

use crate::dates::{parse_date, stay_nights};
use crate::interests::InterestFilter;
use serde::Serialize;
use std::cmp::Ordering;
use voyagent_core::catalog::{Activity, Flight, Hotel, TravelClass};
use voyagent_core::error::ToolError;
use voyagent_core::profile::{BlockedEvent, CalendarStatus, UserCalendar};

/// City-name → airport-code lookup table for the mock catalog.
pub const CITY_AIRPORTS: &[(&str, &str)] = &[
    ("jakarta", "CGK"),
    ("bali", "DPS"),
    ("denpasar", "DPS"),
    ("tokyo", "NRT"),
    ("paris", "CDG"),
    ("barcelona", "BCN"),
    ("santorini", "JTR"),
];

/// Maximum results returned per search.
pub const FLIGHT_RESULT_LIMIT: usize = 5;
pub const HOTEL_RESULT_LIMIT: usize = 5;
pub const ACTIVITY_RESULT_LIMIT: usize = 10;

/// Resolve a city name to its airport code, case-insensitively.
///
/// Unrecognized names are upper-cased verbatim as a best-effort code, so
/// passing "CGK" (or "cgk") works the same as passing "Jakarta".
pub fn resolve_city_code(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    CITY_AIRPORTS
        .iter()
        .find(|(city, _)| *city == lowered)
        .map(|(_, code)| (*code).to_string())
        .unwrap_or_else(|| name.trim().to_uppercase())
}

/// A flight catalog row priced for the requested party size.
#[derive(Debug, Clone, Serialize)]
pub struct FlightOption {
    #[serde(flatten)]
    pub flight: Flight,
    pub passengers: u32,
    pub total_price: f64,
}

#[derive(Debug, Serialize)]
pub struct FlightSearchResponse {
    pub flights: Vec<FlightOption>,
    /// Match count before truncation to the result limit
    pub total_results: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Find flights by exact (origin, destination, class) match.
///
/// Results are sorted ascending by total price and truncated to the top 5.
pub fn find_flights(
    flights: &[Flight],
    origin: &str,
    destination: &str,
    passengers: u32,
    travel_class: TravelClass,
) -> FlightSearchResponse {
    let origin_code = resolve_city_code(origin);
    let destination_code = resolve_city_code(destination);
    tracing::debug!(
        origin = %origin_code,
        destination = %destination_code,
        passengers,
        class = %travel_class,
        "searching flights"
    );

    let mut matches: Vec<FlightOption> = flights
        .iter()
        .filter(|f| {
            f.origin == origin_code
                && f.destination == destination_code
                && f.travel_class == travel_class
        })
        .map(|f| FlightOption {
            flight: f.clone(),
            passengers,
            total_price: f.price * f64::from(passengers),
        })
        .collect();

    if matches.is_empty() {
        return FlightSearchResponse {
            flights: Vec::new(),
            total_results: 0,
            message: Some(format!(
                "No flights found from {origin_code} to {destination_code}"
            )),
        };
    }

    matches.sort_by(|a, b| {
        a.total_price
            .partial_cmp(&b.total_price)
            .unwrap_or(Ordering::Equal)
    });
    let total_results = matches.len();
    matches.truncate(FLIGHT_RESULT_LIMIT);

    FlightSearchResponse {
        flights: matches,
        total_results,
        message: None,
    }
}

/// A hotel catalog row priced for the requested stay.
#[derive(Debug, Clone, Serialize)]
pub struct HotelOption {
    #[serde(flatten)]
    pub hotel: Hotel,
    pub nights: i64,
    pub total_price: f64,
    pub check_in: String,
    pub check_out: String,
}

#[derive(Debug, Serialize)]
pub struct HotelSearchResponse {
    pub hotels: Vec<HotelOption>,
    /// Match count before truncation to the result limit
    pub total_results: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Find hotels by destination substring and minimum rating.
///
/// Destination matching is case-insensitive against each hotel's city, so
/// "Bali" matches "Denpasar, Bali". Sort key is (rating desc, total asc),
/// truncated to the top 5. Fails only on an invalid date range.
pub fn find_hotels(
    hotels: &[Hotel],
    destination: &str,
    check_in: &str,
    check_out: &str,
    min_rating: f64,
) -> Result<HotelSearchResponse, ToolError> {
    let nights = stay_nights(check_in, check_out)?;
    let needle = destination.trim().to_lowercase();
    tracing::debug!(destination = %needle, nights, min_rating, "searching hotels");

    let mut matches: Vec<HotelOption> = hotels
        .iter()
        .filter(|h| h.destination_city.to_lowercase().contains(&needle) && h.rating >= min_rating)
        .map(|h| HotelOption {
            hotel: h.clone(),
            nights,
            total_price: h.price_per_night * nights as f64,
            check_in: check_in.to_string(),
            check_out: check_out.to_string(),
        })
        .collect();

    if matches.is_empty() {
        return Ok(HotelSearchResponse {
            hotels: Vec::new(),
            total_results: 0,
            message: Some(format!("No hotels found in {destination} meeting criteria")),
        });
    }

    matches.sort_by(|a, b| {
        b.hotel
            .rating
            .partial_cmp(&a.hotel.rating)
            .unwrap_or(Ordering::Equal)
            .then(
                a.total_price
                    .partial_cmp(&b.total_price)
                    .unwrap_or(Ordering::Equal),
            )
    });
    let total_results = matches.len();
    matches.truncate(HOTEL_RESULT_LIMIT);

    Ok(HotelSearchResponse {
        hotels: matches,
        total_results,
        message: None,
    })
}

#[derive(Debug, Serialize)]
pub struct ActivitySearchResponse {
    pub activities: Vec<Activity>,
    /// Match count before truncation to the result limit
    pub total_results: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Find activities by destination substring and optional interest filter.
///
/// Sorted descending by rating, truncated to the top 10.
pub fn find_activities(
    activities: &[Activity],
    destination: &str,
    interests: &InterestFilter,
) -> ActivitySearchResponse {
    let needle = destination.trim().to_lowercase();
    tracing::debug!(destination = %needle, ?interests, "searching activities");

    let mut matches: Vec<Activity> = activities
        .iter()
        .filter(|a| {
            a.destination_city.to_lowercase().contains(&needle) && interests.matches(&a.category)
        })
        .cloned()
        .collect();

    if matches.is_empty() {
        return ActivitySearchResponse {
            activities: Vec::new(),
            total_results: 0,
            message: Some(format!("No activities found in {destination}")),
        };
    }

    matches.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal));
    let total_results = matches.len();
    matches.truncate(ACTIVITY_RESULT_LIMIT);

    ActivitySearchResponse {
        activities: matches,
        total_results,
        message: None,
    }
}

#[derive(Debug, Serialize)]
pub struct CalendarWindow {
    pub available_dates: Vec<String>,
    pub blocked_dates: Vec<String>,
    pub blocked_events: Vec<BlockedEvent>,
    pub vacation_preferences: serde_json::Map<String, serde_json::Value>,
}

/// Partition the calendar dates within [start, end] by availability.
///
/// Dates are zero-padded YYYY-MM-DD strings, so lexicographic comparison is a
/// valid date comparison; both bounds are validated as real dates first.
pub fn calendar_window(
    calendar: &UserCalendar,
    start_date: &str,
    end_date: &str,
) -> Result<CalendarWindow, ToolError> {
    parse_date("start_date", start_date)?;
    parse_date("end_date", end_date)?;

    let mut available_dates = Vec::new();
    let mut blocked_dates = Vec::new();
    for (date, status) in &calendar.availability {
        if date.as_str() >= start_date && date.as_str() <= end_date {
            match status {
                CalendarStatus::Available => available_dates.push(date.clone()),
                CalendarStatus::Blocked => blocked_dates.push(date.clone()),
            }
        }
    }

    let blocked_events = calendar
        .blocked_events
        .iter()
        .filter(|e| e.date.as_str() >= start_date && e.date.as_str() <= end_date)
        .cloned()
        .collect();

    Ok(CalendarWindow {
        available_dates,
        blocked_dates,
        blocked_events,
        vacation_preferences: calendar.vacation_preferences.clone(),
    })
}
