//! Catalog record types — the immutable, preloaded inventory.
//!
//! Flights, hotels, and activities are read-only rows loaded once from the
//! static dataset files. Searches never mutate them; per-call derived fields
//! (total prices, nights) are computed into fresh response structs.

use serde::{Deserialize, Serialize};

/// Cabin class on a flight catalog row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelClass {
    Economy,
    Business,
}

impl TravelClass {
    /// Parse from the wire form used in tool arguments ("economy"/"business").
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "economy" => Some(Self::Economy),
            "business" => Some(Self::Business),
            _ => None,
        }
    }
}

impl std::fmt::Display for TravelClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Economy => write!(f, "economy"),
            Self::Business => write!(f, "business"),
        }
    }
}

/// An immutable flight catalog row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flight {
    /// Unique id within the flight collection (e.g., "FL001")
    pub flight_id: String,

    /// Departure airport code (e.g., "CGK")
    pub origin: String,

    /// Arrival airport code (e.g., "DPS")
    pub destination: String,

    /// Cabin class
    #[serde(rename = "class")]
    pub travel_class: TravelClass,

    /// Price per passenger
    pub price: f64,

    /// ISO currency code
    pub currency: String,

    pub airline: String,

    /// Human-readable duration (e.g., "2h 05m")
    pub duration: String,

    pub origin_city: String,
    pub destination_city: String,
}

/// An immutable hotel catalog row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hotel {
    /// Unique id within the hotel collection (e.g., "HTL001")
    pub hotel_id: String,

    pub name: String,

    /// City used for destination matching (e.g., "Denpasar, Bali")
    pub destination_city: String,

    /// Neighborhood / address line
    pub location: String,

    /// Guest rating, higher is better
    pub rating: f64,

    pub price_per_night: f64,

    /// ISO currency code
    pub currency: String,

    pub room_type: String,
}

/// An immutable activity catalog row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Unique id within the activity collection (e.g., "ACT001")
    pub activity_id: String,

    pub name: String,

    /// City used for destination matching
    pub destination_city: String,

    /// Interest category (e.g., "beaches", "culture")
    pub category: String,

    /// Guest rating, higher is better
    pub rating: f64,

    pub price: f64,

    /// ISO currency code
    pub currency: String,

    /// Human-readable duration (e.g., "3 hours")
    pub duration: String,
}
