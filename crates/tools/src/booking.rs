//! Booking engine — gate check, catalog lookup, charge, confirmation.
//!
//! The payment gate is checked before anything else: an unauthorized attempt
//! returns a failed outcome without touching the catalog, computing a charge,
//! or allocating a reference. Failed bookings are results, not errors — the
//! runtime relays them to the user with an actionable hint.

use crate::dates::stay_nights;
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;
use voyagent_core::catalog::{Flight, Hotel};
use voyagent_core::error::ToolError;
use voyagent_core::session::{BookingConfirmation, SessionContext};

/// Default prefix for generated booking references.
pub const DEFAULT_REFERENCE_PREFIX: &str = "BK";

/// Why a booking did not go through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    PaymentRequired,
    NotFound,
}

/// The outcome of a booking attempt.
#[derive(Debug)]
pub enum BookingOutcome {
    Confirmed(BookingConfirmation),
    Failed {
        reason: FailureReason,
        message: String,
    },
}

impl BookingOutcome {
    fn payment_required() -> Self {
        Self::Failed {
            reason: FailureReason::PaymentRequired,
            message: "Payment information required. Configure payment details before booking."
                .into(),
        }
    }

    /// The wire shape handed back to the agent runtime.
    pub fn to_response(&self) -> serde_json::Value {
        match self {
            Self::Confirmed(confirmation) => serde_json::json!({
                "booking_status": "confirmed",
                "booking_reference": confirmation.reference,
                "total_charged": confirmation.charged_amount,
                "currency": confirmation.currency,
                "details": confirmation.details,
                "message": format!(
                    "Booked successfully! Confirmation: {}",
                    confirmation.reference
                ),
            }),
            Self::Failed { reason, message } => {
                let mut response = serde_json::json!({
                    "booking_status": "failed",
                    "reason": reason,
                    "message": message,
                });
                if *reason == FailureReason::PaymentRequired {
                    response["action_required"] = "setup_payment".into();
                }
                response
            }
        }
    }
}

/// Validates identifiers against the catalog, computes charges, and
/// synthesizes confirmations into the session booking log.
pub struct BookingEngine {
    reference_prefix: String,
}

impl BookingEngine {
    pub fn new(reference_prefix: impl Into<String>) -> Self {
        Self {
            reference_prefix: reference_prefix.into(),
        }
    }

    /// Book a flight by catalog id. Charged amount is the per-passenger
    /// catalog price.
    pub fn book_flight(
        &self,
        session: &SessionContext,
        flights: &[Flight],
        flight_id: &str,
    ) -> BookingOutcome {
        if !session.payment_authorized() {
            tracing::debug!(flight_id, "booking refused, payment gate closed");
            return BookingOutcome::payment_required();
        }

        let Some(flight) = flights.iter().find(|f| f.flight_id == flight_id) else {
            return BookingOutcome::Failed {
                reason: FailureReason::NotFound,
                message: format!("Flight {flight_id} not found"),
            };
        };

        let confirmation = BookingConfirmation {
            reference: self.generate_reference(session, flight_id),
            subject_id: flight_id.to_string(),
            charged_amount: flight.price,
            currency: flight.currency.clone(),
            booked_at: Utc::now(),
            details: serde_json::json!({
                "flight_id": flight.flight_id,
                "airline": flight.airline,
                "route": format!("{} → {}", flight.origin_city, flight.destination_city),
                "duration": flight.duration,
            }),
        };
        session.record_booking(confirmation.clone());
        tracing::info!(reference = %confirmation.reference, "flight booked");
        BookingOutcome::Confirmed(confirmation)
    }

    /// Book a hotel stay by catalog id. Charged amount is price-per-night ×
    /// nights, with the same date rule as hotel search.
    pub fn book_hotel(
        &self,
        session: &SessionContext,
        hotels: &[Hotel],
        hotel_id: &str,
        check_in: &str,
        check_out: &str,
    ) -> Result<BookingOutcome, ToolError> {
        if !session.payment_authorized() {
            tracing::debug!(hotel_id, "booking refused, payment gate closed");
            return Ok(BookingOutcome::payment_required());
        }

        let Some(hotel) = hotels.iter().find(|h| h.hotel_id == hotel_id) else {
            return Ok(BookingOutcome::Failed {
                reason: FailureReason::NotFound,
                message: format!("Hotel {hotel_id} not found"),
            });
        };

        let nights = stay_nights(check_in, check_out)?;
        let confirmation = BookingConfirmation {
            reference: self.generate_reference(session, hotel_id),
            subject_id: hotel_id.to_string(),
            charged_amount: hotel.price_per_night * nights as f64,
            currency: hotel.currency.clone(),
            booked_at: Utc::now(),
            details: serde_json::json!({
                "hotel_id": hotel.hotel_id,
                "name": hotel.name,
                "location": hotel.location,
                "room_type": hotel.room_type,
                "rating": hotel.rating,
                "check_in": check_in,
                "check_out": check_out,
                "nights": nights,
            }),
        };
        session.record_booking(confirmation.clone());
        tracing::info!(reference = %confirmation.reference, "hotel booked");
        Ok(BookingOutcome::Confirmed(confirmation))
    }

    /// Compose `<prefix>-<subject>-<4 digits>`, re-rolling the suffix until it
    /// is unique within the session's booking log.
    fn generate_reference(&self, session: &SessionContext, subject_id: &str) -> String {
        loop {
            let suffix = 1000 + (Uuid::new_v4().as_u128() % 9000) as u32;
            let reference = format!("{}-{subject_id}-{suffix}", self.reference_prefix);
            if !session.has_reference(&reference) {
                return reference;
            }
        }
    }
}

impl Default for BookingEngine {
    fn default() -> Self {
        Self::new(DEFAULT_REFERENCE_PREFIX)
    }
}
