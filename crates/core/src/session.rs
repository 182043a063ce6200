//! Session context — the per-conversation state tools execute against.
//!
//! The payment gate is session-scoped, not process-global: every tool
//! invocation receives a `&SessionContext`, so two concurrent sessions cannot
//! see each other's authorization or bookings. The gate has exactly two
//! states and two transitions, both triggered by the hosting UI ("configure
//! payment" / "update payment"), never by a tool.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Payment authorization state machine.
///
/// `Unauthorized` is the initial state. No other transitions exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentAuthorization {
    Unauthorized,
    Authorized,
}

/// A confirmed booking. Created only by the booking engine, never mutated.
/// Lives as long as the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfirmation {
    /// Generated reference (e.g., "BK-FL001-4821"), unique within the session
    pub reference: String,

    /// The flight_id or hotel_id that was booked
    pub subject_id: String,

    pub charged_amount: f64,

    /// ISO currency code
    pub currency: String,

    pub booked_at: DateTime<Utc>,

    /// Subject details echoed back to the runtime (route, room type, ...)
    pub details: serde_json::Value,
}

/// Per-session mutable state shared by all tool invocations in a conversation.
///
/// Interior mutability keeps the `Tool::execute(&self, ...)` contract simple;
/// the runtime invokes tools sequentially, so the mutexes are never contended.
pub struct SessionContext {
    payment: Mutex<PaymentAuthorization>,
    bookings: Mutex<Vec<BookingConfirmation>>,
}

impl SessionContext {
    /// Start a fresh session with the gate closed.
    pub fn new() -> Self {
        Self {
            payment: Mutex::new(PaymentAuthorization::Unauthorized),
            bookings: Mutex::new(Vec::new()),
        }
    }

    /// The "payment configured" UI action. Idempotent.
    pub fn authorize_payment(&self) {
        let mut state = self.payment.lock().expect("payment gate poisoned");
        *state = PaymentAuthorization::Authorized;
        tracing::info!("payment gate opened for session");
    }

    /// The "reset/update payment" UI action. Idempotent.
    pub fn reset_payment(&self) {
        let mut state = self.payment.lock().expect("payment gate poisoned");
        *state = PaymentAuthorization::Unauthorized;
        tracing::info!("payment gate closed for session");
    }

    /// Read by the booking engine immediately before any booking work.
    pub fn payment_authorized(&self) -> bool {
        *self.payment.lock().expect("payment gate poisoned") == PaymentAuthorization::Authorized
    }

    /// Record a confirmed booking in the session log.
    pub fn record_booking(&self, confirmation: BookingConfirmation) {
        self.bookings
            .lock()
            .expect("booking log poisoned")
            .push(confirmation);
    }

    /// Whether a reference has already been issued in this session.
    pub fn has_reference(&self, reference: &str) -> bool {
        self.bookings
            .lock()
            .expect("booking log poisoned")
            .iter()
            .any(|b| b.reference == reference)
    }

    /// Snapshot of all bookings made in this session, in order.
    pub fn bookings(&self) -> Vec<BookingConfirmation> {
        self.bookings.lock().expect("booking log poisoned").clone()
    }

    /// Sum of all charged amounts in this session.
    pub fn total_charged(&self) -> f64 {
        self.bookings
            .lock()
            .expect("booking log poisoned")
            .iter()
            .map(|b| b.charged_amount)
            .sum()
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn confirmation(reference: &str, amount: f64) -> BookingConfirmation {
        BookingConfirmation {
            reference: reference.into(),
            subject_id: "FL001".into(),
            charged_amount: amount,
            currency: "USD".into(),
            booked_at: Utc::now(),
            details: serde_json::json!({}),
        }
    }

    #[test]
    fn gate_starts_closed() {
        let session = SessionContext::new();
        assert!(!session.payment_authorized());
    }

    #[test]
    fn gate_transitions() {
        let session = SessionContext::new();
        session.authorize_payment();
        assert!(session.payment_authorized());
        session.reset_payment();
        assert!(!session.payment_authorized());
    }

    #[test]
    fn gate_transitions_are_idempotent() {
        let session = SessionContext::new();
        session.authorize_payment();
        session.authorize_payment();
        assert!(session.payment_authorized());
        session.reset_payment();
        session.reset_payment();
        assert!(!session.payment_authorized());
    }

    #[test]
    fn booking_log_tracks_references_and_totals() {
        let session = SessionContext::new();
        session.record_booking(confirmation("BK-FL001-1234", 200.0));
        session.record_booking(confirmation("BK-HTL001-5678", 300.0));

        assert!(session.has_reference("BK-FL001-1234"));
        assert!(!session.has_reference("BK-FL001-9999"));
        assert_eq!(session.bookings().len(), 2);
        assert!((session.total_charged() - 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn sessions_are_isolated() {
        let a = SessionContext::new();
        let b = SessionContext::new();
        a.authorize_payment();
        assert!(a.payment_authorized());
        assert!(!b.payment_authorized());
    }
}
