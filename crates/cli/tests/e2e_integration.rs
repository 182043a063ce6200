//! End-to-end integration tests for the Voyagent tool runtime.
//!
//! These tests exercise the full pipeline from dataset files on disk through
//! the registry dispatch surface: search, budget evaluation, and the
//! payment-gated booking flow.

use std::sync::Arc;

use voyagent_core::session::SessionContext;
use voyagent_core::tool::{ToolCall, ToolRegistry};
use voyagent_datasets::DatasetStore;
use voyagent_tools::default_registry;

// ── Fixtures ─────────────────────────────────────────────────────────────

fn write_datasets(dir: &std::path::Path) {
    std::fs::write(
        dir.join("flights.json"),
        serde_json::json!({
            "flights": [
                {
                    "flight_id": "FL001",
                    "origin": "CGK",
                    "destination": "DPS",
                    "class": "economy",
                    "price": 200.0,
                    "currency": "USD",
                    "airline": "Garuda Indonesia",
                    "duration": "1h 55m",
                    "origin_city": "Jakarta",
                    "destination_city": "Bali"
                },
                {
                    "flight_id": "FL002",
                    "origin": "CGK",
                    "destination": "DPS",
                    "class": "economy",
                    "price": 150.0,
                    "currency": "USD",
                    "airline": "Lion Air",
                    "duration": "2h 05m",
                    "origin_city": "Jakarta",
                    "destination_city": "Bali"
                }
            ]
        })
        .to_string(),
    )
    .unwrap();

    std::fs::write(
        dir.join("hotels.json"),
        serde_json::json!({
            "hotels": [
                {
                    "hotel_id": "HTL001",
                    "name": "Ocean View Resort",
                    "destination_city": "Denpasar, Bali",
                    "location": "Seminyak",
                    "rating": 4.5,
                    "price_per_night": 100.0,
                    "currency": "USD",
                    "room_type": "Deluxe Double"
                }
            ]
        })
        .to_string(),
    )
    .unwrap();

    std::fs::write(
        dir.join("activities.json"),
        serde_json::json!({
            "activities": [
                {
                    "activity_id": "ACT001",
                    "name": "Sunset Beach Walk",
                    "destination_city": "Denpasar, Bali",
                    "category": "beaches",
                    "rating": 4.9,
                    "price": 0.0,
                    "currency": "USD",
                    "duration": "2 hours"
                }
            ]
        })
        .to_string(),
    )
    .unwrap();

    std::fs::write(
        dir.join("user_calendar.json"),
        serde_json::json!({
            "availability": {
                "2025-10-01": "available",
                "2025-10-02": "available",
                "2025-10-03": "blocked",
                "2025-10-04": "available"
            },
            "blocked_events": [
                {"date": "2025-10-03", "description": "Quarterly review"}
            ],
            "vacation_preferences": {"preferred_trip_length_days": 7}
        })
        .to_string(),
    )
    .unwrap();

    std::fs::write(
        dir.join("user_preferences.json"),
        serde_json::json!({
            "budget": {
                "total": 3000.0,
                "currency": "USD",
                "breakdown": {"flights": 1000.0, "hotels": 1500.0, "activities": 500.0}
            },
            "interests": ["beaches", "culture"],
            "destinations": ["Bali", "Tokyo"],
            "accommodation": {"type": "hotel", "min_rating": 4.0, "amenities": ["wifi", "pool"]}
        })
        .to_string(),
    )
    .unwrap();
}

fn registry_from_disk(dir: &std::path::Path) -> ToolRegistry {
    write_datasets(dir);
    let store = Arc::new(DatasetStore::load(dir).expect("datasets should load"));
    default_registry(store)
}

fn call(name: &str, args: serde_json::Value) -> ToolCall {
    ToolCall {
        id: format!("call_{name}"),
        name: name.to_string(),
        arguments: args,
    }
}

// ── E2E: Search Pipeline ─────────────────────────────────────────────────

#[tokio::test]
async fn e2e_flight_search_sorted_and_priced() {
    let dir = tempfile::tempdir().unwrap();
    let registry = registry_from_disk(dir.path());
    let session = SessionContext::new();

    let result = registry
        .dispatch(
            &session,
            &call(
                "search_flights",
                serde_json::json!({
                    "origin": "Jakarta",
                    "destination": "Bali",
                    "passengers": 2
                }),
            ),
        )
        .await;

    assert!(result.success);
    let data = result.data.unwrap();
    assert_eq!(data["total_results"], 2);
    // Cheapest first, total = unit price × passengers.
    assert_eq!(data["flights"][0]["flight_id"], "FL002");
    assert_eq!(data["flights"][0]["total_price"], 300.0);
    assert_eq!(data["flights"][1]["total_price"], 400.0);
}

#[tokio::test]
async fn e2e_hotel_search_computes_stay_total() {
    let dir = tempfile::tempdir().unwrap();
    let registry = registry_from_disk(dir.path());
    let session = SessionContext::new();

    let result = registry
        .dispatch(
            &session,
            &call(
                "search_hotels",
                serde_json::json!({
                    "destination": "Bali",
                    "check_in": "2025-10-01",
                    "check_out": "2025-10-04"
                }),
            ),
        )
        .await;

    assert!(result.success);
    let data = result.data.unwrap();
    assert_eq!(data["hotels"][0]["nights"], 3);
    assert_eq!(data["hotels"][0]["total_price"], 300.0);
}

#[tokio::test]
async fn e2e_calendar_and_preferences_lookup() {
    let dir = tempfile::tempdir().unwrap();
    let registry = registry_from_disk(dir.path());
    let session = SessionContext::new();

    let calendar = registry
        .dispatch(
            &session,
            &call(
                "get_user_calendar",
                serde_json::json!({"start_date": "2025-10-01", "end_date": "2025-10-04"}),
            ),
        )
        .await;
    assert!(calendar.success);
    let data = calendar.data.unwrap();
    assert_eq!(data["available_dates"].as_array().unwrap().len(), 3);
    assert_eq!(data["blocked_dates"][0], "2025-10-03");

    let prefs = registry
        .dispatch(&session, &call("get_user_preferences", serde_json::json!({})))
        .await;
    assert!(prefs.success);
    assert_eq!(prefs.data.unwrap()["budget"]["total"], 3000.0);
}

// ── E2E: Budget Evaluation ───────────────────────────────────────────────

#[tokio::test]
async fn e2e_budget_excludes_activities() {
    let dir = tempfile::tempdir().unwrap();
    let registry = registry_from_disk(dir.path());
    let session = SessionContext::new();

    let result = registry
        .dispatch(
            &session,
            &call(
                "calculate_budget",
                serde_json::json!({
                    "planned_expenses": [
                        {"category": "flights", "amount": 400.0},
                        {"category": "hotels", "amount": 300.0},
                        {"category": "activities", "amount": 5000.0}
                    ]
                }),
            ),
        )
        .await;

    assert!(result.success);
    let data = result.data.unwrap();
    assert_eq!(data["total_spent"], 700.0);
    assert_eq!(data["within_budget"], true);
    assert!(data["note"].as_str().unwrap().contains("Activities"));
}

// ── E2E: Payment-Gated Booking Flow ──────────────────────────────────────

#[tokio::test]
async fn e2e_booking_requires_session_authorization() {
    let dir = tempfile::tempdir().unwrap();
    let registry = registry_from_disk(dir.path());
    let session = SessionContext::new();

    // Closed gate: booking fails with setup instructions.
    let denied = registry
        .dispatch(
            &session,
            &call("book_flight", serde_json::json!({"flight_id": "FL002"})),
        )
        .await;
    assert!(denied.success);
    let data = denied.data.unwrap();
    assert_eq!(data["booking_status"], "failed");
    assert_eq!(data["reason"], "payment_required");
    assert_eq!(data["action_required"], "setup_payment");
    assert!(session.bookings().is_empty());

    // Authorize and retry: booking confirms and is recorded.
    session.authorize_payment();
    let confirmed = registry
        .dispatch(
            &session,
            &call("book_flight", serde_json::json!({"flight_id": "FL002"})),
        )
        .await;
    let data = confirmed.data.unwrap();
    assert_eq!(data["booking_status"], "confirmed");
    assert!(
        data["booking_reference"]
            .as_str()
            .unwrap()
            .starts_with("BK-FL002-")
    );
    assert_eq!(data["total_charged"], 150.0);
    assert_eq!(session.bookings().len(), 1);
    assert_eq!(session.total_charged(), 150.0);
}

#[tokio::test]
async fn e2e_authorization_is_session_scoped() {
    let dir = tempfile::tempdir().unwrap();
    let registry = registry_from_disk(dir.path());

    let authorized = SessionContext::new();
    authorized.authorize_payment();
    let fresh = SessionContext::new();

    let ok = registry
        .dispatch(
            &authorized,
            &call("book_flight", serde_json::json!({"flight_id": "FL001"})),
        )
        .await;
    assert_eq!(ok.data.unwrap()["booking_status"], "confirmed");

    // A different session does not inherit the authorization.
    let denied = registry
        .dispatch(
            &fresh,
            &call("book_flight", serde_json::json!({"flight_id": "FL001"})),
        )
        .await;
    assert_eq!(denied.data.unwrap()["booking_status"], "failed");
}

#[tokio::test]
async fn e2e_full_trip_bookings_accumulate() {
    let dir = tempfile::tempdir().unwrap();
    let registry = registry_from_disk(dir.path());
    let session = SessionContext::new();
    session.authorize_payment();

    let flight = registry
        .dispatch(
            &session,
            &call("book_flight", serde_json::json!({"flight_id": "FL002"})),
        )
        .await;
    let hotel = registry
        .dispatch(
            &session,
            &call(
                "book_hotel",
                serde_json::json!({
                    "hotel_id": "HTL001",
                    "check_in": "2025-10-01",
                    "check_out": "2025-10-04"
                }),
            ),
        )
        .await;

    let flight_ref = flight.data.unwrap()["booking_reference"]
        .as_str()
        .unwrap()
        .to_string();
    let hotel_ref = hotel.data.unwrap()["booking_reference"]
        .as_str()
        .unwrap()
        .to_string();
    assert_ne!(flight_ref, hotel_ref);

    assert_eq!(session.bookings().len(), 2);
    assert_eq!(session.total_charged(), 450.0); // 150 flight + 300 hotel
}

// ── E2E: Transcript Serialization ────────────────────────────────────────

#[tokio::test]
async fn e2e_tool_output_feeds_the_transcript() {
    use voyagent_core::message::{Conversation, Message, Role};

    let dir = tempfile::tempdir().unwrap();
    let registry = registry_from_disk(dir.path());
    let session = SessionContext::new();

    let mut conv = Conversation::new();
    conv.push(Message::user("Find me a flight from Jakarta to Bali"));

    let result = registry
        .dispatch(
            &session,
            &call(
                "search_flights",
                serde_json::json!({"origin": "Jakarta", "destination": "Bali"}),
            ),
        )
        .await;
    conv.push(Message::tool_result(
        result.call_id.as_str(),
        result.output.as_str(),
    ));
    conv.push(Message::assistant("The cheapest option is Lion Air at $150."));

    assert_eq!(conv.messages.len(), 3);
    assert_eq!(conv.messages[1].role, Role::Tool);
    assert!(conv.messages[1].content.contains("FL002"));

    // The whole transcript serializes for the runtime.
    let json = serde_json::to_string(&conv).unwrap();
    assert!(json.contains("tool"));
}

// ── E2E: Dispatch Fault Handling ─────────────────────────────────────────

#[tokio::test]
async fn e2e_unknown_tool_becomes_error_payload() {
    let dir = tempfile::tempdir().unwrap();
    let registry = registry_from_disk(dir.path());
    let session = SessionContext::new();

    let result = registry
        .dispatch(&session, &call("teleport", serde_json::json!({})))
        .await;

    assert!(!result.success);
    let data = result.data.unwrap();
    assert!(data["error"].as_str().unwrap().contains("teleport"));
}

#[tokio::test]
async fn e2e_invalid_arguments_become_error_payload() {
    let dir = tempfile::tempdir().unwrap();
    let registry = registry_from_disk(dir.path());
    let session = SessionContext::new();

    let result = registry
        .dispatch(&session, &call("search_flights", serde_json::json!({})))
        .await;

    assert!(!result.success);
    assert!(result.data.unwrap()["error"].as_str().is_some());
}
