//! Flight booking tool — the first of the two side-effecting tools.

use crate::booking::BookingEngine;
use async_trait::async_trait;
use std::sync::Arc;
use voyagent_core::error::ToolError;
use voyagent_core::session::SessionContext;
use voyagent_core::tool::{Tool, ToolResult};
use voyagent_datasets::DatasetStore;

pub struct FlightBookingTool {
    store: Arc<DatasetStore>,
    engine: BookingEngine,
}

impl FlightBookingTool {
    pub fn new(store: Arc<DatasetStore>, engine: BookingEngine) -> Self {
        Self { store, engine }
    }
}

#[async_trait]
impl Tool for FlightBookingTool {
    fn name(&self) -> &str {
        "book_flight"
    }

    fn description(&self) -> &str {
        "Book a flight by its id from search results. Requires payment authorization; without it the booking fails and asks the user to configure payment first."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "flight_id": {
                    "type": "string",
                    "description": "Flight ID from search results (e.g., 'FL001')"
                }
            },
            "required": ["flight_id"]
        })
    }

    async fn execute(
        &self,
        session: &SessionContext,
        arguments: serde_json::Value,
    ) -> Result<ToolResult, ToolError> {
        let flight_id = arguments["flight_id"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'flight_id' argument".into()))?;

        let outcome = self
            .engine
            .book_flight(session, self.store.flights(), flight_id);
        Ok(ToolResult::success(&outcome.to_response()))
    }
}
