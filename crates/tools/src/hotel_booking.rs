//! Hotel booking tool.

use crate::booking::BookingEngine;
use async_trait::async_trait;
use std::sync::Arc;
use voyagent_core::error::ToolError;
use voyagent_core::session::SessionContext;
use voyagent_core::tool::{Tool, ToolResult};
use voyagent_datasets::DatasetStore;

pub struct HotelBookingTool {
    store: Arc<DatasetStore>,
    engine: BookingEngine,
}

impl HotelBookingTool {
    pub fn new(store: Arc<DatasetStore>, engine: BookingEngine) -> Self {
        Self { store, engine }
    }
}

#[async_trait]
impl Tool for HotelBookingTool {
    fn name(&self) -> &str {
        "book_hotel"
    }

    fn description(&self) -> &str {
        "Book a hotel stay by its id from search results. Requires payment authorization; the charge is price-per-night times the number of nights."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "hotel_id": {
                    "type": "string",
                    "description": "Hotel ID from search results (e.g., 'HTL001')"
                },
                "check_in": {
                    "type": "string",
                    "description": "Check-in date in YYYY-MM-DD format"
                },
                "check_out": {
                    "type": "string",
                    "description": "Check-out date in YYYY-MM-DD format"
                }
            },
            "required": ["hotel_id", "check_in", "check_out"]
        })
    }

    async fn execute(
        &self,
        session: &SessionContext,
        arguments: serde_json::Value,
    ) -> Result<ToolResult, ToolError> {
        let hotel_id = arguments["hotel_id"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'hotel_id' argument".into()))?;
        let check_in = arguments["check_in"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'check_in' argument".into()))?;
        let check_out = arguments["check_out"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'check_out' argument".into()))?;

        let outcome = self.engine.book_hotel(
            session,
            self.store.hotels(),
            hotel_id,
            check_in,
            check_out,
        )?;
        Ok(ToolResult::success(&outcome.to_response()))
    }
}
