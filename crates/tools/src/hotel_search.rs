//! Hotel search tool.

use crate::search::find_hotels;
use async_trait::async_trait;
use std::sync::Arc;
use voyagent_core::error::ToolError;
use voyagent_core::session::SessionContext;
use voyagent_core::tool::{Tool, ToolResult};
use voyagent_datasets::DatasetStore;

const DEFAULT_MIN_RATING: f64 = 4.0;

pub struct HotelSearchTool {
    store: Arc<DatasetStore>,
}

impl HotelSearchTool {
    pub fn new(store: Arc<DatasetStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for HotelSearchTool {
    fn name(&self) -> &str {
        "search_hotels"
    }

    fn description(&self) -> &str {
        "Search for available hotels at a destination for a stay. Returns up to 5 matches sorted by rating, then total price."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "destination": {
                    "type": "string",
                    "description": "Destination city name (e.g., 'Bali', 'Tokyo')"
                },
                "check_in": {
                    "type": "string",
                    "description": "Check-in date in YYYY-MM-DD format"
                },
                "check_out": {
                    "type": "string",
                    "description": "Check-out date in YYYY-MM-DD format"
                },
                "guests": {
                    "type": "integer",
                    "description": "Number of guests (default: 1)",
                    "default": 1,
                    "minimum": 1
                },
                "min_rating": {
                    "type": "number",
                    "description": "Minimum hotel rating (default: 4.0)",
                    "default": 4.0
                }
            },
            "required": ["destination", "check_in", "check_out"]
        })
    }

    async fn execute(
        &self,
        _session: &SessionContext,
        arguments: serde_json::Value,
    ) -> Result<ToolResult, ToolError> {
        let destination = arguments["destination"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'destination' argument".into()))?;
        let check_in = arguments["check_in"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'check_in' argument".into()))?;
        let check_out = arguments["check_out"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'check_out' argument".into()))?;

        // Guests do not affect pricing in the mock catalog, but a nonsense
        // count is still malformed input.
        if let Some(guests) = arguments.get("guests").filter(|v| !v.is_null()) {
            guests.as_u64().filter(|&n| n >= 1).ok_or_else(|| {
                ToolError::InvalidArguments("guests must be an integer of at least 1".into())
            })?;
        }

        let min_rating = match &arguments["min_rating"] {
            serde_json::Value::Null => DEFAULT_MIN_RATING,
            value => value.as_f64().ok_or_else(|| {
                ToolError::InvalidArguments("min_rating must be a number".into())
            })?,
        };

        let response = find_hotels(
            self.store.hotels(),
            destination,
            check_in,
            check_out,
            min_rating,
        )?;
        Ok(ToolResult::success(&response))
    }
}
