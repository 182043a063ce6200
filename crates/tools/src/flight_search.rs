//! Flight search tool.

use crate::search::find_flights;
use async_trait::async_trait;
use std::sync::Arc;
use voyagent_core::catalog::TravelClass;
use voyagent_core::error::ToolError;
use voyagent_core::session::SessionContext;
use voyagent_core::tool::{Tool, ToolResult};
use voyagent_datasets::DatasetStore;

pub struct FlightSearchTool {
    store: Arc<DatasetStore>,
}

impl FlightSearchTool {
    pub fn new(store: Arc<DatasetStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for FlightSearchTool {
    fn name(&self) -> &str {
        "search_flights"
    }

    fn description(&self) -> &str {
        "Search for available flights between two cities. Accepts airport codes (e.g., 'CGK') or city names (e.g., 'Jakarta'). Returns up to 5 matches sorted by total price."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "origin": {
                    "type": "string",
                    "description": "Departure airport code (e.g., 'CGK') or city name (e.g., 'Jakarta')"
                },
                "destination": {
                    "type": "string",
                    "description": "Arrival airport code (e.g., 'DPS') or city name (e.g., 'Bali')"
                },
                "passengers": {
                    "type": "integer",
                    "description": "Number of passengers (default: 1)",
                    "default": 1,
                    "minimum": 1
                },
                "travel_class": {
                    "type": "string",
                    "enum": ["economy", "business"],
                    "description": "Cabin class (default: economy)",
                    "default": "economy"
                }
            },
            "required": ["origin", "destination"]
        })
    }

    async fn execute(
        &self,
        _session: &SessionContext,
        arguments: serde_json::Value,
    ) -> Result<ToolResult, ToolError> {
        let origin = arguments["origin"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'origin' argument".into()))?;
        let destination = arguments["destination"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'destination' argument".into()))?;

        let passengers = match &arguments["passengers"] {
            serde_json::Value::Null => 1,
            value => value.as_u64().filter(|&n| n >= 1).ok_or_else(|| {
                ToolError::InvalidArguments("passengers must be an integer of at least 1".into())
            })? as u32,
        };

        let class_arg = arguments["travel_class"].as_str().unwrap_or("economy");
        let travel_class = TravelClass::parse(class_arg).ok_or_else(|| {
            ToolError::InvalidArguments(format!(
                "travel_class must be 'economy' or 'business', got '{class_arg}'"
            ))
        })?;

        let response = find_flights(
            self.store.flights(),
            origin,
            destination,
            passengers,
            travel_class,
        );
        Ok(ToolResult::success(&response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::fixture_store;

    #[tokio::test]
    async fn finds_and_prices_flights() {
        let tool = FlightSearchTool::new(fixture_store());
        let session = SessionContext::new();
        let result = tool
            .execute(
                &session,
                serde_json::json!({
                    "origin": "Jakarta",
                    "destination": "Bali",
                    "passengers": 2,
                    "travel_class": "economy"
                }),
            )
            .await
            .unwrap();

        assert!(result.success);
        let data = result.data.unwrap();
        let flights = data["flights"].as_array().unwrap();
        assert!(!flights.is_empty());
        // Fixture FL001 is priced 200/passenger.
        assert_eq!(flights[0]["total_price"], 400.0);
        assert_eq!(flights[0]["passengers"], 2);
    }

    #[tokio::test]
    async fn defaults_apply_when_optionals_missing() {
        let tool = FlightSearchTool::new(fixture_store());
        let session = SessionContext::new();
        let result = tool
            .execute(
                &session,
                serde_json::json!({"origin": "CGK", "destination": "DPS"}),
            )
            .await
            .unwrap();

        let data = result.data.unwrap();
        assert_eq!(data["flights"][0]["passengers"], 1);
        assert_eq!(data["flights"][0]["class"], "economy");
    }

    #[tokio::test]
    async fn empty_match_is_a_message_not_an_error() {
        let tool = FlightSearchTool::new(fixture_store());
        let session = SessionContext::new();
        let result = tool
            .execute(
                &session,
                serde_json::json!({"origin": "Atlantis", "destination": "Bali"}),
            )
            .await
            .unwrap();

        assert!(result.success);
        let data = result.data.unwrap();
        assert_eq!(data["total_results"], 0);
        assert!(data["message"].as_str().unwrap().contains("No flights"));
    }

    #[tokio::test]
    async fn zero_passengers_rejected() {
        let tool = FlightSearchTool::new(fixture_store());
        let session = SessionContext::new();
        let result = tool
            .execute(
                &session,
                serde_json::json!({"origin": "CGK", "destination": "DPS", "passengers": 0}),
            )
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn unknown_class_rejected() {
        let tool = FlightSearchTool::new(fixture_store());
        let session = SessionContext::new();
        let result = tool
            .execute(
                &session,
                serde_json::json!({
                    "origin": "CGK",
                    "destination": "DPS",
                    "travel_class": "first"
                }),
            )
            .await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    #[test]
    fn tool_definition() {
        let tool = FlightSearchTool::new(fixture_store());
        let def = tool.to_definition();
        assert_eq!(def.name, "search_flights");
        assert_eq!(def.parameters["properties"]["passengers"]["default"], 1);
    }
}
