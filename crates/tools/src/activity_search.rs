//! Activity search tool.

use crate::interests::InterestFilter;
use crate::search::find_activities;
use async_trait::async_trait;
use std::sync::Arc;
use voyagent_core::error::ToolError;
use voyagent_core::session::SessionContext;
use voyagent_core::tool::{Tool, ToolResult};
use voyagent_datasets::DatasetStore;

pub struct ActivitySearchTool {
    store: Arc<DatasetStore>,
}

impl ActivitySearchTool {
    pub fn new(store: Arc<DatasetStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for ActivitySearchTool {
    fn name(&self) -> &str {
        "search_activities"
    }

    fn description(&self) -> &str {
        "Find activities and attractions at a destination, optionally filtered by interest categories. Returns up to 10 matches sorted by rating."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "destination": {
                    "type": "string",
                    "description": "Destination city name (e.g., 'Bali', 'Tokyo')"
                },
                "interests": {
                    "type": ["string", "array"],
                    "items": { "type": "string" },
                    "description": "Optional interest categories (e.g., ['beaches', 'culture']). Accepts a single category, an array, or a JSON-encoded array."
                }
            },
            "required": ["destination"]
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
        let interests = InterestFilter::from_value(&arguments["interests"])?;

        let response = find_activities(self.store.activities(), destination, &interests);
        Ok(ToolResult::success(&response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::fixture_store;

    #[tokio::test]
    async fn finds_activities_sorted_by_rating() {
        let tool = ActivitySearchTool::new(fixture_store());
        let session = SessionContext::new();
        let result = tool
            .execute(&session, serde_json::json!({"destination": "Bali"}))
            .await
            .unwrap();

        assert!(result.success);
        let data = result.data.unwrap();
        let activities = data["activities"].as_array().unwrap();
        assert!(!activities.is_empty());
        let ratings: Vec<f64> = activities
            .iter()
            .map(|a| a["rating"].as_f64().unwrap())
            .collect();
        for pair in ratings.windows(2) {
            assert!(pair[0] >= pair[1]);
        }
    }

    #[tokio::test]
    async fn scalar_and_encoded_interest_forms_agree() {
        let tool = ActivitySearchTool::new(fixture_store());
        let session = SessionContext::new();

        let scalar = tool
            .execute(
                &session,
                serde_json::json!({"destination": "Bali", "interests": "beaches"}),
            )
            .await
            .unwrap();
        let encoded = tool
            .execute(
                &session,
                serde_json::json!({"destination": "Bali", "interests": "[\"beaches\"]"}),
            )
            .await
            .unwrap();

        let a = scalar.data.unwrap();
        let b = encoded.data.unwrap();
        assert_eq!(a["total_results"], b["total_results"]);
        for activity in a["activities"].as_array().unwrap() {
            assert_eq!(activity["category"], "beaches");
        }
    }

    #[tokio::test]
    async fn bad_interest_type_rejected() {
        let tool = ActivitySearchTool::new(fixture_store());
        let session = SessionContext::new();
        let result = tool
            .execute(
                &session,
                serde_json::json!({"destination": "Bali", "interests": 42}),
            )
            .await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    #[test]
    fn tool_definition() {
        let tool = ActivitySearchTool::new(fixture_store());
        let def = tool.to_definition();
        assert_eq!(def.name, "search_activities");
        assert_eq!(def.parameters["required"], serde_json::json!(["destination"]));
    }
}
