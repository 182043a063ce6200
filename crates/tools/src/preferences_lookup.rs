//! Preferences lookup tool — the user's static travel preference profile.

use async_trait::async_trait;
use std::sync::Arc;
use voyagent_core::error::ToolError;
use voyagent_core::session::SessionContext;
use voyagent_core::tool::{Tool, ToolResult};
use voyagent_datasets::DatasetStore;

pub struct PreferencesLookupTool {
    store: Arc<DatasetStore>,
}

impl PreferencesLookupTool {
    pub fn new(store: Arc<DatasetStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for PreferencesLookupTool {
    fn name(&self) -> &str {
        "get_user_preferences"
    }

    fn description(&self) -> &str {
        "Fetch the user's travel preferences: budget with per-category limits, interests, preferred destinations, and accommodation taste."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn execute(
        &self,
        _session: &SessionContext,
        _arguments: serde_json::Value,
    ) -> Result<ToolResult, ToolError> {
        Ok(ToolResult::success(self.store.preferences()))
    }
}
