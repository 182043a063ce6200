//! Budget check tool.

use crate::budget::{evaluate, parse_expenses};
use async_trait::async_trait;
use std::sync::Arc;
use voyagent_core::error::ToolError;
use voyagent_core::session::SessionContext;
use voyagent_core::tool::{Tool, ToolResult};
use voyagent_datasets::DatasetStore;

pub struct BudgetCheckTool {
    store: Arc<DatasetStore>,
}

impl BudgetCheckTool {
    pub fn new(store: Arc<DatasetStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for BudgetCheckTool {
    fn name(&self) -> &str {
        "calculate_budget"
    }

    fn description(&self) -> &str {
        "Calculate total planned expenses and validate them against the user's budget. Activities are not included; users book those separately."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "planned_expenses": {
                    "type": ["string", "array"],
                    "description": "Expenses as a JSON array, e.g. [{\"category\":\"flights\",\"amount\":850}]. A JSON-encoded array in a string is also accepted."
                }
            },
            "required": ["planned_expenses"]
        })
    }

    async fn execute(
        &self,
        _session: &SessionContext,
        arguments: serde_json::Value,
    ) -> Result<ToolResult, ToolError> {
        let expenses = parse_expenses(&arguments["planned_expenses"])?;
        let report = evaluate(&expenses, self.store.preferences());
        Ok(ToolResult::success(&report))
    }
}
