//! Calendar lookup tool — availability and blocked dates for a range.

use crate::search::calendar_window;
use async_trait::async_trait;
use std::sync::Arc;
use voyagent_core::error::ToolError;
use voyagent_core::session::SessionContext;
use voyagent_core::tool::{Tool, ToolResult};
use voyagent_datasets::DatasetStore;

pub struct CalendarLookupTool {
    store: Arc<DatasetStore>,
}

impl CalendarLookupTool {
    pub fn new(store: Arc<DatasetStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for CalendarLookupTool {
    fn name(&self) -> &str {
        "get_user_calendar"
    }

    fn description(&self) -> &str {
        "Retrieve the user's calendar availability and blocked dates for a date range, along with their vacation preferences."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "start_date": {
                    "type": "string",
                    "description": "Start date in YYYY-MM-DD format"
                },
                "end_date": {
                    "type": "string",
                    "description": "End date in YYYY-MM-DD format"
                }
            },
            "required": ["start_date", "end_date"]
        })
    }

    async fn execute(
        &self,
        _session: &SessionContext,
        arguments: serde_json::Value,
    ) -> Result<ToolResult, ToolError> {
        let start_date = arguments["start_date"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'start_date' argument".into()))?;
        let end_date = arguments["end_date"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'end_date' argument".into()))?;

        let window = calendar_window(self.store.calendar(), start_date, end_date)?;
        Ok(ToolResult::success(&window))
    }
}
