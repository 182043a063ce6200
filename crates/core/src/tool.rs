//! Tool trait — the dispatch surface the agent runtime invokes.
//!
//! Each capability (calendar lookup, flight search, booking, ...) implements
//! this trait and is registered in the `ToolRegistry`. The runtime selects
//! tools by their declared name/parameters/description, so those form the
//! external contract and must stay stable.

use crate::error::ToolError;
use crate::session::SessionContext;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A request to execute a tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Unique call ID (matches the runtime's tool_call.id)
    pub id: String,

    /// Name of the tool to execute
    pub name: String,

    /// Arguments as a JSON value
    pub arguments: serde_json::Value,
}

/// The result of a tool execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// The call ID this result is for
    pub call_id: String,

    /// Whether the tool executed successfully
    pub success: bool,

    /// The output content, serialized for the chat transcript
    pub output: String,

    /// Optional structured data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ToolResult {
    /// Build a successful result from a serializable payload.
    pub fn success(payload: &impl Serialize) -> Self {
        let data = serde_json::to_value(payload).unwrap_or_default();
        Self {
            call_id: String::new(),
            success: true,
            output: serde_json::to_string_pretty(&data).unwrap_or_default(),
            data: Some(data),
        }
    }

    /// Build an error-shaped result (`{"error": message}`).
    ///
    /// This is what the dispatch boundary hands back for any fault, so the
    /// runtime always receives a well-formed response it can reason over.
    pub fn error(message: impl Into<String>) -> Self {
        let data = serde_json::json!({ "error": message.into() });
        Self {
            call_id: String::new(),
            success: false,
            output: serde_json::to_string_pretty(&data).unwrap_or_default(),
            data: Some(data),
        }
    }
}

/// A tool definition sent to the agent runtime so it knows what it can call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// The tool name
    pub name: String,

    /// Description of what the tool does
    pub description: String,

    /// JSON Schema describing the tool's parameters
    pub parameters: serde_json::Value,
}

/// The core Tool trait.
///
/// Every tool receives the session context: booking tools read the payment
/// gate from it and append confirmations to its log, lookup/search tools
/// ignore it. Keeping the session in the signature (rather than in ambient
/// process state) is what makes the gate safe to scope per conversation.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The unique name of this tool (e.g., "search_flights").
    fn name(&self) -> &str;

    /// A description of what this tool does (sent to the runtime).
    fn description(&self) -> &str;

    /// JSON Schema describing this tool's parameters.
    fn parameters_schema(&self) -> serde_json::Value;

    /// Execute the tool with the given arguments.
    async fn execute(
        &self,
        session: &SessionContext,
        arguments: serde_json::Value,
    ) -> std::result::Result<ToolResult, ToolError>;

    /// Convert this tool into a ToolDefinition for the runtime.
    fn to_definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters_schema(),
        }
    }
}

/// A registry of available tools.
///
/// The agent runtime uses this to:
/// 1. Get tool definitions so it can decide what to invoke
/// 2. Dispatch tool calls and receive structured results
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool. Replaces any existing tool with the same name.
    pub fn register(&mut self, tool: Box<dyn Tool>) {
        let name = tool.name().to_string();
        self.tools.insert(name, tool);
    }

    /// Get a tool by name.
    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools.get(name).map(|t| t.as_ref())
    }

    /// Get all tool definitions (for sending to the runtime).
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.values().map(|t| t.to_definition()).collect()
    }

    /// Execute a tool call, propagating faults to the caller.
    pub async fn execute(
        &self,
        session: &SessionContext,
        call: &ToolCall,
    ) -> std::result::Result<ToolResult, ToolError> {
        let tool = self
            .tools
            .get(&call.name)
            .ok_or_else(|| ToolError::NotFound(call.name.clone()))?;
        let mut result = tool.execute(session, call.arguments.clone()).await?;
        result.call_id = call.id.clone();
        Ok(result)
    }

    /// Dispatch a tool call, converting every fault into an error-shaped
    /// result. This is the boundary contract: the runtime must never see an
    /// uncaught fault, only `{"error": ...}` payloads it can reason over.
    pub async fn dispatch(&self, session: &SessionContext, call: &ToolCall) -> ToolResult {
        match self.execute(session, call).await {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(tool = %call.name, error = %err, "tool call failed");
                let mut result = ToolResult::error(err.to_string());
                result.call_id = call.id.clone();
                result
            }
        }
    }

    /// List all registered tool names.
    pub fn names(&self) -> Vec<&str> {
        self.tools.keys().map(|s| s.as_str()).collect()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
