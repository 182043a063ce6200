//! `voyagent call` — Invoke a single tool and print its result as JSON.

use std::sync::Arc;
use voyagent_config::AppConfig;
use voyagent_core::session::SessionContext;
use voyagent_core::tool::ToolCall;
use voyagent_datasets::DatasetStore;
use voyagent_tools::registry_with_prefix;

pub async fn run(
    tool: &str,
    args: &str,
    authorize_payments: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    let store = Arc::new(DatasetStore::load(&config.data_dir)?);
    let registry = registry_with_prefix(store, &config.booking.reference_prefix);

    let arguments: serde_json::Value = serde_json::from_str(args)
        .map_err(|e| format!("--args is not valid JSON: {e}"))?;

    let session = SessionContext::new();
    if authorize_payments {
        session.authorize_payment();
        tracing::info!("Payment authorized for this session");
    }

    let call = ToolCall {
        id: "cli".into(),
        name: tool.to_string(),
        arguments,
    };

    // dispatch never fails; faults come back as {"error": ...} payloads
    let result = registry.dispatch(&session, &call).await;

    match &result.data {
        Some(data) => println!("{}", serde_json::to_string_pretty(data)?),
        None => println!("{}", result.output),
    }

    Ok(())
}
