//! `voyagent tools` — List the tool catalog.

use std::sync::Arc;
use voyagent_config::AppConfig;
use voyagent_datasets::DatasetStore;
use voyagent_tools::registry_with_prefix;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    let store = Arc::new(DatasetStore::load(&config.data_dir)?);
    let registry = registry_with_prefix(store, &config.booking.reference_prefix);

    println!("🧰 Voyagent Tools\n");
    for def in registry.definitions() {
        println!("  {}", def.name);
        println!("    {}", def.description);
        if let Some(props) = def.parameters.get("properties").and_then(|p| p.as_object()) {
            let required: Vec<&str> = def
                .parameters
                .get("required")
                .and_then(|r| r.as_array())
                .map(|r| r.iter().filter_map(|v| v.as_str()).collect())
                .unwrap_or_default();
            for (param, schema) in props {
                let marker = if required.contains(&param.as_str()) {
                    "required"
                } else {
                    "optional"
                };
                let kind = schema
                    .get("type")
                    .and_then(|t| t.as_str())
                    .unwrap_or("any");
                println!("    - {param} ({kind}, {marker})");
            }
        }
        println!();
    }

    Ok(())
}
