//! `voyagent doctor` — Diagnose config and dataset health.

use voyagent_config::AppConfig;
use voyagent_datasets::DatasetStore;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("🩺 Voyagent Doctor — System Diagnostics");
    println!("=======================================\n");

    let mut issues = 0;

    println!("  ✅ Rust binary running");

    // Check config
    let config_path = AppConfig::config_dir().join("config.toml");
    let config = if config_path.exists() {
        match AppConfig::load() {
            Ok(config) => {
                println!("  ✅ Config file valid");
                Some(config)
            }
            Err(e) => {
                println!("  ❌ Config file invalid: {e}");
                issues += 1;
                None
            }
        }
    } else {
        println!("  ⚠️  No config file — run `voyagent onboard` (using defaults)");
        AppConfig::load().ok()
    };

    // Check datasets
    if let Some(config) = config {
        if config.data_dir.exists() {
            match DatasetStore::load(&config.data_dir) {
                Ok(store) => {
                    println!(
                        "  ✅ Datasets loaded: {} flights, {} hotels, {} activities",
                        store.flights().len(),
                        store.hotels().len(),
                        store.activities().len()
                    );
                }
                Err(e) => {
                    println!("  ❌ Dataset load failed: {e}");
                    issues += 1;
                }
            }
        } else {
            println!(
                "  ❌ Data directory missing: {} — set data_dir or VOYAGENT_DATA_DIR",
                config.data_dir.display()
            );
            issues += 1;
        }
    }

    // Summary
    println!();
    if issues == 0 {
        println!("  🎉 All checks passed!");
    } else {
        println!("  ⚠️  {issues} issue(s) found. See above for details.");
    }

    Ok(())
}
