//! Voyagent CLI — the main entry point.
//!
//! Commands:
//! - `onboard` — Initialize config and data directory
//! - `tools`   — List the tool catalog the assistant can call
//! - `call`    — Invoke a single tool with JSON arguments
//! - `doctor`  — Diagnose config and dataset health

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "voyagent",
    about = "Voyagent — deterministic trip-planning tool runtime",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize configuration and data directory
    Onboard,

    /// List the available tools and their parameter schemas
    Tools,

    /// Invoke a single tool by name
    Call {
        /// Tool name (e.g., "search_flights")
        tool: String,

        /// Tool arguments as a JSON object
        #[arg(short, long, default_value = "{}")]
        args: String,

        /// Authorize payments for this session before the call
        #[arg(long)]
        authorize_payments: bool,
    },

    /// Diagnose config and dataset health
    Doctor,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Onboard => commands::onboard::run().await?,
        Commands::Tools => commands::tools::run().await?,
        Commands::Call {
            tool,
            args,
            authorize_payments,
        } => commands::call::run(&tool, &args, authorize_payments).await?,
        Commands::Doctor => commands::doctor::run().await?,
    }

    Ok(())
}
