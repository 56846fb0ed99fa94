mod backup;
mod config;
mod ledger;
mod reconcile;
mod report;
mod sync;
mod utils;

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

const DEFAULT_CONFIG: &str = "tracker-sync.json";

/// Tracker Sync - keep a CSV image tracker in step with classification folders
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON configuration file
    #[arg(
        short,
        long,
        env = "TRACKER_SYNC_CONFIG",
        default_value = DEFAULT_CONFIG
    )]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    let config = config::read_config(&args.config)
        .await
        .with_context(|| format!("failed to read config '{}'", args.config.display()))?;

    let outcome = sync::run(&config)
        .await
        .with_context(|| format!("sync failed for '{}'", config.ledger_path.display()))?;

    report::print_summary(&outcome.reconcile);

    Ok(())
}
