mod config;
mod ledger;
mod models;
mod run;
mod store;
mod ui;

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        return run::as_cli(&args);
    }

    let config = config::Config::resolve()?;
    init_tracing(&config.log_path)?;
    tracing::info!(db = %config.db_path.display(), "starting sitecost");

    let db = store::Database::open(&config.db_path)?;
    let mut ledger = ledger::Ledger::open(db);
    run::as_tui(&mut ledger, &config)
}

/// Log to a file next to the database; the terminal belongs to the TUI.
fn init_tracing(log_path: &Path) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sitecost=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
