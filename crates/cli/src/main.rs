//! Stocktally binary entry point.

use std::io;

use anyhow::Result;

use stocktally_catalog::{ActivityLog, ProductCatalog};

const DEFAULT_LOG_PATH: &str = "inventory_log.txt";

fn main() -> Result<()> {
    stocktally_observability::init();

    let log_path =
        std::env::var("STOCKTALLY_LOG_PATH").unwrap_or_else(|_| DEFAULT_LOG_PATH.to_string());

    // A missing log is reported once and the run continues without it.
    let log = match ActivityLog::open(&log_path) {
        Ok(log) => log,
        Err(err) => {
            tracing::warn!(%err, path = %log_path, "activity log unavailable, continuing without it");
            ActivityLog::disabled()
        }
    };

    let mut catalog = ProductCatalog::new(log);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    stocktally_cli::session::run(&mut catalog, &mut input, &mut output)?;

    Ok(())
}
