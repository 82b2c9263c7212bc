//! # Depot Entry Point
//!
//! ## Startup Sequence
//! 1. Load configuration from the environment
//! 2. Initialize tracing (logging to stderr)
//! 3. Seed the store from the built-in or configured catalog
//! 4. Run the menu on stdin/stdout

use std::io;

use anyhow::Context;
use tracing::info;

use depot_cli::{catalog, init_tracing, CliConfig, Menu};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::load().context("failed to load configuration")?;
    init_tracing(&config.log_filter);

    info!(catalog = ?config.catalog_path, "Starting Depot store menu");

    let mut store = catalog::load_store(config.catalog_path.as_deref())
        .context("failed to load catalog")?;
    info!(
        products = store.len(),
        total_quantity = ?store.total_quantity().ok(),
        "Catalog loaded"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(stdin.lock(), stdout.lock())
        .run(&mut store)
        .context("terminal I/O failed")?;

    info!("Depot store menu closed");
    Ok(())
}
