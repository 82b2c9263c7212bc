//! # Depot CLI Library
//!
//! The interactive store menu. All inventory rules live in `depot-core`;
//! this crate only reads input, prints results and logs.
//!
//! ## Module Organization
//! ```text
//! depot_cli/
//! ├── lib.rs          ◄─── You are here (logging setup)
//! ├── config.rs       ◄─── Environment configuration
//! ├── catalog.rs      ◄─── Initial inventory (built-in or JSON file)
//! └── menu.rs         ◄─── Menu loop over any BufRead / Write pair
//! ```
//!
//! ## Output Streams
//! The menu writes to stdout. Logs go to stderr so they never interleave
//! with prompts.

pub mod catalog;
pub mod config;
pub mod menu;

use tracing_subscriber::EnvFilter;

pub use config::{CliConfig, ConfigError};
pub use menu::Menu;

/// Initializes tracing (logging) on stderr.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` applies.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
