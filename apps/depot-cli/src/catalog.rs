//! # Catalog
//!
//! Builds the store's initial inventory, either from the built-in catalog or
//! from a JSON file of [`ProductSeed`]s:
//!
//! ```json
//! [
//!   { "name": "MacBook Air M2", "price_cents": 145000, "quantity": 100 },
//!   { "name": "Google Pixel 7", "price_cents": 50000, "quantity": 250 }
//! ]
//! ```

use std::fs;
use std::path::Path;

use depot_core::{Product, ProductSeed, Store};
use tracing::{debug, info};

use crate::config::ConfigError;

/// The inventory a fresh store opens with when no catalog file is configured.
pub fn default_catalog() -> Vec<ProductSeed> {
    vec![
        ProductSeed::new("MacBook Air M2", 145_000, 100),
        ProductSeed::new("Bose QuietComfort Earbuds", 25_000, 500),
        ProductSeed::new("Google Pixel 7", 50_000, 250),
    ]
}

/// Reads a catalog file.
pub fn read_catalog(path: &Path) -> Result<Vec<ProductSeed>, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::CatalogRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&text).map_err(|source| ConfigError::CatalogParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Validates every seed and builds a store from them, in order.
pub fn build_store(seeds: Vec<ProductSeed>) -> Result<Store, ConfigError> {
    let products = seeds
        .into_iter()
        .enumerate()
        .map(|(i, seed)| {
            debug!(name = %seed.name, quantity = seed.quantity, "Seeding product");
            Product::try_from(seed).map_err(|source| ConfigError::InvalidCatalog {
                index: i + 1,
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Store::new(products))
}

/// Builds the store from `path`, or from the default catalog when `None`.
pub fn load_store(path: Option<&Path>) -> Result<Store, ConfigError> {
    let seeds = match path {
        Some(path) => {
            info!(path = %path.display(), "Loading catalog file");
            read_catalog(path)?
        }
        None => default_catalog(),
    };

    build_store(seeds)
}
