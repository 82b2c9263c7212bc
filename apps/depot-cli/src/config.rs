//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable        | Default | Meaning                                   |
//! |-----------------|---------|-------------------------------------------|
//! | `DEPOT_CATALOG` | unset   | JSON catalog file; built-in catalog if unset |
//! | `DEPOT_LOG`     | `warn`  | tracing filter (`RUST_LOG` overrides)     |

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use depot_core::ValidationError;

pub const CATALOG_ENV: &str = "DEPOT_CATALOG";
pub const LOG_ENV: &str = "DEPOT_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Catalog file to seed the store from
    pub catalog_path: Option<PathBuf>,

    /// Default tracing filter directive
    pub log_filter: String,
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let catalog_path = match lookup(CATALOG_ENV) {
            Some(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue(CATALOG_ENV.to_string()))
            }
            Some(path) => Some(PathBuf::from(path)),
            None => None,
        };

        let log_filter = lookup(LOG_ENV)
            .filter(|filter| !filter.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(CliConfig {
            catalog_path,
            log_filter,
        })
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            catalog_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Failed to read catalog {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog {path}: {source}")]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Catalog entry {index} is invalid: {source}")]
    InvalidCatalog {
        /// 1-based position in the catalog.
        index: usize,
        #[source]
        source: ValidationError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.log_filter, "warn");
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_reads_variables() {
        let config = CliConfig::from_lookup(lookup(&[
            (CATALOG_ENV, "/srv/depot/catalog.json"),
            (LOG_ENV, "debug"),
        ]))
        .unwrap();
        assert_eq!(
            config.catalog_path,
            Some(PathBuf::from("/srv/depot/catalog.json"))
        );
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_blank_catalog_path_is_rejected() {
        let err = CliConfig::from_lookup(lookup(&[(CATALOG_ENV, "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref key) if key == CATALOG_ENV));
        assert_eq!(err.to_string(), "Invalid value for DEPOT_CATALOG");
    }

    #[test]
    fn test_blank_log_filter_falls_back_to_default() {
        let config = CliConfig::from_lookup(lookup(&[(LOG_ENV, "")])).unwrap();
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }
}
