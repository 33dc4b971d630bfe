//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `MONSOON_DATA_PATH` - Reference data document (default: `data/catalog.json`)
//! - `MONSOON_PRICE_CEILING` - Default price-filter ceiling in minor units
//!   (default: 15000000)

use std::path::PathBuf;

use thiserror::Error;

use monsoon_core::Money;

use crate::catalog::DEFAULT_PRICE_CEILING;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Store application configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the reference data document.
    pub data_path: PathBuf,
    /// Default price-filter ceiling in minor units.
    pub price_ceiling: Money,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/catalog.json"),
            price_ceiling: DEFAULT_PRICE_CEILING,
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let data_path = std::env::var("MONSOON_DATA_PATH")
            .map_or(defaults.data_path, PathBuf::from);

        let price_ceiling = match std::env::var("MONSOON_PRICE_CEILING") {
            Ok(raw) => raw
                .parse::<i64>()
                .map(Money::from_minor)
                .map_err(|e| {
                    ConfigError::InvalidEnvVar("MONSOON_PRICE_CEILING".to_owned(), e.to_string())
                })?,
            Err(_) => defaults.price_ceiling,
        };

        Ok(Self {
            data_path,
            price_ceiling,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.data_path, PathBuf::from("data/catalog.json"));
        assert_eq!(config.price_ceiling, DEFAULT_PRICE_CEILING);
    }
}
