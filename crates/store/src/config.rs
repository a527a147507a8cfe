//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; with none set the store runs fully local.
//!
//! - `MINISHOP_DATABASE_URL` - Base URL of the remote realtime database
//!   (e.g. `https://my-shop-default-rtdb.firebaseio.com`). When unset, the
//!   local backend is used without probing.
//! - `MINISHOP_DATA_DIR` - Directory for the local backend's collection
//!   files and the cart file (default: `./data`)
//! - `MINISHOP_HTTP_TIMEOUT_SECS` - Per-request timeout for the remote
//!   backend (default: 10)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_DATA_DIR: &str = "./data";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Store adapter configuration.
///
/// Built once at startup and passed down; backend selection is derived from
/// it exactly once (see [`Store::connect`](crate::Store::connect)) and never
/// re-evaluated per call.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Remote database base URL. `None` forces the local backend.
    pub database_url: Option<String>,
    /// Directory holding the local backend's files.
    pub data_dir: PathBuf,
    /// Request timeout for the remote backend's HTTP client.
    pub http_timeout: Duration,
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

        let database_url = get_optional_env("MINISHOP_DATABASE_URL");
        let data_dir = PathBuf::from(get_env_or_default("MINISHOP_DATA_DIR", DEFAULT_DATA_DIR));
        let timeout_secs = get_env_or_default(
            "MINISHOP_HTTP_TIMEOUT_SECS",
            &DEFAULT_HTTP_TIMEOUT_SECS.to_string(),
        )
        .parse::<u64>()
        .map_err(|e| {
            ConfigError::InvalidEnvVar("MINISHOP_HTTP_TIMEOUT_SECS".to_string(), e.to_string())
        })?;

        Ok(Self {
            database_url,
            data_dir,
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// A purely local configuration rooted at `data_dir`.
    ///
    /// Used by tests and by callers that never want the remote backend.
    #[must_use]
    pub fn local(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            database_url: None,
            data_dir: data_dir.into(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }

    /// Path of the durable per-client cart file.
    #[must_use]
    pub fn cart_path(&self) -> PathBuf {
        self.data_dir.join("cart.json")
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_config() {
        let config = StoreConfig::local("/tmp/shop");
        assert!(config.database_url.is_none());
        assert_eq!(config.data_dir, PathBuf::from("/tmp/shop"));
        assert_eq!(config.cart_path(), PathBuf::from("/tmp/shop/cart.json"));
        assert_eq!(config.http_timeout, Duration::from_secs(10));
    }
}
