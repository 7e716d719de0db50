//! Storefront configuration loaded from environment variables.
//!
//! Every variable is optional; the defaults reproduce the original demo
//! setup (nine products from the public fake-store feed).
//!
//! # Environment Variables
//!
//! - `VITRINE_HOST` - Bind address (default: 127.0.0.1)
//! - `VITRINE_PORT` - Listen port (default: 4000)
//! - `CATALOG_ENDPOINT` - Product feed URL (default: <https://fakestoreapi.com/products>)
//! - `CATALOG_LIMIT` - Max products per fetch (default: 9)
//! - `CART_STORE_PATH` - Cart snapshot file (default: data/cart.json)
//! - `SENTRY_DSN` - Error tracking DSN (Sentry disabled when unset)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;
use url::Url;

/// The public demo feed the original page fetched from.
pub const DEFAULT_CATALOG_ENDPOINT: &str = "https://fakestoreapi.com/products";

/// Products shown per catalog fetch.
pub const DEFAULT_CATALOG_LIMIT: u32 = 9;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to.
    pub host: IpAddr,
    /// Port to listen on.
    pub port: u16,
    /// Catalog feed configuration.
    pub catalog: CatalogConfig,
    /// Path of the persisted cart snapshot.
    pub cart_store_path: PathBuf,
    /// Sentry DSN for error tracking.
    pub sentry_dsn: Option<String>,
}

/// Catalog feed configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Feed URL; the limit is appended as a query parameter.
    pub endpoint: Url,
    /// Maximum number of products per fetch.
    pub page_limit: u32,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            host: parse_env_or("VITRINE_HOST", "127.0.0.1")?,
            port: parse_env_or("VITRINE_PORT", "4000")?,
            catalog: CatalogConfig::from_env()?,
            cart_store_path: PathBuf::from(get_env_or_default("CART_STORE_PATH", "data/cart.json")),
            sentry_dsn: get_optional_env("SENTRY_DSN"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl CatalogConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            endpoint: parse_env_or("CATALOG_ENDPOINT", DEFAULT_CATALOG_ENDPOINT)?,
            page_limit: parse_env_or("CATALOG_LIMIT", "9")?,
        })
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_CATALOG_ENDPOINT)
                .expect("default catalog endpoint is a valid URL"),
            page_limit: DEFAULT_CATALOG_LIMIT,
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse an environment variable, falling back to a default string.
fn parse_env_or<T: FromStr>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    get_env_or_default(key, default)
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 4000,
            catalog: CatalogConfig::default(),
            cart_store_path: PathBuf::from("data/cart.json"),
            sentry_dsn: None,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 4000);
    }

    #[test]
    fn test_catalog_defaults_match_demo_feed() {
        let catalog = CatalogConfig::default();
        assert_eq!(catalog.endpoint.as_str(), DEFAULT_CATALOG_ENDPOINT);
        assert_eq!(catalog.page_limit, 9);
    }

    #[test]
    fn test_parse_env_or_uses_default_when_unset() {
        let port: u16 = parse_env_or("VITRINE_TEST_UNSET_PORT", "4000").unwrap();
        assert_eq!(port, 4000);
    }
}
