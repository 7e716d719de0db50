//! Application state shared across handlers.

use std::sync::Arc;

use crate::cart::JsonFileStore;
use crate::catalog::CatalogClient;
use crate::config::StorefrontConfig;
use crate::engine::Storefront;
use crate::slider::HttpImageLoader;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; owns the configuration and the engine.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    storefront: Storefront,
}

impl AppState {
    /// Create the application state, wiring the engine's collaborators from
    /// configuration: the catalog client, the file-backed cart store, and
    /// the HTTP image preloader.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let catalog_client = CatalogClient::new(&config.catalog);
        let cart_store = Box::new(JsonFileStore::new(config.cart_store_path.clone()));
        let loader = Arc::new(HttpImageLoader::new());
        let storefront = Storefront::new(catalog_client, cart_store, loader);

        Self {
            inner: Arc::new(AppStateInner { config, storefront }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the storefront engine.
    #[must_use]
    pub fn storefront(&self) -> &Storefront {
        &self.inner.storefront
    }
}
