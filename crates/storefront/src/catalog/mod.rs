//! Product catalog client and snapshot state.
//!
//! The catalog is fetched in one bounded request and replaced wholesale -
//! the old snapshot is fully discarded, never merged. An empty successful
//! fetch is a valid state distinct from a failed fetch, so the UI can tell
//! "no products" apart from "load failed".

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::instrument;
use url::Url;
use vitrine_core::ProductId;

use crate::config::CatalogConfig;

/// Errors that can occur when fetching the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Transport-level failure (DNS, connect, read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("catalog endpoint returned {0}")]
    Status(reqwest::StatusCode),

    /// The response body was not a product array.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A product in the current catalog snapshot.
///
/// Immutable once fetched; the whole snapshot is replaced on every fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    /// The feed carries prices as JSON numbers.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub image: String,
}

/// Client for the remote catalog endpoint.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    endpoint: Url,
    page_limit: u32,
}

impl CatalogClient {
    /// Create a new catalog client.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                endpoint: config.endpoint.clone(),
                page_limit: config.page_limit,
            }),
        }
    }

    /// Fetch up to the configured number of products.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or an
    /// unparseable body. The caller decides how failures surface; this
    /// client never retries.
    #[instrument(skip(self))]
    pub async fn fetch(&self) -> Result<Vec<Product>, CatalogError> {
        let mut url = self.inner.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("limit", &self.inner.page_limit.to_string());

        let response = self.inner.client.get(url).send().await?;
        let status = response.status();

        // Read the body as text first for better error diagnostics.
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(200).collect::<String>(),
                "catalog endpoint returned non-success status"
            );
            return Err(CatalogError::Status(status));
        }

        let products: Vec<Product> = match serde_json::from_str(&body) {
            Ok(products) => products,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %body.chars().take(200).collect::<String>(),
                    "failed to parse catalog response"
                );
                return Err(CatalogError::Parse(e));
            }
        };

        Ok(products)
    }
}

/// The in-memory catalog snapshot.
#[derive(Debug, Clone, Default)]
pub enum CatalogState {
    /// No fetch has completed yet.
    #[default]
    NotLoaded,
    /// The last fetch succeeded with at least one product.
    Ready(Vec<Product>),
    /// The last fetch succeeded with zero products. Not an error.
    Empty,
    /// The last fetch failed; the catalog is left empty.
    Failed,
}

impl CatalogState {
    /// Products of the current snapshot; empty for every non-`Ready` state.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        match self {
            Self::Ready(products) => products,
            _ => &[],
        }
    }

    /// Look up a product by id in the current snapshot.
    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products().iter().find(|p| p.id == id)
    }
}
