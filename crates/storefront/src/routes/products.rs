//! Product catalog route handlers.

use axum::Json;
use axum::extract::{Path, State};
use tracing::instrument;
use vitrine_core::ProductId;

use crate::engine::Action;
use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::views::{CatalogView, ProductDetail};

/// The product card grid plus its load state.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Json<CatalogView> {
    Json(state.storefront().catalog_view())
}

/// Full detail for one product (the details modal).
#[instrument(skip(state))]
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ProductDetail>> {
    state
        .storefront()
        .product(ProductId::new(id))
        .map(|product| Json(ProductDetail::from(&product)))
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))
}

/// Re-fetch the catalog, replacing the current snapshot wholesale.
#[instrument(skip(state))]
pub async fn refresh(State(state): State<AppState>) -> Json<CatalogView> {
    state.storefront().dispatch(Action::LoadCatalog).await;
    Json(state.storefront().catalog_view())
}
