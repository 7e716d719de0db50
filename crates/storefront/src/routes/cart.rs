//! Cart route handlers.
//!
//! Commands address cart lines by position, matching the order the cart
//! view lists them in. Unknown ids and out-of-range positions are silent
//! no-ops: the handler returns the (unchanged) cart view.

use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use tracing::instrument;
use vitrine_core::ProductId;

use crate::engine::{Action, Outcome};
use crate::error::{AppError, Result};
use crate::services::checkout::OrderConfirmation;
use crate::state::AppState;
use crate::views::{BadgeView, CartView};

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddForm {
    pub product_id: i32,
}

/// Quantity adjustment form data.
#[derive(Debug, Deserialize)]
pub struct UpdateForm {
    pub index: usize,
    pub delta: i64,
}

/// Line removal form data.
#[derive(Debug, Deserialize)]
pub struct RemoveForm {
    pub index: usize,
}

/// The full cart view.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<CartView> {
    Json(state.storefront().cart_view())
}

/// The cart badge count on its own.
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> Json<BadgeView> {
    Json(BadgeView {
        count: state.storefront().badge_count(),
    })
}

/// Add one unit of a product.
#[instrument(skip(state))]
pub async fn add(State(state): State<AppState>, Json(form): Json<AddForm>) -> Json<CartView> {
    state
        .storefront()
        .dispatch(Action::AddToCart {
            product_id: ProductId::new(form.product_id),
        })
        .await;
    Json(state.storefront().cart_view())
}

/// Adjust a line's quantity. Reaching zero removes the line.
#[instrument(skip(state))]
pub async fn update(State(state): State<AppState>, Json(form): Json<UpdateForm>) -> Json<CartView> {
    state
        .storefront()
        .dispatch(Action::AdjustQuantity {
            index: form.index,
            delta: form.delta,
        })
        .await;
    Json(state.storefront().cart_view())
}

/// Remove a line.
#[instrument(skip(state))]
pub async fn remove(State(state): State<AppState>, Json(form): Json<RemoveForm>) -> Json<CartView> {
    state
        .storefront()
        .dispatch(Action::RemoveLine { index: form.index })
        .await;
    Json(state.storefront().cart_view())
}

/// Simulated checkout: a fabricated success after a fixed processing delay.
///
/// An empty cart is a 409; the UI shows "Your cart is empty!".
#[instrument(skip(state))]
pub async fn checkout(State(state): State<AppState>) -> Result<Json<OrderConfirmation>> {
    match state.storefront().dispatch(Action::Checkout).await {
        Outcome::Order(confirmation) => Ok(Json(confirmation)),
        Outcome::Ignored => Err(AppError::EmptyCart),
        Outcome::Completed => Err(AppError::Internal(
            "checkout completed without a confirmation".to_string(),
        )),
    }
}
