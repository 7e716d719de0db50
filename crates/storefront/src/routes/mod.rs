//! HTTP routes: the JSON command/read-model surface.
//!
//! Every route either dispatches an [`crate::engine::Action`] or returns a
//! read model; no route renders anything.

pub mod auth;
pub mod cart;
pub mod newsletter;
pub mod products;
pub mod slider;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::state::AppState;
use crate::views::Snapshot;

/// Build the API router.
#[must_use]
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/store", get(store_snapshot))
        .route("/api/products", get(products::list))
        .route("/api/products/{id}", get(products::detail))
        .route("/api/catalog/refresh", post(products::refresh))
        .route("/api/cart", get(cart::show))
        .route("/api/cart/count", get(cart::count))
        .route("/api/cart/add", post(cart::add))
        .route("/api/cart/update", post(cart::update))
        .route("/api/cart/remove", post(cart::remove))
        .route("/api/cart/checkout", post(cart::checkout))
        .route("/api/slider", get(slider::show))
        .route("/api/slider/next", post(slider::next))
        .route("/api/slider/prev", post(slider::prev))
        .route("/api/slider/show", post(slider::goto))
        .route("/api/newsletter/subscribe", post(newsletter::subscribe))
        .route("/api/auth/sign-in", post(auth::sign_in))
        .route("/api/auth/sign-up", post(auth::sign_up))
}

/// Everything the page renders from, in one document.
async fn store_snapshot(State(state): State<AppState>) -> Json<Snapshot> {
    Json(state.storefront().snapshot())
}
