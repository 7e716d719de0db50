//! Hero slider route handlers.
//!
//! Navigation waits out the full transition (fade, preload, cooldown) and
//! returns the settled view. A request that arrives mid-transition is
//! ignored and answered with the unchanged view - the client does not need
//! to care which happened. Keyboard arrow keys in the UI map onto the same
//! next/prev commands.

use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use tracing::instrument;

use crate::engine::Action;
use crate::slider::SliderView;
use crate::state::AppState;

/// Slide selection form data.
#[derive(Debug, Deserialize)]
pub struct ShowForm {
    pub index: usize,
}

/// The current slider view.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<SliderView> {
    Json(state.storefront().slider_view())
}

/// Advance one slide with wraparound.
#[instrument(skip(state))]
pub async fn next(State(state): State<AppState>) -> Json<SliderView> {
    state.storefront().dispatch(Action::NextSlide).await;
    Json(state.storefront().slider_view())
}

/// Go back one slide with wraparound.
#[instrument(skip(state))]
pub async fn prev(State(state): State<AppState>) -> Json<SliderView> {
    state.storefront().dispatch(Action::PrevSlide).await;
    Json(state.storefront().slider_view())
}

/// Jump to a specific slide.
#[instrument(skip(state))]
pub async fn goto(State(state): State<AppState>, Json(form): Json<ShowForm>) -> Json<SliderView> {
    state
        .storefront()
        .dispatch(Action::ShowSlide { index: form.index })
        .await;
    Json(state.storefront().slider_view())
}
