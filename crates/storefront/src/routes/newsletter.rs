//! Newsletter subscription route handler.

use axum::Json;
use tracing::instrument;

use crate::error::Result;
use crate::services::newsletter::{self, SubscribeReceipt, SubscribeRequest};

/// Subscribe to the newsletter.
#[instrument(skip_all, fields(email = %form.email))]
pub async fn subscribe(Json(form): Json<SubscribeRequest>) -> Result<Json<SubscribeReceipt>> {
    Ok(Json(newsletter::subscribe(&form)?))
}
