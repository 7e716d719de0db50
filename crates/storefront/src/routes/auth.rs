//! Authentication route handlers.
//!
//! Both flows are simulated: the form validates, waits a fixed delay, and
//! succeeds. There are no accounts and no sessions.

use axum::Json;
use tracing::instrument;

use crate::error::Result;
use crate::services::auth::{self, AuthGreeting, SignInRequest, SignUpRequest};

/// Simulated sign-in.
#[instrument(skip_all, fields(email = %form.email))]
pub async fn sign_in(Json(form): Json<SignInRequest>) -> Result<Json<AuthGreeting>> {
    Ok(Json(auth::sign_in(form).await?))
}

/// Simulated sign-up.
#[instrument(skip_all, fields(email = %form.email))]
pub async fn sign_up(Json(form): Json<SignUpRequest>) -> Result<Json<AuthGreeting>> {
    Ok(Json(auth::sign_up(form).await?))
}
