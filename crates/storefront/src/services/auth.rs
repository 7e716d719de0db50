//! Simulated authentication.
//!
//! Sign-in and sign-up validate the submitted form, wait a fixed delay, and
//! greet the user. No credentials are stored or checked against anything;
//! there are no sessions.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::time::sleep;
use vitrine_core::{Email, EmailError};

/// Delay simulating a round trip to an identity provider.
pub const AUTH_DELAY: Duration = Duration::from_millis(1000);

/// Errors surfaced in the auth form.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Passwords do not match!")]
    PasswordMismatch,
}

/// Sign-in form data.
#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Sign-up form data.
#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Message shown in the auth form on success.
#[derive(Debug, Clone, Serialize)]
pub struct AuthGreeting {
    pub message: String,
}

/// Simulated sign-in.
///
/// # Errors
///
/// Returns an error when the email is not structurally valid.
pub async fn sign_in(request: SignInRequest) -> Result<AuthGreeting, AuthError> {
    let email = Email::parse(request.email.trim())?;

    sleep(AUTH_DELAY).await;

    Ok(AuthGreeting {
        message: format!("Welcome back! Signed in as {email}"),
    })
}

/// Simulated sign-up.
///
/// The password mismatch check runs before the simulated delay, matching a
/// form that rejects without submitting.
///
/// # Errors
///
/// Returns an error when the passwords differ or the email is not
/// structurally valid.
pub async fn sign_up(request: SignUpRequest) -> Result<AuthGreeting, AuthError> {
    if request.password != request.confirm_password {
        return Err(AuthError::PasswordMismatch);
    }
    Email::parse(request.email.trim())?;

    sleep(AUTH_DELAY).await;

    Ok(AuthGreeting {
        message: format!("Account created successfully for {}!", request.name),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_sign_in_greets_by_email() {
        let greeting = sign_in(SignInRequest {
            email: "user@example.com".to_string(),
            password: "hunter2".to_string(),
        })
        .await
        .unwrap();

        assert_eq!(greeting.message, "Welcome back! Signed in as user@example.com");
    }

    #[tokio::test(start_paused = true)]
    async fn test_sign_in_rejects_malformed_email() {
        let result = sign_in(SignInRequest {
            email: "not-an-email".to_string(),
            password: "hunter2".to_string(),
        })
        .await;

        assert!(matches!(result, Err(AuthError::InvalidEmail(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_sign_up_rejects_mismatched_passwords_before_the_delay() {
        let start = tokio::time::Instant::now();

        let result = sign_up(SignUpRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "one".to_string(),
            confirm_password: "two".to_string(),
        })
        .await;

        let err = result.unwrap_err();
        assert!(matches!(err, AuthError::PasswordMismatch));
        assert_eq!(err.to_string(), "Passwords do not match!");
        // The clock is paused, so any simulated delay would be visible here.
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sign_up_greets_by_name() {
        let greeting = sign_up(SignUpRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "one".to_string(),
            confirm_password: "one".to_string(),
        })
        .await
        .unwrap();

        assert_eq!(greeting.message, "Account created successfully for Ada!");
    }
}
