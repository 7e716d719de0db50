//! Newsletter subscription.
//!
//! Validates the address and acknowledges. No subscriber list is kept.

use serde::{Deserialize, Serialize};
use vitrine_core::{Email, EmailError};

/// Subscription form data.
#[derive(Debug, Deserialize)]
pub struct SubscribeRequest {
    pub email: String,
}

/// Acknowledgement echoed back to the subscriber.
#[derive(Debug, Clone, Serialize)]
pub struct SubscribeReceipt {
    pub email: String,
    pub message: String,
}

/// Subscribe an address.
///
/// # Errors
///
/// Returns an error when the address is not structurally valid.
pub fn subscribe(request: &SubscribeRequest) -> Result<SubscribeReceipt, EmailError> {
    let email = Email::parse(&request.email.trim().to_lowercase())?;
    tracing::info!(email = %email, "newsletter subscription");

    Ok(SubscribeReceipt {
        message: format!("Thank you for subscribing with: {email}"),
        email: email.to_string(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribe_normalizes_and_echoes() {
        let receipt = subscribe(&SubscribeRequest {
            email: "  User@Example.COM ".to_string(),
        })
        .unwrap();

        assert_eq!(receipt.email, "user@example.com");
        assert_eq!(
            receipt.message,
            "Thank you for subscribing with: user@example.com"
        );
    }

    #[test]
    fn test_subscribe_rejects_malformed_address() {
        assert!(subscribe(&SubscribeRequest {
            email: "nope".to_string(),
        })
        .is_err());
    }
}
