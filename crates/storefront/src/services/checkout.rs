//! Simulated checkout.
//!
//! There is no payment processing. Checkout holds a fixed processing delay
//! and then fabricates a confirmation; the engine clears the cart once the
//! confirmation exists.

use std::time::Duration;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use tokio::time::sleep;
use uuid::Uuid;
use vitrine_core::format_usd;

/// Processing delay before the fabricated success response.
pub const PROCESSING_DELAY: Duration = Duration::from_millis(1500);

/// Confirmation returned by a completed checkout.
#[derive(Debug, Clone, Serialize)]
pub struct OrderConfirmation {
    pub order_id: Uuid,
    /// Total quantity across the ordered lines.
    pub item_count: u64,
    /// Grand total at order time, display-formatted.
    pub total: String,
    pub placed_at: DateTime<Utc>,
    pub message: String,
}

/// Run the processing delay and fabricate a confirmation for the given
/// cart totals.
pub async fn process(item_count: u64, total: Decimal) -> OrderConfirmation {
    sleep(PROCESSING_DELAY).await;

    OrderConfirmation {
        order_id: Uuid::new_v4(),
        item_count,
        total: format_usd(total),
        placed_at: Utc::now(),
        message: "Order placed successfully! Thank you for your purchase.".to_string(),
    }
}
