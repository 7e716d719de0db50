//! Read models the presentation layer renders from.
//!
//! Prices arrive here display-formatted; everything upstream of this module
//! works in exact decimals.

use rust_decimal::Decimal;
use serde::Serialize;
use vitrine_core::{ProductId, format_usd};

use crate::cart::{CartEngine, LineItem};
use crate::catalog::{CatalogState, Product};
use crate::slider::SliderView;

/// Card-grid preview length for product descriptions.
pub const CARD_PREVIEW: usize = 80;

/// Fixed notice for a failed catalog load.
pub const CATALOG_FAILED_MESSAGE: &str = "Failed to load data!";
/// Secondary line shown with the failure notice.
pub const CATALOG_FAILED_DETAIL: &str = "Check your internet connection or try again.";
/// Fixed notice for a successful load with zero products.
pub const CATALOG_EMPTY_MESSAGE: &str = "No products found";

/// Everything the page renders from, in one document.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub catalog: CatalogView,
    pub cart: CartView,
    pub slider: SliderView,
}

/// Catalog load status, for the UI to pick between grid and notice states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogStatus {
    NotLoaded,
    Ready,
    Empty,
    Failed,
}

/// The product card grid plus its load state.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogView {
    pub status: CatalogStatus,
    /// Fixed notice for the `Empty` and `Failed` states.
    pub message: Option<String>,
    /// Secondary notice line, only for `Failed`.
    pub detail: Option<String>,
    pub products: Vec<ProductCard>,
}

impl CatalogView {
    #[must_use]
    pub fn from_state(state: &CatalogState) -> Self {
        let (status, message, detail) = match state {
            CatalogState::NotLoaded => (CatalogStatus::NotLoaded, None, None),
            CatalogState::Ready(_) => (CatalogStatus::Ready, None, None),
            CatalogState::Empty => (
                CatalogStatus::Empty,
                Some(CATALOG_EMPTY_MESSAGE.to_string()),
                None,
            ),
            CatalogState::Failed => (
                CatalogStatus::Failed,
                Some(CATALOG_FAILED_MESSAGE.to_string()),
                Some(CATALOG_FAILED_DETAIL.to_string()),
            ),
        };

        Self {
            status,
            message,
            detail,
            products: state.products().iter().map(ProductCard::from).collect(),
        }
    }
}

/// One product card in the grid.
#[derive(Debug, Clone, Serialize)]
pub struct ProductCard {
    pub id: ProductId,
    pub title: String,
    /// First [`CARD_PREVIEW`] characters with an ellipsis suffix.
    pub description: String,
    pub price: String,
    pub image: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            description: card_preview(&product.description),
            price: format_usd(product.price),
            image: product.image.clone(),
        }
    }
}

/// Full product detail (the "view details" modal).
#[derive(Debug, Clone, Serialize)]
pub struct ProductDetail {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub price: String,
    pub image: String,
}

impl From<&Product> for ProductDetail {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            description: product.description.clone(),
            price: format_usd(product.price),
            image: product.image.clone(),
        }
    }
}

/// Cart display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub badge_count: u64,
}

impl CartView {
    #[must_use]
    pub fn from_engine(cart: &CartEngine) -> Self {
        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            subtotal: format_usd(cart.total()),
            badge_count: cart.badge_count(),
        }
    }
}

/// One cart line with computed per-line total.
#[derive(Debug, Clone, Serialize)]
pub struct CartItemView {
    pub product_id: ProductId,
    pub title: String,
    pub image: String,
    pub quantity: u32,
    pub price: String,
    pub line_total: String,
}

impl From<&LineItem> for CartItemView {
    fn from(line: &LineItem) -> Self {
        Self {
            product_id: line.product_id,
            title: line.title.clone(),
            image: line.image.clone(),
            quantity: line.quantity,
            price: format_usd(line.price),
            line_total: format_usd(line.price * Decimal::from(line.quantity)),
        }
    }
}

/// The cart badge number on its own, for cheap polling.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BadgeView {
    pub count: u64,
}

fn card_preview(description: &str) -> String {
    let mut out: String = description.chars().take(CARD_PREVIEW).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use vitrine_core::ProductId;

    use super::*;
    use crate::cart::MemoryStore;

    fn product(id: i32, description: &str) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            description: description.to_string(),
            price: Decimal::new(1999, 2),
            image: format!("https://example.com/{id}.jpg"),
        }
    }

    #[test]
    fn test_card_preview_is_80_chars_plus_ellipsis() {
        let card = ProductCard::from(&product(1, &"y".repeat(100)));
        assert_eq!(card.description.chars().count(), 83);
        assert!(card.description.ends_with("..."));
        assert_eq!(card.price, "$19.99");
    }

    #[test]
    fn test_catalog_view_failed_carries_fixed_notice() {
        let view = CatalogView::from_state(&CatalogState::Failed);
        assert_eq!(view.status, CatalogStatus::Failed);
        assert_eq!(view.message.as_deref(), Some(CATALOG_FAILED_MESSAGE));
        assert_eq!(view.detail.as_deref(), Some(CATALOG_FAILED_DETAIL));
        assert!(view.products.is_empty());
    }

    #[test]
    fn test_catalog_view_empty_is_distinct_from_failed() {
        let view = CatalogView::from_state(&CatalogState::Empty);
        assert_eq!(view.status, CatalogStatus::Empty);
        assert_eq!(view.message.as_deref(), Some(CATALOG_EMPTY_MESSAGE));
        assert_eq!(view.detail, None);
    }

    #[test]
    fn test_cart_view_computes_line_and_grand_totals() {
        let mut cart = CartEngine::load(Box::new(MemoryStore::default()));
        let p = product(1, "d");
        cart.add(&p);
        cart.add(&p);

        let view = CartView::from_engine(&cart);
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].quantity, 2);
        assert_eq!(view.items[0].price, "$19.99");
        assert_eq!(view.items[0].line_total, "$39.98");
        assert_eq!(view.subtotal, "$39.98");
        assert_eq!(view.badge_count, 2);
    }
}
