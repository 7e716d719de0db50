//! Shopping cart engine.
//!
//! Business logic over the persisted line-item sequence: add, adjust
//! quantity, remove, clear, and totals. Every mutation writes the full
//! snapshot through to the store before returning - there is no batching
//! and no partial-write state visible to callers.

mod store;

pub use store::{CartStore, JsonFileStore, MemoryStore, StorageError};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vitrine_core::ProductId;

use crate::catalog::Product;

/// One catalog product plus a quantity held in the cart.
///
/// Title, price, and image are denormalized copies taken at add time; they
/// are not re-synced when the catalog snapshot changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: ProductId,
    pub title: String,
    pub price: Decimal,
    pub image: String,
    /// Always >= 1; a line that would reach 0 is removed instead.
    pub quantity: u32,
}

/// The cart: an ordered line-item sequence with write-through persistence.
///
/// Insertion order is first-added order and is preserved across removals
/// and reloads.
pub struct CartEngine {
    items: Vec<LineItem>,
    store: Box<dyn CartStore>,
}

impl CartEngine {
    /// Load the cart from the store.
    ///
    /// An unreadable snapshot degrades to an empty cart; the failure is
    /// logged, not surfaced.
    pub fn load(store: Box<dyn CartStore>) -> Self {
        let items = store.load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "cart snapshot unreadable, starting empty");
            Vec::new()
        });
        Self { items, store }
    }

    /// Add one unit of `product`.
    ///
    /// An existing line for the same product id is incremented; otherwise a
    /// new line is appended with quantity 1.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self
            .items
            .iter_mut()
            .find(|line| line.product_id == product.id)
        {
            line.quantity += 1;
        } else {
            self.items.push(LineItem {
                product_id: product.id,
                title: product.title.clone(),
                price: product.price,
                image: product.image.clone(),
                quantity: 1,
            });
        }
        self.persist();
    }

    /// Adjust the line at `index` by `delta`.
    ///
    /// A quantity that reaches zero removes the line entirely. Returns
    /// `false` without touching the cart when `index` is out of range.
    pub fn adjust(&mut self, index: usize, delta: i64) -> bool {
        let Some(line) = self.items.get_mut(index) else {
            return false;
        };

        let next = i64::from(line.quantity) + delta;
        if next <= 0 {
            self.items.remove(index);
        } else {
            line.quantity = u32::try_from(next).unwrap_or(u32::MAX);
        }
        self.persist();
        true
    }

    /// Remove the line at `index`.
    ///
    /// Returns `false` without touching the cart when `index` is out of
    /// range. The relative order of the remaining lines is unchanged.
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        self.items.remove(index);
        self.persist();
        true
    }

    /// Empty the cart. Used by checkout completion.
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
    }

    /// Grand total: sum of price x quantity over all lines, unrounded.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items
            .iter()
            .map(|line| line.price * Decimal::from(line.quantity))
            .sum()
    }

    /// Total quantity across all lines (the cart badge number).
    #[must_use]
    pub fn badge_count(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }

    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.items) {
            tracing::warn!(error = %e, "failed to persist cart snapshot");
        }
    }
}
