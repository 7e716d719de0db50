//! Storefront engine facade.
//!
//! [`Storefront`] owns the catalog, cart, and slider as explicit state - no
//! ambient globals - and exposes the surface the presentation layer drives:
//! [`Action`] commands in, read-model snapshots out. The HTTP routes are one
//! consumer of this surface; tests drive it directly.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use vitrine_core::ProductId;

use crate::cart::{CartEngine, CartStore};
use crate::catalog::{CatalogClient, CatalogState, Product};
use crate::services::checkout::{self, OrderConfirmation};
use crate::slider::{ImageLoader, SliderController, SliderView};
use crate::views::{CartView, CatalogView, Snapshot};

/// A command from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Fetch a fresh catalog snapshot, replacing the old one wholesale.
    LoadCatalog,
    /// Transition the slider to a specific product index.
    ShowSlide { index: usize },
    /// Advance the slider one product, wrapping at the end.
    NextSlide,
    /// Move the slider back one product, wrapping at the start.
    PrevSlide,
    /// Add one unit of a catalog product to the cart.
    AddToCart { product_id: ProductId },
    /// Adjust the quantity of the cart line at `index` by `delta`.
    AdjustQuantity { index: usize, delta: i64 },
    /// Remove the cart line at `index`.
    RemoveLine { index: usize },
    /// Run the simulated checkout over the current cart.
    Checkout,
}

/// What a dispatched action did.
#[derive(Debug)]
pub enum Outcome {
    /// The action ran to completion.
    Completed,
    /// The action was a silent no-op: unknown product id, out-of-range
    /// index, guarded slider, or checkout on an empty cart.
    Ignored,
    /// Checkout completed with this confirmation.
    Order(OrderConfirmation),
}

/// The storefront core: catalog + cart + slider behind a command interface.
pub struct Storefront {
    catalog_client: CatalogClient,
    catalog: RwLock<CatalogState>,
    cart: Mutex<CartEngine>,
    slider: SliderController,
}

impl Storefront {
    /// Assemble the engine. The cart loads from `cart_store` immediately.
    #[must_use]
    pub fn new(
        catalog_client: CatalogClient,
        cart_store: Box<dyn CartStore>,
        loader: Arc<dyn ImageLoader>,
    ) -> Self {
        Self {
            catalog_client,
            catalog: RwLock::new(CatalogState::NotLoaded),
            cart: Mutex::new(CartEngine::load(cart_store)),
            slider: SliderController::new(loader),
        }
    }

    /// Apply one command.
    pub async fn dispatch(&self, action: Action) -> Outcome {
        match action {
            Action::LoadCatalog => self.load_catalog().await,
            Action::ShowSlide { index } => completed_if(self.slider.request(index).await),
            Action::NextSlide => completed_if(self.slider.next().await),
            Action::PrevSlide => completed_if(self.slider.prev().await),
            Action::AddToCart { product_id } => self.add_to_cart(product_id),
            Action::AdjustQuantity { index, delta } => {
                completed_if(self.lock_cart().adjust(index, delta))
            }
            Action::RemoveLine { index } => completed_if(self.lock_cart().remove(index)),
            Action::Checkout => self.checkout().await,
        }
    }

    async fn load_catalog(&self) -> Outcome {
        let state = match self.catalog_client.fetch().await {
            Ok(products) if products.is_empty() => CatalogState::Empty,
            Ok(products) => CatalogState::Ready(products),
            Err(e) => {
                tracing::warn!(error = %e, "catalog fetch failed");
                CatalogState::Failed
            }
        };

        let products = state.products().to_vec();
        let has_products = !products.is_empty();
        *self.write_catalog() = state;

        // New snapshot: reset the slider and show the first product.
        self.slider.set_catalog(products);
        if has_products {
            self.slider.request(0).await;
        }

        Outcome::Completed
    }

    fn add_to_cart(&self, product_id: ProductId) -> Outcome {
        let catalog = self.read_catalog();
        let Some(product) = catalog.find(product_id) else {
            return Outcome::Ignored;
        };
        self.lock_cart().add(product);
        Outcome::Completed
    }

    async fn checkout(&self) -> Outcome {
        let (item_count, total) = {
            let cart = self.lock_cart();
            if cart.is_empty() {
                return Outcome::Ignored;
            }
            (cart.badge_count(), cart.total())
        };

        let confirmation = checkout::process(item_count, total).await;
        self.lock_cart().clear();
        Outcome::Order(confirmation)
    }

    // =========================================================================
    // Read models
    // =========================================================================

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            catalog: self.catalog_view(),
            cart: self.cart_view(),
            slider: self.slider_view(),
        }
    }

    #[must_use]
    pub fn catalog_view(&self) -> CatalogView {
        CatalogView::from_state(&self.read_catalog())
    }

    #[must_use]
    pub fn cart_view(&self) -> CartView {
        CartView::from_engine(&self.lock_cart())
    }

    #[must_use]
    pub fn slider_view(&self) -> SliderView {
        self.slider.view()
    }

    #[must_use]
    pub fn badge_count(&self) -> u64 {
        self.lock_cart().badge_count()
    }

    /// Full detail for one catalog product.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<Product> {
        self.read_catalog().find(id).cloned()
    }

    fn lock_cart(&self) -> MutexGuard<'_, CartEngine> {
        self.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn read_catalog(&self) -> RwLockReadGuard<'_, CatalogState> {
        self.catalog.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_catalog(&self) -> RwLockWriteGuard<'_, CatalogState> {
        self.catalog.write().unwrap_or_else(PoisonError::into_inner)
    }
}

const fn completed_if(applied: bool) -> Outcome {
    if applied {
        Outcome::Completed
    } else {
        Outcome::Ignored
    }
}
