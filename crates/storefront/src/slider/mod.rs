//! Hero slider state machine.
//!
//! The slider owns the currently displayed product index and drives one
//! transition at a time: fade out, preload the target image, swap the
//! displayed content, then hold a cooldown before navigation re-enables.
//! A request that arrives while a transition is underway is ignored, not
//! queued.
//!
//! Every accepted request bumps a generation counter, and each delayed step
//! re-checks the counter before writing. A continuation whose generation is
//! stale (because a newer catalog snapshot arrived) silently drops out
//! instead of clobbering live state.

mod preload;

pub use preload::{HttpImageLoader, ImageLoader, PreloadError};

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde::Serialize;
use tokio::time::sleep;

use crate::catalog::Product;

/// Visual fade-out duration before the slide content swaps.
pub const FADE_OUT: Duration = Duration::from_millis(300);

/// Post-swap delay before navigation re-enables. Rate-limits transitions;
/// independent of the visual fade-in.
pub const COOLDOWN: Duration = Duration::from_millis(350);

/// Number of description characters shown on the hero slide.
pub const DESCRIPTION_PREVIEW: usize = 120;

/// The currently displayed slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slide {
    pub index: usize,
    pub title: String,
    /// First [`DESCRIPTION_PREVIEW`] characters with an ellipsis suffix.
    pub description: String,
    /// `None` when the image failed to preload.
    pub image: Option<String>,
}

/// Read model of the slider.
#[derive(Debug, Clone, Serialize)]
pub struct SliderView {
    /// Nothing to display until the first transition completes its swap.
    pub slide: Option<Slide>,
    /// A navigation is underway; requests are ignored until it finishes.
    pub transitioning: bool,
    /// The fade-out phase of the transition (content not yet swapped).
    pub fading: bool,
}

struct SliderState {
    products: Vec<Product>,
    current: usize,
    transitioning: bool,
    fading: bool,
    generation: u64,
    slide: Option<Slide>,
}

impl SliderState {
    /// Index one step forward or back with wraparound, or `None` when
    /// navigation is currently impossible.
    fn nav_target(&self, forward: bool) -> Option<usize> {
        let len = self.products.len();
        if len == 0 || self.transitioning {
            return None;
        }
        Some(if forward {
            (self.current + 1) % len
        } else {
            (self.current + len - 1) % len
        })
    }
}

/// Slider controller: the index plus the transition state machine.
pub struct SliderController {
    state: Mutex<SliderState>,
    loader: Arc<dyn ImageLoader>,
}

impl SliderController {
    #[must_use]
    pub fn new(loader: Arc<dyn ImageLoader>) -> Self {
        Self {
            state: Mutex::new(SliderState {
                products: Vec::new(),
                current: 0,
                transitioning: false,
                fading: false,
                generation: 0,
                slide: None,
            }),
            loader,
        }
    }

    fn lock(&self) -> MutexGuard<'_, SliderState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Install a new catalog snapshot.
    ///
    /// Resets the index to 0, clears the displayed slide, and orphans any
    /// in-flight transition by bumping the generation.
    pub fn set_catalog(&self, products: Vec<Product>) {
        let mut state = self.lock();
        state.products = products;
        state.current = 0;
        state.transitioning = false;
        state.fading = false;
        state.generation = state.generation.wrapping_add(1);
        state.slide = None;
    }

    /// Run one transition to the product at `index`.
    ///
    /// Returns `false` without side effects when the catalog is empty, the
    /// index has no product, or another transition is underway. The guard
    /// is checked and set under one lock acquisition, so two concurrent
    /// requests cannot both pass it.
    pub async fn request(&self, index: usize) -> bool {
        let (generation, product) = {
            let mut state = self.lock();
            let Some(product) = state.products.get(index).cloned() else {
                return false;
            };
            if state.transitioning {
                return false;
            }
            state.transitioning = true;
            state.fading = true;
            state.generation = state.generation.wrapping_add(1);
            (state.generation, product)
        };

        sleep(FADE_OUT).await;

        let image = match self.loader.preload(&product.image).await {
            Ok(()) => Some(product.image.clone()),
            Err(e) => {
                tracing::warn!(url = %product.image, error = %e, "slide image failed to preload");
                None
            }
        };

        // Title and description swap regardless of the preload outcome.
        {
            let mut state = self.lock();
            if state.generation == generation {
                state.current = index;
                state.fading = false;
                state.slide = Some(Slide {
                    index,
                    title: product.title.clone(),
                    description: preview(&product.description),
                    image,
                });
            }
        }

        sleep(COOLDOWN).await;

        let mut state = self.lock();
        if state.generation == generation {
            state.transitioning = false;
        }
        true
    }

    /// Advance one slide with wraparound.
    pub async fn next(&self) -> bool {
        let Some(index) = self.lock().nav_target(true) else {
            return false;
        };
        self.request(index).await
    }

    /// Go back one slide with wraparound.
    pub async fn prev(&self) -> bool {
        let Some(index) = self.lock().nav_target(false) else {
            return false;
        };
        self.request(index).await
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.lock().current
    }

    #[must_use]
    pub fn view(&self) -> SliderView {
        let state = self.lock();
        SliderView {
            slide: state.slide.clone(),
            transitioning: state.transitioning,
            fading: state.fading,
        }
    }
}

/// First [`DESCRIPTION_PREVIEW`] characters of `description` with a literal
/// ellipsis suffix, appended whether or not truncation occurred.
#[must_use]
pub fn preview(description: &str) -> String {
    let mut out: String = description.chars().take(DESCRIPTION_PREVIEW).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use vitrine_core::ProductId;

    use super::*;

    struct StubLoader {
        fail: bool,
    }

    #[async_trait]
    impl ImageLoader for StubLoader {
        async fn preload(&self, _url: &str) -> Result<(), PreloadError> {
            if self.fail {
                Err(PreloadError::Status(reqwest::StatusCode::NOT_FOUND))
            } else {
                Ok(())
            }
        }
    }

    fn product(id: i32) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            description: "d".repeat(200),
            price: Decimal::from(10),
            image: format!("https://example.com/{id}.jpg"),
        }
    }

    fn controller(count: i32, fail_preload: bool) -> Arc<SliderController> {
        let controller = Arc::new(SliderController::new(Arc::new(StubLoader {
            fail: fail_preload,
        })));
        controller.set_catalog((1..=count).map(product).collect());
        controller
    }

    #[tokio::test(start_paused = true)]
    async fn test_transition_swaps_content() {
        let slider = controller(3, false);

        assert!(slider.request(1).await);

        let view = slider.view();
        let slide = view.slide.unwrap();
        assert_eq!(slide.index, 1);
        assert_eq!(slide.title, "Product 2");
        assert_eq!(slide.image.as_deref(), Some("https://example.com/2.jpg"));
        assert!(!view.transitioning);
        assert_eq!(slider.current_index(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_request_while_transitioning_is_ignored() {
        let slider = controller(3, false);

        let first = {
            let slider = Arc::clone(&slider);
            tokio::spawn(async move { slider.request(1).await })
        };
        tokio::task::yield_now().await;

        // The first transition is in its fade-out; a second request must
        // bounce off the guard without changing anything.
        assert!(slider.view().transitioning);
        assert!(!slider.request(2).await);

        assert!(first.await.unwrap());
        assert_eq!(slider.current_index(), 1);
        assert_eq!(slider.view().slide.unwrap().title, "Product 2");
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_catalog_and_bad_index_are_ignored() {
        let empty = controller(0, false);
        assert!(!empty.request(0).await);
        assert!(!empty.next().await);
        assert!(!empty.prev().await);

        let slider = controller(3, false);
        assert!(!slider.request(3).await);
        assert!(slider.view().slide.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_next_wraps_at_last_index() {
        let slider = controller(3, false);
        assert!(slider.request(2).await);
        assert_eq!(slider.current_index(), 2);

        assert!(slider.next().await);
        assert_eq!(slider.current_index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_prev_wraps_at_index_zero() {
        let slider = controller(3, false);
        assert_eq!(slider.current_index(), 0);

        assert!(slider.prev().await);
        assert_eq!(slider.current_index(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_preload_failure_blanks_image_but_swaps_text() {
        let slider = controller(2, true);

        assert!(slider.request(1).await);

        let slide = slider.view().slide.unwrap();
        assert_eq!(slide.title, "Product 2");
        assert_eq!(slide.image, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_catalog_orphans_inflight_transition() {
        let slider = controller(3, false);

        let inflight = {
            let slider = Arc::clone(&slider);
            tokio::spawn(async move { slider.request(1).await })
        };
        tokio::task::yield_now().await;

        slider.set_catalog(vec![product(9)]);
        inflight.await.unwrap();

        // The stale continuation must not have written its slide or
        // re-toggled the flag cleared by set_catalog.
        let view = slider.view();
        assert!(view.slide.is_none());
        assert!(!view.transitioning);
        assert_eq!(slider.current_index(), 0);
    }

    #[test]
    fn test_preview_truncates_at_120_chars() {
        let long = "x".repeat(150);
        let out = preview(&long);
        assert_eq!(out.chars().count(), 123);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn test_preview_suffixes_short_descriptions_too() {
        assert_eq!(preview("Short"), "Short...");
    }
}
