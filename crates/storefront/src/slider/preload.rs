//! Slide image preloading.
//!
//! A slide's image is fetched ahead of the swap so the presentation layer
//! never fades in to a half-loaded picture. Fetched bytes are cached so
//! revisiting a slide is instant.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use thiserror::Error;

/// Errors that can occur while preloading an image.
#[derive(Debug, Error)]
pub enum PreloadError {
    /// Transport-level failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The image URL answered with a non-success status.
    #[error("image endpoint returned {0}")]
    Status(reqwest::StatusCode),
}

/// Fetch-ahead loader for slide images.
#[async_trait]
pub trait ImageLoader: Send + Sync {
    /// Warm the image at `url`. `Ok` means the presentation layer can
    /// display it.
    ///
    /// # Errors
    ///
    /// Returns an error when the image cannot be fetched; the slider blanks
    /// the image and continues the transition.
    async fn preload(&self, url: &str) -> Result<(), PreloadError>;
}

/// Loader that fetches image bytes over HTTP and caches them (10-minute
/// TTL, 64 entries).
#[derive(Clone)]
pub struct HttpImageLoader {
    inner: Arc<HttpImageLoaderInner>,
}

struct HttpImageLoaderInner {
    client: reqwest::Client,
    cache: Cache<String, Arc<Vec<u8>>>,
}

impl HttpImageLoader {
    #[must_use]
    pub fn new() -> Self {
        let cache = Cache::builder()
            .max_capacity(64)
            .time_to_live(Duration::from_secs(600))
            .build();

        Self {
            inner: Arc::new(HttpImageLoaderInner {
                client: reqwest::Client::new(),
                cache,
            }),
        }
    }
}

impl Default for HttpImageLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageLoader for HttpImageLoader {
    async fn preload(&self, url: &str) -> Result<(), PreloadError> {
        if self.inner.cache.contains_key(url) {
            return Ok(());
        }

        let response = self.inner.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PreloadError::Status(status));
        }

        let bytes = response.bytes().await?;
        self.inner
            .cache
            .insert(url.to_string(), Arc::new(bytes.to_vec()))
            .await;
        Ok(())
    }
}
