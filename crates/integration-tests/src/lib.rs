//! Integration tests for Vitrine.
//!
//! # Test Categories
//!
//! - `storefront_flow` - End-to-end engine flows, in process against a stub
//!   catalog server. Run by default.
//! - `live_api` - HTTP tests against a running storefront server. These are
//!   `#[ignore]`d; start the server first:
//!
//! ```bash
//! cargo run -p vitrine-storefront
//! cargo test -p vitrine-integration-tests -- --ignored
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::http::header;
use axum::routing::get;
use axum::Router;

/// Spawn a stub catalog server on an ephemeral port.
///
/// Serves the built body at `/products` and a tiny JPEG at `/image.jpg` so
/// slide preloads succeed. The body builder receives the server's base URL,
/// letting product image links point back at the stub. Returns the base URL.
pub async fn spawn_catalog_server(body_for: impl FnOnce(&str) -> String) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind stub catalog server");
    let addr = listener.local_addr().expect("stub server has no address");
    let base = format!("http://{addr}");
    let body = body_for(&base);

    let app = Router::new()
        .route(
            "/products",
            get(move || {
                let body = body.clone();
                async move { ([(header::CONTENT_TYPE, "application/json")], body) }
            }),
        )
        .route(
            "/image.jpg",
            get(|| async { ([(header::CONTENT_TYPE, "image/jpeg")], vec![0xFF_u8, 0xD8]) }),
        );

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            panic!("stub catalog server failed: {e}");
        }
    });

    base
}

/// Build a catalog feed body of `count` products with ids `1..=count`.
///
/// Prices are `10 * id` so expected totals are easy to read in tests.
#[must_use]
pub fn catalog_body(base: &str, count: i32) -> String {
    let products: Vec<serde_json::Value> = (1..=count)
        .map(|id| {
            serde_json::json!({
                "id": id,
                "title": format!("Product {id}"),
                "description": format!("Description of product {id}"),
                "price": 10 * id,
                "image": format!("{base}/image.jpg"),
            })
        })
        .collect();
    serde_json::Value::Array(products).to_string()
}
