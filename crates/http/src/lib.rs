//! HTTP API server for the product catalog.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]

pub mod api_error;
mod handlers;
mod query_types;
mod response_types;

use axum::{Json, Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use product_catalog_core::{Catalog, WELCOME_MESSAGE, max_page_limit};

pub use query_types::ProductListQuery;
pub use response_types::{MessageResponse, ProductListResponse, VersionResponse};

/// Shared application state for all HTTP handlers.
///
/// The catalog is an immutable snapshot, so handlers read it without locking.
pub struct AppState {
    /// Products served by every request
    pub catalog: Catalog,
    /// Largest `limit` accepted on list requests
    pub max_limit: usize,
}

impl AppState {
    /// State with the page-size ceiling taken from `PRODUCT_API_MAX_LIMIT`.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self::with_max_limit(catalog, max_page_limit())
    }

    #[must_use]
    pub fn with_max_limit(catalog: Catalog, max_limit: usize) -> Self {
        Self { catalog, max_limit }
    }
}

fn product_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/products", get(handlers::products::list_products))
        .route("/products/{id}", get(handlers::products::get_product))
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/version", get(version))
        .merge(product_routes())
        .nest("/api/v1", product_routes())
        .layer(cors)
        .with_state(state)
}

async fn root() -> Json<MessageResponse> {
    Json(MessageResponse { message: WELCOME_MESSAGE })
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
