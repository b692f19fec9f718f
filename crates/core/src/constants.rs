//! Shared constants for the product catalog.

/// Page size used when the caller does not pass `limit`.
pub const DEFAULT_PAGE_LIMIT: usize = 10;

/// Largest `limit` accepted at the boundary unless overridden by
/// [`MAX_PAGE_LIMIT_ENV`].
pub const MAX_PAGE_LIMIT: usize = 1000;

/// Environment variable overriding [`MAX_PAGE_LIMIT`].
pub const MAX_PAGE_LIMIT_ENV: &str = "PRODUCT_API_MAX_LIMIT";

/// Environment variable naming a JSON catalog file to serve instead of the demo catalog.
pub const CATALOG_PATH_ENV: &str = "PRODUCT_CATALOG_PATH";

/// Message returned with every product list response.
pub const LIST_MESSAGE: &str = "Product list retrieved.";

/// Message returned by the root endpoint.
pub const WELCOME_MESSAGE: &str =
    "Welcome to the product catalog API for the RAG demo. See /products to get started.";
