//! Response types (Serialize)

use serde::{Deserialize, Serialize};

use product_catalog_core::{LIST_MESSAGE, Product, QueryResult};

/// Body of `GET /products`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProductListResponse {
    pub message: String,
    /// Matches before pagination.
    pub total: usize,
    /// Items on this page.
    pub count: usize,
    pub products: Vec<Product>,
}

impl From<QueryResult> for ProductListResponse {
    fn from(result: QueryResult) -> Self {
        Self {
            message: LIST_MESSAGE.to_owned(),
            total: result.total_matched,
            count: result.returned_count,
            products: result.items,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
#[non_exhaustive]
pub struct VersionResponse {
    pub version: &'static str,
}
