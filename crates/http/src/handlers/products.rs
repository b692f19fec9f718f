use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use std::sync::Arc;

use product_catalog_core::Product;

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::{ProductListQuery, parse_product_id};
use crate::response_types::ProductListResponse;

pub async fn list_products(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ProductListQuery>, QueryRejection>,
) -> Result<Json<ProductListResponse>, ApiError> {
    let Query(query) = query?;
    let request = query.into_request(state.max_limit)?;
    let result = state.catalog.query(&request);
    tracing::debug!(
        keyword = ?request.keyword,
        min_price = ?request.min_price,
        max_price = ?request.max_price,
        sort_field = ?request.sort_field,
        skip = request.skip,
        limit = request.limit,
        total = result.total_matched,
        returned = result.returned_count,
        "product list query"
    );
    Ok(Json(result.into()))
}

pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let id = parse_product_id(&raw_id)?;
    let product = state.catalog.get(id).inspect_err(|_| {
        tracing::debug!(id, "product lookup missed");
    })?;
    Ok(Json(product.clone()))
}
