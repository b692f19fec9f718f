//! Request/query types (Deserialize) and their conversion into typed queries.
//!
//! Every list parameter arrives as optional text so malformed numbers can be
//! reported as 422 with the offending parameter named, instead of the generic
//! extractor rejection. Sort parameters never fail.

use std::str::FromStr;

use product_catalog_core::{
    CatalogError, DEFAULT_PAGE_LIMIT, QueryRequest, Result, SortField, SortOrder,
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ProductListQuery {
    pub q: Option<String>,
    #[serde(rename = "minPrice", alias = "min_price")]
    pub min_price: Option<String>,
    #[serde(rename = "maxPrice", alias = "max_price")]
    pub max_price: Option<String>,
    #[serde(rename = "sortBy", alias = "sort_by")]
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub skip: Option<String>,
    pub limit: Option<String>,
}

impl ProductListQuery {
    /// Validates every parameter and builds the processor request.
    ///
    /// `max_limit` is the largest page size the server accepts.
    pub fn into_request(self, max_limit: usize) -> Result<QueryRequest> {
        // Unknown sort fields keep the filtered catalog order; only `desc` reverses.
        let sort_field = match self.sort_by.as_deref() {
            Some(raw) => raw.parse::<SortField>().ok(),
            None => Some(SortField::default()),
        };
        let sort_order = self
            .order
            .as_deref()
            .and_then(|raw| raw.parse::<SortOrder>().ok())
            .unwrap_or_default();

        let request = QueryRequest {
            keyword: self.q.filter(|q| !q.is_empty()),
            min_price: parse_param("minPrice", self.min_price.as_deref(), "an integer")?,
            max_price: parse_param("maxPrice", self.max_price.as_deref(), "an integer")?,
            sort_field,
            sort_order,
            skip: parse_param("skip", self.skip.as_deref(), "a non-negative integer")?
                .unwrap_or(0),
            limit: parse_param("limit", self.limit.as_deref(), "a positive integer")?
                .unwrap_or(DEFAULT_PAGE_LIMIT),
        };
        request.validate_with_max(max_limit)?;
        Ok(request)
    }
}

fn parse_param<T: FromStr>(name: &str, raw: Option<&str>, expected: &str) -> Result<Option<T>> {
    raw.map(|value| {
        value.trim().parse::<T>().map_err(|_| {
            CatalogError::InvalidQuery(format!("{name} must be {expected}, got '{value}'"))
        })
    })
    .transpose()
}

/// Parses the `{id}` path segment. Any integer is accepted; lookup decides 404.
pub fn parse_product_id(raw: &str) -> Result<i64> {
    raw.trim().parse::<i64>().map_err(|_| {
        CatalogError::InvalidQuery(format!("product id must be an integer, got '{raw}'"))
    })
}
