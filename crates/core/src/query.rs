//! Filter → sort → paginate over a catalog snapshot.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::constants::{DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use crate::error::{CatalogError, Result};
use crate::product::Product;

/// Field a result set can be ordered by.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Name,
    Price,
}

impl SortField {
    pub const ALL_VARIANTS_STR: &'static str = "name|price";

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Name => "name",
            Self::Price => "price",
        }
    }

    /// Ascending comparator for this field.
    fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            Self::Name => a.name.cmp(&b.name),
            Self::Price => a.price.cmp(&b.price),
        }
    }
}

impl FromStr for SortField {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "name" => Ok(Self::Name),
            "price" => Ok(Self::Price),
            other => Err(CatalogError::InvalidQuery(format!(
                "sortBy must be one of {}, got '{other}'",
                Self::ALL_VARIANTS_STR
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub const ALL_VARIANTS_STR: &'static str = "asc|desc";

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(CatalogError::InvalidQuery(format!(
                "order must be one of {}, got '{other}'",
                Self::ALL_VARIANTS_STR
            ))),
        }
    }
}

/// One list request. `sort_field: None` keeps the filtered catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub keyword: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub sort_field: Option<SortField>,
    pub sort_order: SortOrder,
    pub skip: usize,
    pub limit: usize,
}

impl Default for QueryRequest {
    fn default() -> Self {
        Self {
            keyword: None,
            min_price: None,
            max_price: None,
            sort_field: Some(SortField::Name),
            sort_order: SortOrder::Asc,
            skip: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl QueryRequest {
    /// Rejects page sizes outside `1..=MAX_PAGE_LIMIT`.
    pub fn validate(&self) -> Result<()> {
        self.validate_with_max(MAX_PAGE_LIMIT)
    }

    pub fn validate_with_max(&self, max_limit: usize) -> Result<()> {
        if self.limit == 0 {
            return Err(CatalogError::InvalidQuery("limit must be greater than 0".to_owned()));
        }
        if self.limit > max_limit {
            return Err(CatalogError::InvalidQuery(format!(
                "limit must not exceed {max_limit}, got {}",
                self.limit
            )));
        }
        Ok(())
    }

    fn matches(&self, product: &Product, needle: Option<&str>) -> bool {
        if let Some(needle) = needle {
            if !product.name.to_lowercase().contains(needle) {
                return false;
            }
        }
        if self.min_price.is_some_and(|min| product.price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| product.price > max) {
            return false;
        }
        true
    }
}

/// A page of matches plus the pre-pagination match count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryResult {
    pub total_matched: usize,
    pub returned_count: usize,
    pub items: Vec<Product>,
}

/// Runs the query pipeline: keyword filter, price bounds, stable sort, then the
/// `skip`/`limit` window. `total_matched` is counted before the window is taken.
///
/// Pure function of its inputs; `skip` past the end yields an empty page.
#[must_use]
pub fn process(catalog: &[Product], request: &QueryRequest) -> QueryResult {
    let needle = request
        .keyword
        .as_deref()
        .filter(|k| !k.is_empty())
        .map(str::to_lowercase);

    let mut matched: Vec<&Product> =
        catalog.iter().filter(|p| request.matches(p, needle.as_deref())).collect();

    if let Some(field) = request.sort_field {
        // slice::sort_by is stable; swapping the arguments keeps ties in catalog order.
        match request.sort_order {
            SortOrder::Asc => matched.sort_by(|a, b| field.compare(a, b)),
            SortOrder::Desc => matched.sort_by(|a, b| field.compare(b, a)),
        }
    }

    let total_matched = matched.len();
    let items: Vec<Product> =
        matched.into_iter().skip(request.skip).take(request.limit).cloned().collect();

    QueryResult { total_matched, returned_count: items.len(), items }
}

/// Exact-id lookup.
pub fn get_by_id(catalog: &[Product], id: i64) -> Result<&Product> {
    catalog.iter().find(|p| p.id == id).ok_or(CatalogError::NotFound(id))
}

impl Catalog {
    #[must_use]
    pub fn query(&self, request: &QueryRequest) -> QueryResult {
        process(self.products(), request)
    }

    pub fn get(&self, id: i64) -> Result<&Product> {
        get_by_id(self.products(), id)
    }
}
