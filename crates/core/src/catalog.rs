//! The read-only product catalog.
//!
//! A [`Catalog`] is built once at startup and shared by every request. It is
//! never mutated afterwards, so clones are cheap `Arc` copies and no locking
//! is needed.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use crate::error::{CatalogError, Result};
use crate::product::Product;

/// Immutable snapshot of the products available for querying.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<[Product]>,
}

impl Catalog {
    /// Builds a catalog after checking every product invariant.
    ///
    /// Ids must be positive and unique, names non-empty, prices non-negative.
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if product.id <= 0 {
                return Err(CatalogError::InvalidCatalog(format!(
                    "product id must be positive, got {}",
                    product.id
                )));
            }
            if !seen.insert(product.id) {
                return Err(CatalogError::InvalidCatalog(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
            if product.name.trim().is_empty() {
                return Err(CatalogError::InvalidCatalog(format!(
                    "product {} has an empty name",
                    product.id
                )));
            }
            if product.price < 0 {
                return Err(CatalogError::InvalidCatalog(format!(
                    "product {} has negative price {}",
                    product.id, product.price
                )));
            }
        }
        Ok(Self { products: products.into() })
    }

    /// The six-product catalog served when no catalog file is configured.
    #[must_use]
    pub fn demo() -> Self {
        let products = vec![
            Product::new(1, "高機能スマートフォン", 80000, "electronics"),
            Product::new(2, "ノイズキャンセリングヘッドホン", 25000, "electronics"),
            Product::new(3, "オーガニックコットンTシャツ", 4500, "fashion"),
            Product::new(4, "レザーバックパック", 18000, "fashion"),
            Product::new(5, "自動掃除ロボット", 45000, "home"),
            Product::new(6, "コーヒーメーカー", 9800, "home"),
        ];
        Self { products: products.into() }
    }

    /// Parses a JSON array of products.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// Reads and validates a JSON catalog file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&content)?;
        tracing::debug!(path = %path.display(), products = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::demo()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
