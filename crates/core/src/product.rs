use serde::{Deserialize, Serialize};

/// A single catalog entry. Prices are in the smallest currency unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub category: String,
}

impl Product {
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>, price: i64, category: impl Into<String>) -> Self {
        Self { id, name: name.into(), price, category: category.into() }
    }
}
