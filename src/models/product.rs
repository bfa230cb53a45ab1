//! Product Model
//!
//! The catalog entity cached and served by this crate. The backing store is
//! the source of truth for these; cached copies are best-effort snapshots.

use serde::{Deserialize, Serialize};

// == Product ==
/// A single catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Backing-store identifier, never zero for a persisted product
    pub id: u64,
    /// Display name
    pub name: String,
    /// Free-text description, searchable
    pub description: String,
    /// Unit price
    pub price: f64,
    /// Category name as stored (original casing)
    pub category: String,
    /// Brand name as stored (original casing)
    pub brand: String,
}

impl Product {
    /// Creates a product with the given fields.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        category: impl Into<String>,
        brand: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            price,
            category: category.into(),
            brand: brand.into(),
        }
    }
}
