//! Request DTOs for the catalog API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Request body for creating or replacing a product.
///
/// The id is never client-supplied: creation assigns one, update takes it
/// from the path.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRequest {
    /// Display name
    pub name: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Unit price
    pub price: f64,
    /// Category name
    pub category: String,
    /// Brand name
    pub brand: String,
}

impl ProductRequest {
    /// Validates the request data.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("Product name cannot be empty".to_string());
        }
        if self.category.trim().is_empty() {
            return Some("Category cannot be empty".to_string());
        }
        if self.brand.trim().is_empty() {
            return Some("Brand cannot be empty".to_string());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Some("Price must be a non-negative number".to_string());
        }
        None
    }
}

/// Query parameters for product search.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    /// Free-text query
    pub q: String,
}
