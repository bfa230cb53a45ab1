//! Product Repository
//!
//! Backing-store seam for the catalog. The cache layer never talks to this
//! directly; the service composes the two. Query logic here is deliberately
//! naive (linear scans over an in-memory map) because the repository is the
//! source of truth, not the subject of this crate.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::models::Product;

// == Repository Trait ==
/// Read/write contract over the product backing store.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Finds a single product by id.
    async fn find_by_id(&self, id: u64) -> Result<Option<Product>>;

    /// Lists products in a category, matched case-insensitively.
    async fn find_by_category(&self, category: &str) -> Result<Vec<Product>>;

    /// Lists products of a brand, matched case-insensitively.
    async fn find_by_brand(&self, brand: &str) -> Result<Vec<Product>>;

    /// Free-text search over name and description, case-insensitive.
    async fn search(&self, query: &str) -> Result<Vec<Product>>;

    /// Lists the whole catalog.
    async fn list_all(&self) -> Result<Vec<Product>>;

    /// Persists a new product, assigning its id. Returns the stored row.
    async fn insert(&self, product: Product) -> Result<Product>;

    /// Replaces an existing product by its id. Returns the stored row, or
    /// `None` if no such product exists.
    async fn update(&self, product: Product) -> Result<Option<Product>>;

    /// Deletes a product. Returns whether it existed.
    async fn delete(&self, id: u64) -> Result<bool>;
}

// == In-Memory Repository ==
/// HashMap-backed repository used by the binary and the tests.
#[derive(Debug)]
pub struct InMemoryProductRepository {
    rows: RwLock<HashMap<u64, Product>>,
    next_id: AtomicU64,
}

impl InMemoryProductRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Creates a repository pre-seeded with the given products, keeping
    /// their ids.
    pub async fn with_products(products: Vec<Product>) -> Self {
        let repo = Self::new();
        {
            let mut rows = repo.rows.write().await;
            let mut max_id = 0;
            for product in products {
                max_id = max_id.max(product.id);
                rows.insert(product.id, product);
            }
            repo.next_id.store(max_id + 1, Ordering::SeqCst);
        }
        repo
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn matches_ci(field: &str, wanted: &str) -> bool {
    field.trim().eq_ignore_ascii_case(wanted.trim())
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_by_id(&self, id: u64) -> Result<Option<Product>> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn find_by_category(&self, category: &str) -> Result<Vec<Product>> {
        let rows = self.rows.read().await;
        let mut found: Vec<Product> = rows
            .values()
            .filter(|p| matches_ci(&p.category, category))
            .cloned()
            .collect();
        found.sort_by_key(|p| p.id);
        Ok(found)
    }

    async fn find_by_brand(&self, brand: &str) -> Result<Vec<Product>> {
        let rows = self.rows.read().await;
        let mut found: Vec<Product> = rows
            .values()
            .filter(|p| matches_ci(&p.brand, brand))
            .cloned()
            .collect();
        found.sort_by_key(|p| p.id);
        Ok(found)
    }

    async fn search(&self, query: &str) -> Result<Vec<Product>> {
        let needle = query.trim().to_lowercase();
        let rows = self.rows.read().await;
        let mut found: Vec<Product> = rows
            .values()
            .filter(|p| {
                !needle.is_empty()
                    && (p.name.to_lowercase().contains(&needle)
                        || p.description.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect();
        found.sort_by_key(|p| p.id);
        Ok(found)
    }

    async fn list_all(&self) -> Result<Vec<Product>> {
        let rows = self.rows.read().await;
        let mut all: Vec<Product> = rows.values().cloned().collect();
        all.sort_by_key(|p| p.id);
        Ok(all)
    }

    async fn insert(&self, mut product: Product) -> Result<Product> {
        product.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.rows
            .write()
            .await
            .insert(product.id, product.clone());
        Ok(product)
    }

    async fn update(&self, product: Product) -> Result<Option<Product>> {
        let mut rows = self.rows.write().await;
        if !rows.contains_key(&product.id) {
            return Ok(None);
        }
        rows.insert(product.id, product.clone());
        Ok(Some(product))
    }

    async fn delete(&self, id: u64) -> Result<bool> {
        Ok(self.rows.write().await.remove(&id).is_some())
    }
}
