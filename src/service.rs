//! Product Lookup Service
//!
//! Cache-aside consumer of the catalog cache: every read probes the
//! coordinator first and falls back to the repository on a miss, then
//! populates the cache; every mutation writes the repository first and then
//! invalidates.
//!
//! Cache instrumentation is an explicit wrapper composed around the
//! coordinator calls (`trace_cache_probe`), not a cross-cutting aspect, so
//! it stays visible in the call graph.

use std::sync::Arc;

use tracing::{debug, info};

use crate::cache::{normalize_key, CatalogCache, CatalogCacheStats};
use crate::error::{CacheError, Result};
use crate::models::{Product, ProductRequest};
use crate::repository::ProductRepository;

// == Cache Probe Instrumentation ==
/// Logs the outcome of a cache probe for one index.
fn trace_cache_probe(index: &str, key: &str, hit: bool) {
    if hit {
        debug!(index, key, outcome = "hit", "cache probe");
    } else {
        debug!(index, key, outcome = "miss", "cache probe");
    }
}

// == Product Service ==
/// The product lookup service, composed from the coordinator and the
/// backing repository at the composition root.
pub struct ProductService {
    cache: Arc<CatalogCache>,
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    // == Constructor ==
    /// Creates a service over the given cache and repository.
    pub fn new(cache: Arc<CatalogCache>, repository: Arc<dyn ProductRepository>) -> Self {
        Self { cache, repository }
    }

    // == Read Paths ==
    /// Fetches a product by id, cache-aside.
    pub async fn get_product(&self, id: u64) -> Result<Option<Product>> {
        if let Some(product) = self.cache.get_product(id).await {
            trace_cache_probe("product", &id.to_string(), true);
            return Ok(Some(product));
        }
        trace_cache_probe("product", &id.to_string(), false);

        match self.repository.find_by_id(id).await? {
            Some(product) => {
                self.cache.cache_product(&product).await?;
                Ok(Some(product))
            }
            None => Ok(None),
        }
    }

    /// Fetches a category's products, cache-aside.
    pub async fn get_products_by_category(&self, category: &str) -> Result<Vec<Product>> {
        if let Some(products) = self.cache.get_products_by_category(category).await {
            trace_cache_probe("category", category, true);
            return Ok(products);
        }
        trace_cache_probe("category", category, false);

        let products = self.repository.find_by_category(category).await?;
        // An unset dimension is a legitimate miss, but never a cache key
        if !normalize_key(category).is_empty() {
            self.cache
                .cache_products_by_category(category, &products)
                .await?;
        }
        Ok(products)
    }

    /// Fetches a brand's products, cache-aside.
    pub async fn get_products_by_brand(&self, brand: &str) -> Result<Vec<Product>> {
        if let Some(products) = self.cache.get_products_by_brand(brand).await {
            trace_cache_probe("brand", brand, true);
            return Ok(products);
        }
        trace_cache_probe("brand", brand, false);

        let products = self.repository.find_by_brand(brand).await?;
        if !normalize_key(brand).is_empty() {
            self.cache.cache_products_by_brand(brand, &products).await?;
        }
        Ok(products)
    }

    /// Free-text product search, cache-aside.
    pub async fn search_products(&self, query: &str) -> Result<Vec<Product>> {
        if let Some(products) = self.cache.get_search_results(query).await {
            trace_cache_probe("search", query, true);
            return Ok(products);
        }
        trace_cache_probe("search", query, false);

        let products = self.repository.search(query).await?;
        if !normalize_key(query).is_empty() {
            self.cache.cache_search_results(query, &products).await?;
        }
        Ok(products)
    }

    /// Lists the whole catalog. Uncached repository passthrough.
    pub async fn list_products(&self) -> Result<Vec<Product>> {
        self.repository.list_all().await
    }

    // == Write Paths ==
    /// Creates a product: repository write first, then cache maintenance.
    ///
    /// The new product is cached by id, which also evicts the category and
    /// brand lists it now belongs to; the search index is cleared since the
    /// new product may match any cached query.
    pub async fn create_product(&self, request: ProductRequest) -> Result<Product> {
        let created = self
            .repository
            .insert(Product {
                id: 0,
                name: request.name,
                description: request.description,
                price: request.price,
                category: request.category,
                brand: request.brand,
            })
            .await?;

        self.cache.invalidate_product(created.id).await;
        self.cache.cache_product(&created).await?;

        info!(id = created.id, "product created");
        Ok(created)
    }

    /// Replaces a product, then invalidates its cache entries.
    pub async fn update_product(&self, id: u64, request: ProductRequest) -> Result<Product> {
        let updated = self
            .repository
            .update(Product {
                id,
                name: request.name,
                description: request.description,
                price: request.price,
                category: request.category,
                brand: request.brand,
            })
            .await?
            .ok_or_else(|| CacheError::NotFound(format!("id {}", id)))?;

        self.cache.invalidate_product(id).await;

        info!(id, "product updated");
        Ok(updated)
    }

    /// Deletes a product, then invalidates its cache entries.
    pub async fn delete_product(&self, id: u64) -> Result<()> {
        if !self.repository.delete(id).await? {
            return Err(CacheError::NotFound(format!("id {}", id)));
        }

        self.cache.invalidate_product(id).await;

        info!(id, "product deleted");
        Ok(())
    }

    // == Stats ==
    /// Returns the coordinator's per-index and aggregate statistics.
    pub async fn cache_stats(&self) -> CatalogCacheStats {
        self.cache.stats().await
    }
}
