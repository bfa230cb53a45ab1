//! Catalog Cache Coordinator
//!
//! Owns four independently configured TTL stores over the same catalog (by
//! product id, by category, by brand, by search key) and implements the
//! cross-index invalidation policy that keeps them coherent after a write.

use std::time::Duration;

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{StatsSnapshot, TtlCache};
use crate::error::Result;
use crate::models::Product;

// == Key Normalization ==
/// Case-folds a category/brand/search key so case variants collide onto the
/// same entry.
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

// == Catalog Cache ==
/// Coordinator over the four catalog indexes.
///
/// Each index lives behind its own `RwLock`, so every mutation of one
/// index's map and counters is atomic while operations on different indexes
/// proceed independently. Locks are acquired one at a time and released
/// before the next is taken; cross-index consistency is best-effort, which
/// is sound because a stale absence only forces a repository re-check.
#[derive(Debug)]
pub struct CatalogCache {
    /// Single products keyed by id
    by_id: RwLock<TtlCache<u64, Product>>,
    /// List snapshots keyed by normalized category name
    by_category: RwLock<TtlCache<String, Vec<Product>>>,
    /// List snapshots keyed by normalized brand name
    by_brand: RwLock<TtlCache<String, Vec<Product>>>,
    /// List snapshots keyed by normalized search text
    by_search: RwLock<TtlCache<String, Vec<Product>>>,
}

// == Aggregate Stats ==
/// Per-index statistics plus aggregate live-entry counts.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogCacheStats {
    pub products: StatsSnapshot,
    pub categories: StatsSnapshot,
    pub brands: StatsSnapshot,
    pub searches: StatsSnapshot,
    pub total_cached_products: usize,
    pub total_cached_categories: usize,
    pub total_cached_brands: usize,
    pub total_cached_searches: usize,
}

impl CatalogCache {
    // == Constructor ==
    /// Creates a coordinator with one TTL per index.
    pub fn new(
        product_ttl: Duration,
        category_ttl: Duration,
        brand_ttl: Duration,
        search_ttl: Duration,
    ) -> Self {
        Self {
            by_id: RwLock::new(TtlCache::new(product_ttl)),
            by_category: RwLock::new(TtlCache::new(category_ttl)),
            by_brand: RwLock::new(TtlCache::new(brand_ttl)),
            by_search: RwLock::new(TtlCache::new(search_ttl)),
        }
    }

    // == Cache Product ==
    /// Writes the product into the id index and evicts the category and
    /// brand lists it belongs to.
    ///
    /// The lists are evicted rather than patched: a single product write can
    /// change the membership or item content of any list it belongs to, so
    /// the next list query is forced to miss, refetch and repopulate.
    pub async fn cache_product(&self, product: &Product) -> Result<()> {
        self.by_id.write().await.put(product.id, product.clone())?;

        let category = normalize_key(&product.category);
        let brand = normalize_key(&product.brand);
        self.by_category.write().await.remove(&category);
        self.by_brand.write().await.remove(&brand);

        debug!(id = product.id, "cached product, evicted its list entries");
        Ok(())
    }

    // == Get Product ==
    /// Looks up a single live product by id.
    pub async fn get_product(&self, id: u64) -> Option<Product> {
        self.by_id.write().await.get(&id)
    }

    // == Cache Products By Category ==
    /// Stores a category list snapshot and populates the id index from its
    /// elements, so item-level and list-level caches fill from one fetch.
    ///
    /// The list itself is written last: each element write evicts the list
    /// entry for its own category, and the final put re-establishes it.
    pub async fn cache_products_by_category(
        &self,
        category: &str,
        products: &[Product],
    ) -> Result<()> {
        for product in products {
            self.cache_product(product).await?;
        }
        self.by_category
            .write()
            .await
            .put(normalize_key(category), products.to_vec())
    }

    /// Looks up the live category list snapshot.
    pub async fn get_products_by_category(&self, category: &str) -> Option<Vec<Product>> {
        self.by_category.write().await.get(&normalize_key(category))
    }

    // == Cache Products By Brand ==
    /// Brand counterpart of [`Self::cache_products_by_category`].
    pub async fn cache_products_by_brand(&self, brand: &str, products: &[Product]) -> Result<()> {
        for product in products {
            self.cache_product(product).await?;
        }
        self.by_brand
            .write()
            .await
            .put(normalize_key(brand), products.to_vec())
    }

    /// Looks up the live brand list snapshot.
    pub async fn get_products_by_brand(&self, brand: &str) -> Option<Vec<Product>> {
        self.by_brand.write().await.get(&normalize_key(brand))
    }

    // == Cache Search Results ==
    /// Stores a search result snapshot under the normalized query text,
    /// populating the id index from its elements.
    pub async fn cache_search_results(&self, query: &str, products: &[Product]) -> Result<()> {
        for product in products {
            self.cache_product(product).await?;
        }
        self.by_search
            .write()
            .await
            .put(normalize_key(query), products.to_vec())
    }

    /// Looks up the live search result snapshot.
    pub async fn get_search_results(&self, query: &str) -> Option<Vec<Product>> {
        self.by_search.write().await.get(&normalize_key(query))
    }

    // == Invalidate Product ==
    /// Invalidation entry point for any catalog mutation of one product.
    ///
    /// Removes the id entry and, when the cached copy reveals the product's
    /// dimensions, the category and brand lists it belonged to (targeted,
    /// all other lists untouched). The search index is cleared wholesale:
    /// without a reverse index from product to search keys, membership
    /// cannot be attributed, so the conservative full clear is the only
    /// correct choice.
    pub async fn invalidate_product(&self, id: u64) {
        let cached = {
            let mut by_id = self.by_id.write().await;
            let cached = by_id.get(&id);
            by_id.remove(&id);
            cached
        };

        match cached {
            Some(product) => {
                let category = normalize_key(&product.category);
                let brand = normalize_key(&product.brand);
                self.by_category.write().await.remove(&category);
                self.by_brand.write().await.remove(&brand);
                debug!(id, %category, %brand, "invalidated product and its list entries");
            }
            // Nothing cached for this id, so nothing is known about its
            // category or brand; their lists expire on their own.
            None => debug!(id, "invalidated product absent from cache"),
        }

        self.by_search.write().await.clear();
    }

    // == Clear ==
    /// Empties all four indexes and resets their counters.
    pub async fn clear(&self) {
        self.by_id.write().await.clear();
        self.by_category.write().await.clear();
        self.by_brand.write().await.clear();
        self.by_search.write().await.clear();
    }

    // == Clean Expired ==
    /// Sweeps all four indexes; returns the total number of entries removed.
    pub async fn clean_expired(&self) -> usize {
        let mut removed = self.by_id.write().await.clean_expired();
        removed += self.by_category.write().await.clean_expired();
        removed += self.by_brand.write().await.clean_expired();
        removed += self.by_search.write().await.clean_expired();
        removed
    }

    // == Stats ==
    /// Returns per-index statistics plus aggregate live counts.
    pub async fn stats(&self) -> CatalogCacheStats {
        let products = self.by_id.write().await.stats();
        let categories = self.by_category.write().await.stats();
        let brands = self.by_brand.write().await.stats();
        let searches = self.by_search.write().await.stats();

        CatalogCacheStats {
            total_cached_products: products.current_size,
            total_cached_categories: categories.current_size,
            total_cached_brands: brands.current_size,
            total_cached_searches: searches.current_size,
            products,
            categories,
            brands,
            searches,
        }
    }
}
