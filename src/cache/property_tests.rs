//! Property-Based Tests for the Cache Module
//!
//! Uses proptest to verify store counter accuracy, expiration behavior and
//! the coordinator's invalidation policy across generated inputs.

use proptest::prelude::*;
use std::collections::HashSet;
use std::thread::sleep;
use std::time::Duration;

use crate::cache::{CatalogCache, TtlCache};
use crate::models::Product;

// == Test Configuration ==
const TEST_TTL: Duration = Duration::from_secs(300);

// == Strategies ==
/// Generates valid cache keys (non-empty after trimming)
fn valid_key_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_]{1,16}".prop_map(|s| s)
}

/// Generates cache values
fn valid_value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,64}".prop_map(|s| s)
}

/// Generates a sequence of store operations for testing
#[derive(Debug, Clone)]
enum CacheOp {
    Put { key: String, value: String },
    Get { key: String },
    Remove { key: String },
    Contains { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (valid_key_strategy(), valid_value_strategy())
            .prop_map(|(key, value)| CacheOp::Put { key, value }),
        valid_key_strategy().prop_map(|key| CacheOp::Get { key }),
        valid_key_strategy().prop_map(|key| CacheOp::Remove { key }),
        valid_key_strategy().prop_map(|key| CacheOp::Contains { key }),
    ]
}

/// Generates a product with the given id and dimension names
fn product(id: u64, category: &str, brand: &str) -> Product {
    Product::new(
        id,
        format!("product_{}", id),
        format!("description of product {}", id),
        9.99,
        category,
        brand,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // For any sequence of operations with a long TTL, the counters must
    // exactly reflect what happened: every read is one hit or one miss,
    // every write one put, every removal of a present entry one removal,
    // and nothing expires.
    #[test]
    fn prop_counter_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let mut store: TtlCache<String, String> = TtlCache::new(TEST_TTL);
        let mut present: HashSet<String> = HashSet::new();
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;
        let mut expected_puts: u64 = 0;
        let mut expected_removals: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Put { key, value } => {
                    store.put(key.clone(), value).unwrap();
                    present.insert(key);
                    expected_puts += 1;
                }
                CacheOp::Get { key } => {
                    if store.get(&key).is_some() {
                        expected_hits += 1;
                        prop_assert!(present.contains(&key));
                    } else {
                        expected_misses += 1;
                        prop_assert!(!present.contains(&key));
                    }
                }
                CacheOp::Remove { key } => {
                    store.remove(&key);
                    if present.remove(&key) {
                        expected_removals += 1;
                    }
                }
                CacheOp::Contains { key } => {
                    // Presence probes must not disturb the hit/miss counters
                    prop_assert_eq!(store.contains_key(&key), present.contains(&key));
                }
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits, "Hits mismatch");
        prop_assert_eq!(stats.misses, expected_misses, "Misses mismatch");
        prop_assert_eq!(stats.puts, expected_puts, "Puts mismatch");
        prop_assert_eq!(stats.removals, expected_removals, "Removals mismatch");
        prop_assert_eq!(stats.expired, 0, "Nothing should expire under a long TTL");
        prop_assert_eq!(stats.current_size, present.len(), "Size mismatch");
    }

    // For any valid key-value pair, storing then retrieving before the TTL
    // elapses returns exactly the stored value.
    #[test]
    fn prop_roundtrip_storage(key in valid_key_strategy(), value in valid_value_strategy()) {
        let mut store = TtlCache::new(TEST_TTL);

        store.put(key.clone(), value.clone()).unwrap();

        prop_assert_eq!(store.get(&key), Some(value));
    }

    // For any key, storing V1 then V2 results in get returning V2, with a
    // single live entry.
    #[test]
    fn prop_overwrite_semantics(
        key in valid_key_strategy(),
        value1 in valid_value_strategy(),
        value2 in valid_value_strategy()
    ) {
        let mut store = TtlCache::new(TEST_TTL);

        store.put(key.clone(), value1).unwrap();
        store.put(key.clone(), value2.clone()).unwrap();

        prop_assert_eq!(store.get(&key), Some(value2));
        prop_assert_eq!(store.size(), 1);
    }

    // For any present key, remove makes a subsequent get a miss.
    #[test]
    fn prop_remove_removes_entry(key in valid_key_strategy(), value in valid_value_strategy()) {
        let mut store = TtlCache::new(TEST_TTL);

        store.put(key.clone(), value).unwrap();
        prop_assert!(store.get(&key).is_some());

        store.remove(&key);

        prop_assert!(store.get(&key).is_none());
    }

    // The hit rate is always a percentage in [0, 100], recomputed from the
    // counters.
    #[test]
    fn prop_hit_rate_bounds(ops in prop::collection::vec(cache_op_strategy(), 1..40)) {
        let mut store: TtlCache<String, String> = TtlCache::new(TEST_TTL);

        for op in ops {
            match op {
                CacheOp::Put { key, value } => { store.put(key, value).unwrap(); }
                CacheOp::Get { key } => { store.get(&key); }
                CacheOp::Remove { key } => { store.remove(&key); }
                CacheOp::Contains { key } => { store.contains_key(&key); }
            }
        }

        let stats = store.stats();
        prop_assert!((0.0..=100.0).contains(&stats.hit_rate));
        prop_assert_eq!(stats.total_requests, stats.hits + stats.misses);
    }
}

// Separate proptest block with fewer cases for time-sensitive TTL tests
proptest! {
    #![proptest_config(ProptestConfig::with_cases(5))]

    // For any entry, a get after the TTL elapses is a miss, evicts the
    // entry and counts it as expired.
    #[test]
    fn prop_ttl_expiration_behavior(
        key in valid_key_strategy(),
        value in valid_value_strategy()
    ) {
        let mut store = TtlCache::new(Duration::from_millis(100));

        store.put(key.clone(), value.clone()).unwrap();
        prop_assert_eq!(store.get(&key), Some(value));

        sleep(Duration::from_millis(150));

        prop_assert!(store.get(&key).is_none());
        prop_assert_eq!(store.size(), 0);
        prop_assert_eq!(store.stats().expired, 1);
    }
}

// == Coordinator Properties ==
proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    // For any category name, every casing variant of it reaches the same
    // cached list.
    #[test]
    fn prop_normalized_keys_collide(raw in "[a-zA-Z][a-zA-Z ]{0,12}") {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let cache = CatalogCache::new(TEST_TTL, TEST_TTL, TEST_TTL, TEST_TTL);
            let products = vec![product(1, raw.trim(), "brand")];

            cache.cache_products_by_category(&raw, &products).await.unwrap();

            let upper = raw.to_uppercase();
            let lower = raw.to_lowercase();
            prop_assert_eq!(
                cache.get_products_by_category(&upper).await,
                Some(products.clone())
            );
            prop_assert_eq!(
                cache.get_products_by_category(&lower).await,
                Some(products)
            );
            Ok(())
        })?;
    }

    // Invalidating one product removes exactly its own category and brand
    // lists and wipes the whole search index; every list keyed by a
    // different category survives.
    #[test]
    fn prop_targeted_invalidation(
        categories in prop::collection::hash_set("[a-z]{3,8}", 2..6),
        query in valid_key_strategy()
    ) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let cache = CatalogCache::new(TEST_TTL, TEST_TTL, TEST_TTL, TEST_TTL);

            // One single-product list per category, distinct ids and brands.
            // The search entry goes in first so the later per-category list
            // writes do not evict anything it populated.
            let categories: Vec<String> = categories.into_iter().collect();
            let victims: Vec<Product> = categories
                .iter()
                .enumerate()
                .map(|(i, category)| product((i + 1) as u64, category, &format!("brand_{}", i)))
                .collect();
            cache.cache_search_results(&query, &[victims[0].clone()]).await.unwrap();
            for (category, p) in categories.iter().zip(&victims) {
                cache.cache_products_by_category(category, &[p.clone()]).await.unwrap();
            }

            let victim = &victims[0];
            cache.invalidate_product(victim.id).await;

            // The victim's own list is gone
            prop_assert_eq!(cache.get_products_by_category(&victim.category).await, None);
            prop_assert_eq!(cache.get_product(victim.id).await, None);
            // Other categories are untouched
            for other in victims.iter().skip(1) {
                prop_assert_eq!(
                    cache.get_products_by_category(&other.category).await,
                    Some(vec![other.clone()])
                );
            }
            // The search index is cleared wholesale
            prop_assert_eq!(cache.get_search_results(&query).await, None);
            Ok(())
        })?;
    }

    // List snapshots are defensive copies: mutating what the caller holds
    // never changes what the cache returns.
    #[test]
    fn prop_list_snapshots_are_copies(
        brand in "[a-z]{3,8}",
        count in 1usize..5
    ) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let cache = CatalogCache::new(TEST_TTL, TEST_TTL, TEST_TTL, TEST_TTL);
            let mut products: Vec<Product> = (1..=count as u64)
                .map(|id| product(id, "category", &brand))
                .collect();

            cache.cache_products_by_brand(&brand, &products).await.unwrap();
            products.clear();

            let mut returned = cache.get_products_by_brand(&brand).await.unwrap();
            prop_assert_eq!(returned.len(), count);
            returned.clear();

            prop_assert_eq!(
                cache.get_products_by_brand(&brand).await.unwrap().len(),
                count
            );
            Ok(())
        })?;
    }
}
