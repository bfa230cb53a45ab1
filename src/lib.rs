//! Catalog Cache - an in-process catalog query accelerator
//!
//! Provides a generic expiring key-value store, a multi-index catalog cache
//! coordinator with cross-index invalidation, and a cache-aside product
//! lookup service in front of a pluggable backing store.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod service;
pub mod tasks;

pub use api::AppState;
pub use cache::CatalogCache;
pub use config::Config;
pub use service::ProductService;
pub use tasks::spawn_sweep_task;
