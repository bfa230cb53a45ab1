//! API Handlers
//!
//! HTTP request handlers for each catalog endpoint. The handlers are thin:
//! validation plus delegation to the product service.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::cache::CatalogCacheStats;
use crate::error::{CacheError, Result};
use crate::models::{DeleteResponse, HealthResponse, Product, ProductRequest, SearchParams};
use crate::service::ProductService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The product lookup service (owns the cache and the repository)
    pub service: Arc<ProductService>,
}

impl AppState {
    /// Creates a new AppState over the given service.
    pub fn new(service: Arc<ProductService>) -> Self {
        Self { service }
    }
}

/// Handler for GET /products/:id
pub async fn get_product_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Product>> {
    match state.service.get_product(id).await? {
        Some(product) => Ok(Json(product)),
        None => Err(CacheError::NotFound(format!("id {}", id))),
    }
}

/// Handler for GET /products
pub async fn list_products_handler(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = state.service.list_products().await?;
    Ok(Json(products))
}

/// Handler for GET /products/category/:name
pub async fn get_by_category_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<Product>>> {
    let products = state.service.get_products_by_category(&name).await?;
    Ok(Json(products))
}

/// Handler for GET /products/brand/:name
pub async fn get_by_brand_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<Product>>> {
    let products = state.service.get_products_by_brand(&name).await?;
    Ok(Json(products))
}

/// Handler for GET /products/search?q=...
pub async fn search_products_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Product>>> {
    let products = state.service.search_products(&params.q).await?;
    Ok(Json(products))
}

/// Handler for POST /products
pub async fn create_product_handler(
    State(state): State<AppState>,
    Json(req): Json<ProductRequest>,
) -> Result<(StatusCode, Json<Product>)> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let created = state.service.create_product(req).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Handler for PUT /products/:id
pub async fn update_product_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<ProductRequest>,
) -> Result<Json<Product>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let updated = state.service.update_product(id, req).await?;
    Ok(Json(updated))
}

/// Handler for DELETE /products/:id
pub async fn delete_product_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<DeleteResponse>> {
    state.service.delete_product(id).await?;
    Ok(Json(DeleteResponse::new(id)))
}

/// Handler for GET /cache/stats
pub async fn cache_stats_handler(State(state): State<AppState>) -> Json<CatalogCacheStats> {
    Json(state.service.cache_stats().await)
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
