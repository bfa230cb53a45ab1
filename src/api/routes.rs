//! API Routes
//!
//! Configures the Axum router with all catalog endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cache_stats_handler, create_product_handler, delete_product_handler, get_by_brand_handler,
    get_by_category_handler, get_product_handler, health_handler, list_products_handler,
    search_products_handler, update_product_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /products` - List the whole catalog
/// - `POST /products` - Create a product
/// - `GET /products/search?q=` - Free-text search
/// - `GET /products/:id` - Fetch a product
/// - `PUT /products/:id` - Replace a product
/// - `DELETE /products/:id` - Delete a product
/// - `GET /products/category/:name` - Products in a category
/// - `GET /products/brand/:name` - Products of a brand
/// - `GET /cache/stats` - Cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/products", get(list_products_handler).post(create_product_handler))
        .route("/products/search", get(search_products_handler))
        .route(
            "/products/:id",
            get(get_product_handler)
                .put(update_product_handler)
                .delete(delete_product_handler),
        )
        .route("/products/category/:name", get(get_by_category_handler))
        .route("/products/brand/:name", get(get_by_brand_handler))
        .route("/cache/stats", get(cache_stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
