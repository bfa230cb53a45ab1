//! API Module
//!
//! HTTP handlers and routing for the catalog REST API.
//!
//! # Endpoints
//! - `GET /products` / `POST /products`
//! - `GET /products/:id` / `PUT /products/:id` / `DELETE /products/:id`
//! - `GET /products/category/:name`
//! - `GET /products/brand/:name`
//! - `GET /products/search?q=`
//! - `GET /cache/stats`
//! - `GET /health`

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
