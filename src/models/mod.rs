//! Domain model and API DTOs
//!
//! The product entity plus the request/response bodies used by the HTTP
//! surface.

pub mod product;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use product::Product;
pub use requests::{ProductRequest, SearchParams};
pub use responses::{DeleteResponse, HealthResponse};
