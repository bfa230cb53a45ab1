//! Response DTOs for the catalog API
//!
//! Defines the structure of outgoing HTTP response bodies. Products and
//! cache statistics serialize directly; only the envelopes live here.

use serde::Serialize;

/// Response body for a successful delete (DELETE /products/:id)
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Success message
    pub message: String,
    /// The id that was deleted
    pub id: u64,
}

impl DeleteResponse {
    /// Creates a new DeleteResponse
    pub fn new(id: u64) -> Self {
        Self {
            message: format!("Product {} deleted successfully", id),
            id,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_response_serialize() {
        let resp = DeleteResponse::new(7);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("deleted"));
        assert!(json.contains('7'));
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }
}
