//! Response DTOs for the profile cache API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for storing a profile (PUT /profiles)
#[derive(Debug, Clone, Serialize)]
pub struct SetResponse {
    /// Success message
    pub message: String,
    /// The UUID of the stored profile
    pub uuid: String,
    /// Seconds until the profile expires unless refreshed
    pub ttl: u64,
}

impl SetResponse {
    /// Creates a new SetResponse
    pub fn new(uuid: impl Into<String>, ttl: u64) -> Self {
        let uuid = uuid.into();
        Self {
            message: format!("Profile '{}' stored successfully", uuid),
            uuid,
            ttl,
        }
    }
}

/// Response body for removing an order (DELETE /profiles/:uuid/orders/:order_uuid)
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Success message
    pub message: String,
    /// The profile the order was removed from
    pub uuid: String,
    /// The removed order
    pub order_uuid: String,
}

impl DeleteResponse {
    /// Creates a new DeleteResponse
    pub fn new(uuid: impl Into<String>, order_uuid: impl Into<String>) -> Self {
        let uuid = uuid.into();
        let order_uuid = order_uuid.into();
        Self {
            message: format!(
                "Order '{}' removed from profile '{}'",
                order_uuid, uuid
            ),
            uuid,
            order_uuid,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of expired entries removed by the collector
    pub expired_removed: u64,
    /// Number of collector sweeps
    pub sweeps: u64,
    /// Current number of resident entries
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            expired_removed: stats.expired_removed,
            sweeps: stats.sweeps,
            total_entries: stats.total_entries,
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

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
