//! API Handlers
//!
//! HTTP request handlers for each profile cache endpoint.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{
    DeleteResponse, HealthResponse, OrderRequest, Profile, ProfileRequest, SetResponse,
    StatsResponse,
};
use crate::orders::{ProfileCache, ProfileOrders};

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Order service over the shared profile cache
    pub orders: ProfileOrders,
}

impl AppState {
    /// Creates a new AppState around an existing cache.
    pub fn new(cache: ProfileCache) -> Self {
        Self {
            orders: ProfileOrders::new(cache),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Starts the cache's expiry collector, so this must run inside a Tokio runtime.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = ProfileCache::from_config(&config.cache())?;
        Ok(Self::new(cache))
    }

    /// Returns the shared profile cache.
    pub fn cache(&self) -> &ProfileCache {
        self.orders.cache()
    }
}

/// Handler for PUT /profiles
///
/// Stores a profile under its UUID, resetting its TTL.
pub async fn put_profile_handler(
    State(state): State<AppState>,
    Json(req): Json<ProfileRequest>,
) -> Result<Json<SetResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let profile = state.orders.store_profile(req.into_profile()).await;
    let ttl = state.orders.ttl();

    Ok(Json(SetResponse::new(profile.uuid.clone(), ttl.as_secs())))
}

/// Handler for GET /profiles/:uuid
///
/// Returns the cached profile, or 404 if it is absent or expired.
pub async fn get_profile_handler(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
) -> Result<Json<Profile>> {
    let profile = state.orders.profile(&uuid).await?;
    Ok(Json(Profile::clone(&profile)))
}

/// Handler for PUT /profiles/:uuid/orders
///
/// Adds or replaces an order on a cached profile.
pub async fn put_order_handler(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
    Json(req): Json<OrderRequest>,
) -> Result<Json<Profile>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let profile = state.orders.upsert_order(&uuid, &req.uuid, req.value).await?;
    Ok(Json(Profile::clone(&profile)))
}

/// Handler for DELETE /profiles/:uuid/orders/:order_uuid
///
/// Removes an order from a cached profile.
pub async fn delete_order_handler(
    State(state): State<AppState>,
    Path((uuid, order_uuid)): Path<(String, String)>,
) -> Result<Json<DeleteResponse>> {
    state.orders.remove_order(&uuid, &order_uuid).await?;
    Ok(Json(DeleteResponse::new(uuid, order_uuid)))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.cache().stats().await.into())
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
