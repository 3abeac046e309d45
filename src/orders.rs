//! Profile Orders Service
//!
//! Order add/update/remove on top of the profile cache. Every mutation reads
//! the cached profile, builds a new one and stores it back, which also resets
//! the profile's TTL.
//!
//! Read and write are separate cache calls, so two concurrent mutations of the
//! same profile are last-writer-wins and one of them can be lost.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::debug;

use crate::cache::TtlCache;
use crate::error::{CacheError, Result};
use crate::models::Profile;

/// Cache of profiles keyed by UUID.
pub type ProfileCache = TtlCache<Arc<Profile>>;

#[derive(Debug, Clone)]
pub struct ProfileOrders {
    cache: ProfileCache,
}

impl ProfileOrders {
    pub fn new(cache: ProfileCache) -> Self {
        Self { cache }
    }

    /// Returns the underlying cache.
    pub fn cache(&self) -> &ProfileCache {
        &self.cache
    }

    /// Returns the live profile for `uuid`.
    ///
    /// # Errors
    /// [`CacheError::NotFound`] if the profile was never stored or has expired.
    pub async fn profile(&self, uuid: &str) -> Result<Arc<Profile>> {
        self.cache
            .get(uuid)
            .await
            .ok_or_else(|| CacheError::NotFound(format!("Profile '{}'", uuid)))
    }

    /// Stores a profile, replacing any cached one with the same UUID.
    pub async fn store_profile(&self, profile: Profile) -> Arc<Profile> {
        let profile = Arc::new(profile);
        self.cache.set(Arc::clone(&profile)).await;
        debug!("Stored profile '{}'", profile.uuid);
        profile
    }

    /// Adds an order to the profile or replaces the order with the same UUID.
    pub async fn upsert_order(
        &self,
        profile_uuid: &str,
        order_uuid: &str,
        value: serde_json::Value,
    ) -> Result<Arc<Profile>> {
        let current = self.profile(profile_uuid).await?;
        let updated = current.with_order(order_uuid, value, Utc::now());

        debug!("Upserted order '{}' on profile '{}'", order_uuid, profile_uuid);
        Ok(self.store_profile(updated).await)
    }

    /// Removes an order from the profile.
    ///
    /// # Errors
    /// [`CacheError::NotFound`] if the profile is absent or has no such order.
    pub async fn remove_order(&self, profile_uuid: &str, order_uuid: &str) -> Result<Arc<Profile>> {
        let current = self.profile(profile_uuid).await?;
        let updated = current.without_order(order_uuid).ok_or_else(|| {
            CacheError::NotFound(format!(
                "Order '{}' on profile '{}'",
                order_uuid, profile_uuid
            ))
        })?;

        debug!("Removed order '{}' from profile '{}'", order_uuid, profile_uuid);
        Ok(self.store_profile(updated).await)
    }

    /// Returns the TTL every stored profile receives.
    pub fn ttl(&self) -> Duration {
        self.cache.ttl()
    }
}
