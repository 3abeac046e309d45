//! Profile and Order domain types
//!
//! The values the service caches: a user profile together with its orders,
//! keyed by the profile's UUID.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cache::Keyed;

/// A user profile with its orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub orders: Vec<Order>,
}

/// A single order; its payload is free-form JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub uuid: String,
    pub value: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Keyed for Profile {
    fn cache_key(&self) -> &str {
        &self.uuid
    }
}

impl Profile {
    /// Creates a profile with no orders.
    pub fn new(uuid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            name: name.into(),
            orders: Vec::new(),
        }
    }

    /// Looks up an order by UUID.
    pub fn order(&self, order_uuid: &str) -> Option<&Order> {
        self.orders.iter().find(|order| order.uuid == order_uuid)
    }

    /// Returns a copy of this profile with the order added or replaced.
    ///
    /// Replacing keeps the order's position and original `created_at`; a new
    /// order is appended with both timestamps set to `now`.
    pub fn with_order(
        &self,
        order_uuid: &str,
        value: serde_json::Value,
        now: DateTime<Utc>,
    ) -> Profile {
        let mut updated = self.clone();
        match updated
            .orders
            .iter_mut()
            .find(|order| order.uuid == order_uuid)
        {
            Some(order) => {
                order.value = value;
                order.updated_at = now;
            }
            None => updated.orders.push(Order {
                uuid: order_uuid.to_string(),
                value,
                created_at: now,
                updated_at: now,
            }),
        }
        updated
    }

    /// Returns a copy of this profile without the order, or `None` if it has no such order.
    pub fn without_order(&self, order_uuid: &str) -> Option<Profile> {
        self.order(order_uuid)?;

        let mut updated = self.clone();
        updated.orders.retain(|order| order.uuid != order_uuid);
        Some(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use serde_json::json;

    #[test]
    fn test_profile_cache_key_is_uuid() {
        let profile = Profile::new("u1", "Alice");
        assert_eq!(profile.cache_key(), "u1");
    }

    #[test]
    fn test_with_order_appends_new_order() {
        let now = Utc::now();
        let profile = Profile::new("u1", "Alice").with_order("o1", json!({"total": 10}), now);

        let order = profile.order("o1").unwrap();
        assert_eq!(order.value, json!({"total": 10}));
        assert_eq!(order.created_at, now);
        assert_eq!(order.updated_at, now);
    }

    #[test]
    fn test_with_order_replaces_existing_order() {
        let created = Utc::now();
        let updated_at = created + Duration::seconds(30);

        let profile = Profile::new("u1", "Alice")
            .with_order("o1", json!(1), created)
            .with_order("o2", json!(2), created)
            .with_order("o1", json!(3), updated_at);

        assert_eq!(profile.orders.len(), 2);
        assert_eq!(profile.orders[0].uuid, "o1");
        assert_eq!(profile.orders[0].value, json!(3));
        assert_eq!(profile.orders[0].created_at, created);
        assert_eq!(profile.orders[0].updated_at, updated_at);
    }

    #[test]
    fn test_with_order_leaves_original_untouched() {
        let original = Profile::new("u1", "Alice");
        let _ = original.with_order("o1", json!(null), Utc::now());
        assert!(original.orders.is_empty());
    }

    #[test]
    fn test_without_order() {
        let profile = Profile::new("u1", "Alice").with_order("o1", json!(1), Utc::now());

        let trimmed = profile.without_order("o1").unwrap();
        assert!(trimmed.orders.is_empty());
        assert!(profile.without_order("missing").is_none());
    }

    #[test]
    fn test_profile_deserialize_without_orders() {
        let json = r#"{"uuid": "u1", "name": "Alice"}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile, Profile::new("u1", "Alice"));
    }
}
