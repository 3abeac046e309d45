//! Request DTOs for the profile cache API
//!
//! Defines the structure of incoming HTTP request bodies.

use std::collections::HashSet;

use serde::Deserialize;

use crate::models::{Order, Profile};

/// Maximum accepted length of a profile or order UUID
pub const MAX_ID_LENGTH: usize = 256;

fn validate_id(kind: &str, id: &str) -> Option<String> {
    if id.is_empty() {
        return Some(format!("{} id cannot be empty", kind));
    }
    if id.len() > MAX_ID_LENGTH {
        return Some(format!(
            "{} id exceeds maximum length of {} characters",
            kind, MAX_ID_LENGTH
        ));
    }
    None
}

/// Request body for storing a profile (PUT /profiles)
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileRequest {
    /// The profile UUID, used as the cache key
    pub uuid: String,
    /// Display name
    pub name: String,
    /// Orders to store with the profile
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl ProfileRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if let Some(error) = validate_id("Profile", &self.uuid) {
            return Some(error);
        }

        let mut seen = HashSet::new();
        for order in &self.orders {
            if let Some(error) = validate_id("Order", &order.uuid) {
                return Some(error);
            }
            if !seen.insert(order.uuid.as_str()) {
                return Some(format!("Duplicate order id '{}'", order.uuid));
            }
        }
        None
    }

    pub fn into_profile(self) -> Profile {
        Profile {
            uuid: self.uuid,
            name: self.name,
            orders: self.orders,
        }
    }
}

/// Request body for adding or updating an order (PUT /profiles/:uuid/orders)
#[derive(Debug, Clone, Deserialize)]
pub struct OrderRequest {
    /// The order UUID; an existing order with this UUID is replaced
    pub uuid: String,
    /// Free-form order payload
    #[serde(default)]
    pub value: serde_json::Value,
}

impl OrderRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        validate_id("Order", &self.uuid)
    }
}
