//! Profile Cache - an in-memory TTL cache for user profiles
//!
//! Every entry lives for the same TTL after its last write. A background
//! collector periodically removes expired entries; reads never see them in
//! the meantime.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod orders;
pub mod tasks;

pub use api::AppState;
pub use cache::{Keyed, TtlCache};
pub use config::{CacheConfig, Config};
pub use error::{CacheError, Result};
pub use orders::{ProfileCache, ProfileOrders};
