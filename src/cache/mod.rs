//! Cache Module
//!
//! Provides the in-memory TTL cache and the pieces it is built from.

mod entry;
mod stats;
mod store;
mod ttl_cache;


use std::sync::Arc;
use std::time::Duration;

// Re-export public types
pub use entry::CacheEntry;
pub(crate) use entry::deadline_after;
pub use stats::{CacheStats, StatsRecorder};
pub use store::CacheStore;
pub use ttl_cache::TtlCache;

// == Public Constants ==
/// Interval between collector sweeps when none is configured.
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

// == Keyed ==
/// A value that carries its own stable cache key.
///
/// Lets [`TtlCache::set`] derive the key from the value instead of taking it
/// separately. Types without an identity field use
/// [`TtlCache::set_with_key`].
pub trait Keyed {
    fn cache_key(&self) -> &str;
}

impl<T: Keyed + ?Sized> Keyed for Arc<T> {
    fn cache_key(&self) -> &str {
        (**self).cache_key()
    }
}

impl<T: Keyed + ?Sized> Keyed for Box<T> {
    fn cache_key(&self) -> &str {
        (**self).cache_key()
    }
}
