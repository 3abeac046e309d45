//! Cache Store Module
//!
//! The map behind a [`TtlCache`](super::TtlCache). It has no locking of its own:
//! every method takes the current instant so the owner decides which lock mode
//! and which clock reading an operation runs under.

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

use crate::cache::CacheEntry;

// == Cache Store ==
/// Key to entry mapping with one TTL applied to every write.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage, possibly holding expired entries not yet swept
    entries: HashMap<String, CacheEntry<V>>,
    /// Lifetime given to every entry on `set`
    ttl: Duration,
}

impl<V> CacheStore<V> {
    // == Constructor ==
    /// Creates an empty store whose entries live for `ttl` after each `set`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    /// Returns the TTL applied on every `set`.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Set ==
    /// Stores `value` under `key`, replacing any previous entry wholesale.
    ///
    /// The deadline is always recomputed as `now + ttl`, so a refresh gives the
    /// key a full new lifetime.
    pub fn set(&mut self, key: String, value: V, now: Instant) {
        self.entries
            .insert(key, CacheEntry::new(value, self.ttl, now));
    }

    // == Get ==
    /// Returns the value for `key` if it is present and not expired at `now`.
    ///
    /// Expired entries are reported as absent but left in place for the collector.
    pub fn get(&self, key: &str, now: Instant) -> Option<&V> {
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired_at(now))
            .map(|entry| &entry.value)
    }

    /// Returns the remaining lifetime of `key`, or `None` if it is absent or expired.
    pub fn ttl_remaining(&self, key: &str, now: Instant) -> Option<Duration> {
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired_at(now))
            .map(|entry| entry.ttl_remaining_at(now))
    }

    // == Expired Keys ==
    /// Collects the keys of every entry expired at `now` without touching the map.
    pub fn expired_keys(&self, now: Instant) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.is_expired_at(now))
            .map(|(key, _)| key.clone())
            .collect()
    }

    // == Remove Expired ==
    /// Removes each candidate whose current entry is still expired at `now`.
    ///
    /// Candidates come from an earlier [`expired_keys`](Self::expired_keys) scan,
    /// and a key refreshed since then keeps its new entry.
    ///
    /// Returns the number of entries removed.
    pub fn remove_expired<'a, I>(&mut self, candidates: I, now: Instant) -> usize
    where
        I: IntoIterator<Item = &'a String>,
    {
        let mut removed = 0;
        for key in candidates {
            let still_expired = self
                .entries
                .get(key)
                .is_some_and(|entry| entry.is_expired_at(now));

            if still_expired {
                self.entries.remove(key);
                removed += 1;
            }
        }
        removed
    }

    // == Length ==
    /// Returns the number of resident entries, expired or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
