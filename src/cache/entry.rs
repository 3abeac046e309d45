//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with an absolute expiry instant.

use std::time::Duration;

use tokio::time::Instant;

/// Fallback offset for durations so large that `now + duration` would overflow.
const FAR_FUTURE: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// Returns `now + after`, or a far-future instant if that would overflow.
pub(crate) fn deadline_after(now: Instant, after: Duration) -> Instant {
    now.checked_add(after).unwrap_or_else(|| now + FAR_FUTURE)
}

// == Cache Entry ==
/// A stored value together with the instant it stops being visible.
///
/// Uses the Tokio clock so paused-time tests drive expiry deterministically.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// First instant at which the entry counts as expired
    pub expire_at: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates an entry that expires `ttl` after `now`.
    pub fn new(value: V, ttl: Duration, now: Instant) -> Self {
        Self {
            value,
            expire_at: deadline_after(now, ttl),
        }
    }

    // == Is Expired ==
    /// Checks whether the entry is expired at `now`.
    ///
    /// Boundary condition: an entry whose `expire_at` equals `now` is already
    /// expired, so once the TTL has fully elapsed the entry is gone.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expire_at
    }

    /// Returns how long the entry stays visible after `now` (zero once expired).
    pub fn ttl_remaining_at(&self, now: Instant) -> Duration {
        self.expire_at.saturating_duration_since(now)
    }
}
