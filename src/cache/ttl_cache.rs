//! TTL Cache Handle
//!
//! Thread-safe front for a [`CacheStore`] plus the expiry collector that was
//! started with it.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex, RwLock};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::debug;

use crate::cache::{CacheStats, CacheStore, Keyed, StatsRecorder, DEFAULT_SWEEP_INTERVAL};
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};
use crate::tasks::{spawn_collector, sweep};

/// Owns the collector's stop signal. Dropping the last cache handle drops this
/// and tells the collector to stop.
#[derive(Debug)]
struct Lifecycle {
    shutdown_tx: watch::Sender<bool>,
    collector: Mutex<Option<JoinHandle<()>>>,
}

impl Drop for Lifecycle {
    fn drop(&mut self) {
        let _ = self.shutdown_tx.send(true);
    }
}

// == TTL Cache ==
/// In-memory cache where every entry lives for the same TTL after its last write.
///
/// Cloning is cheap and every clone shares the same map and collector. All
/// access goes through one `RwLock`: reads share it, writes and the delete
/// phase of a sweep take it exclusively.
///
/// `get` never evicts. An expired entry stays resident, invisible to readers,
/// until the collector's next sweep removes it.
///
/// # Example
/// ```ignore
/// let cache = TtlCache::new(Duration::from_secs(300))?;
/// cache.set_with_key("u1", "Alice".to_string()).await;
/// assert_eq!(cache.get("u1").await.as_deref(), Some("Alice"));
/// cache.close().await?;
/// ```
#[derive(Debug)]
pub struct TtlCache<V> {
    store: Arc<RwLock<CacheStore<V>>>,
    stats: Arc<StatsRecorder>,
    ttl: Duration,
    sweep_interval: Duration,
    lifecycle: Arc<Lifecycle>,
}

impl<V> Clone for TtlCache<V> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            stats: Arc::clone(&self.stats),
            ttl: self.ttl,
            sweep_interval: self.sweep_interval,
            lifecycle: Arc::clone(&self.lifecycle),
        }
    }
}

impl<V> TtlCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    // == Constructors ==
    /// Creates a cache with the given TTL and the default one-minute sweep interval.
    ///
    /// Must be called from within a Tokio runtime, which hosts the collector.
    pub fn new(ttl: Duration) -> Result<Self> {
        Self::with_sweep_interval(ttl, DEFAULT_SWEEP_INTERVAL)
    }

    /// Creates a cache from a [`CacheConfig`].
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        Self::with_sweep_interval(config.ttl, config.sweep_interval)
    }

    /// Creates a cache with explicit TTL and sweep interval and starts its collector.
    ///
    /// # Errors
    /// - [`CacheError::InvalidConfig`] if `sweep_interval` is zero
    /// - [`CacheError::NoRuntime`] if no Tokio runtime is running
    pub fn with_sweep_interval(ttl: Duration, sweep_interval: Duration) -> Result<Self> {
        CacheConfig::new(ttl)
            .with_sweep_interval(sweep_interval)
            .validate()?;
        let runtime = tokio::runtime::Handle::try_current().map_err(|_| CacheError::NoRuntime)?;

        let store = Arc::new(RwLock::new(CacheStore::new(ttl)));
        let stats = Arc::new(StatsRecorder::new());
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let collector = spawn_collector(
            &runtime,
            Arc::clone(&store),
            Arc::clone(&stats),
            sweep_interval,
            shutdown_rx,
        );

        Ok(Self {
            store,
            stats,
            ttl,
            sweep_interval,
            lifecycle: Arc::new(Lifecycle {
                shutdown_tx,
                collector: Mutex::new(Some(collector)),
            }),
        })
    }

    // == Get ==
    /// Returns a clone of the live value for `key`.
    ///
    /// `None` covers every kind of absence: never stored, expired, or already swept.
    pub async fn get(&self, key: &str) -> Option<V> {
        let value = {
            let store = self.store.read().await;
            store.get(key, Instant::now()).cloned()
        };

        match value {
            Some(_) => self.stats.record_hit(),
            None => self.stats.record_miss(),
        }
        value
    }

    // == Set ==
    /// Stores `value` under its own key, resetting that key's TTL.
    pub async fn set(&self, value: V)
    where
        V: Keyed,
    {
        let key = value.cache_key().to_owned();
        self.set_with_key(key, value).await;
    }

    /// Stores `value` under `key`, replacing any previous entry and resetting its TTL.
    pub async fn set_with_key(&self, key: impl Into<String>, value: V) {
        let mut store = self.store.write().await;
        store.set(key.into(), value, Instant::now());
    }

    /// Returns how long `key` stays visible, or `None` if it is absent or expired.
    pub async fn ttl_remaining(&self, key: &str) -> Option<Duration> {
        self.store.read().await.ttl_remaining(key, Instant::now())
    }

    // == Sweep Now ==
    /// Runs one collector sweep immediately and returns the number of entries removed.
    pub async fn sweep_now(&self) -> usize {
        sweep(&self.store, &self.stats).await
    }

    // == Close ==
    /// Stops the collector and waits for it to finish.
    ///
    /// A sweep that is already running completes before this returns. Calling
    /// `close` again, from this or any other handle, is a no-op. The cache stays
    /// readable and writable afterwards, but nothing reclaims expired entries.
    ///
    /// # Errors
    /// [`CacheError::CollectorFailed`] if the collector task panicked.
    pub async fn close(&self) -> Result<()> {
        let _ = self.lifecycle.shutdown_tx.send(true);

        // Held until the collector has exited, so a concurrent close waits too
        let mut collector = self.lifecycle.collector.lock().await;
        let Some(handle) = collector.as_mut() else {
            return Ok(());
        };

        let joined = handle.await;
        *collector = None;
        joined.map_err(|err| CacheError::CollectorFailed(err.to_string()))?;
        debug!("Expiry collector joined");
        Ok(())
    }
}

impl<V> TtlCache<V> {
    /// Returns the TTL applied to every write.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the time between collector sweeps.
    pub fn sweep_interval(&self) -> Duration {
        self.sweep_interval
    }

    // == Length ==
    /// Returns the number of resident entries, including expired ones not yet swept.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    /// Returns `true` while the collector task is alive.
    pub fn is_collector_running(&self) -> bool {
        !self.lifecycle.shutdown_tx.is_closed()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        let total_entries = self.len().await;
        self.stats.snapshot(total_entries)
    }
}
