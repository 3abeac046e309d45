//! Expiry Collector Task
//!
//! Background task that periodically removes expired cache entries.
//!
//! Each sweep runs in two phases so the exclusive lock is held only for the
//! removals: expired keys are collected under the shared lock, then removed
//! under the exclusive lock. Between the phases a writer may refresh a
//! candidate, so each one is re-checked before it is removed.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::{deadline_after, CacheStore, StatsRecorder};

/// Spawns the collector on `runtime`.
///
/// The task waits on a fixed interval and sweeps on every tick until
/// `true` is published on `shutdown` or the sender is dropped. A sweep in
/// progress always finishes before the stop signal is observed.
///
/// # Returns
/// A JoinHandle that completes once the collector has stopped.
pub fn spawn_collector<V>(
    runtime: &Handle,
    store: Arc<RwLock<CacheStore<V>>>,
    stats: Arc<StatsRecorder>,
    interval: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()>
where
    V: Send + Sync + 'static,
{
    runtime.spawn(async move {
        info!(
            "Starting expiry collector with interval of {:?}",
            interval
        );

        // First sweep one full interval after start
        let start = deadline_after(Instant::now(), interval);
        let mut ticker = interval_at(start, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let removed = sweep(&store, &stats).await;

                    if removed > 0 {
                        info!("Expiry sweep: removed {} expired entries", removed);
                    } else {
                        debug!("Expiry sweep: no expired entries found");
                    }
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }

        info!("Expiry collector stopped");
    })
}

/// Runs one two-phase sweep and returns the number of entries removed.
pub async fn sweep<V>(store: &RwLock<CacheStore<V>>, stats: &StatsRecorder) -> usize {
    let candidates = {
        let guard = store.read().await;
        guard.expired_keys(Instant::now())
    };

    let removed = if candidates.is_empty() {
        0
    } else {
        let mut guard = store.write().await;
        guard.remove_expired(&candidates, Instant::now())
    };

    stats.record_sweep(removed);
    removed
}
