//! Configuration Module
//!
//! Handles loading the cache and server configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::cache::DEFAULT_SWEEP_INTERVAL;
use crate::error::{CacheError, Result};

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// TTL in seconds applied to every stored profile
    pub cache_ttl: u64,
    /// Interval in seconds between expiry collector sweeps
    pub sweep_interval: u64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL` - Profile TTL in seconds (default: 300)
    /// - `SWEEP_INTERVAL` - Collector frequency in seconds (default: 60)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from a variable lookup. Missing or unparsable values
    /// fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            cache_ttl: parse_or(lookup("CACHE_TTL"), defaults.cache_ttl),
            sweep_interval: parse_or(lookup("SWEEP_INTERVAL"), defaults.sweep_interval),
            server_port: parse_or(lookup("SERVER_PORT"), defaults.server_port),
        }
    }

    /// Returns the cache portion of the configuration.
    pub fn cache(&self) -> CacheConfig {
        CacheConfig::new(Duration::from_secs(self.cache_ttl))
            .with_sweep_interval(Duration::from_secs(self.sweep_interval))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl: 300,
            sweep_interval: DEFAULT_SWEEP_INTERVAL.as_secs(),
            server_port: 3000,
        }
    }
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

// == Cache Config ==
/// Settings for a single [`TtlCache`](crate::cache::TtlCache).
///
/// TTL and sweep interval are independent: the TTL decides when an entry stops
/// being visible, the sweep interval decides how long it may stay resident after that.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Lifetime of every entry, measured from its last `set`
    pub ttl: Duration,
    /// Time between collector sweeps
    pub sweep_interval: Duration,
}

impl CacheConfig {
    /// Creates a config with the given TTL and the default one-minute sweep interval.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            sweep_interval: DEFAULT_SWEEP_INTERVAL,
        }
    }

    /// Sets the sweep interval.
    pub fn with_sweep_interval(mut self, interval: Duration) -> Self {
        self.sweep_interval = interval;
        self
    }

    /// Checks that the collector can run with these settings.
    ///
    /// A zero TTL is accepted (every entry is born expired); a zero sweep
    /// interval is not, since the collector would never yield.
    pub fn validate(&self) -> Result<()> {
        if self.sweep_interval.is_zero() {
            return Err(CacheError::InvalidConfig(
                "sweep interval must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
