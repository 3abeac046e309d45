//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of a cache.
//!
//! # Tasks
//! - Expiry collector: removes expired cache entries at a fixed interval

mod collector;

pub use collector::{spawn_collector, sweep};
