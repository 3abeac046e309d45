//! Domain types and the request/response models for the profile cache API
//!
//! `profile` holds the cached values; `requests` and `responses` are the DTOs
//! used to serialize/deserialize HTTP bodies.

pub mod profile;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use profile::{Order, Profile};
pub use requests::{OrderRequest, ProfileRequest};
pub use responses::{DeleteResponse, ErrorResponse, HealthResponse, SetResponse, StatsResponse};
