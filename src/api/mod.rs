//! API Module
//!
//! HTTP handlers and routing for the profile cache REST API.
//!
//! # Endpoints
//! - `PUT /profiles` - Store a profile
//! - `GET /profiles/:uuid` - Retrieve a cached profile
//! - `PUT /profiles/:uuid/orders` - Add or update an order
//! - `DELETE /profiles/:uuid/orders/:order_uuid` - Remove an order
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
