//! API Routes
//!
//! Configures the Axum router with all profile cache endpoints.

use axum::{
    routing::{delete, get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    delete_order_handler, get_profile_handler, health_handler, put_order_handler,
    put_profile_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `PUT /profiles` - Store a profile
/// - `GET /profiles/:uuid` - Retrieve a cached profile
/// - `PUT /profiles/:uuid/orders` - Add or update an order
/// - `DELETE /profiles/:uuid/orders/:order_uuid` - Remove an order
/// - `GET /stats` - Get cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/profiles", put(put_profile_handler))
        .route("/profiles/:uuid", get(get_profile_handler))
        .route("/profiles/:uuid/orders", put(put_order_handler))
        .route(
            "/profiles/:uuid/orders/:order_uuid",
            delete(delete_order_handler),
        )
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
