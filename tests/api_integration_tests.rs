//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint.

use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use profile_cache::{api::create_router, AppState, ProfileCache};
use serde_json::Value;
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app() -> Router {
    create_app_with_ttl(Duration::from_secs(300))
}

fn create_app_with_ttl(ttl: Duration) -> Router {
    let cache = ProfileCache::new(ttl).unwrap();
    create_router(AppState::new(cache))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// == PUT /profiles ==

#[tokio::test]
async fn test_put_profile_success() {
    let app = create_test_app();

    let response = send(&app, "PUT", "/profiles", Some(r#"{"uuid":"u1","name":"Alice"}"#)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert!(json["message"].as_str().unwrap().contains("u1"));
    assert_eq!(json["ttl"].as_u64().unwrap(), 300);
}

#[tokio::test]
async fn test_put_profile_with_orders() {
    let app = create_test_app();

    let body = r#"{
        "uuid": "u1",
        "name": "Alice",
        "orders": [{
            "uuid": "o1",
            "value": {"sku": "A-1"},
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }]
    }"#;
    let response = send(&app, "PUT", "/profiles", Some(body)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, "GET", "/profiles/u1", None).await;
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["orders"][0]["value"]["sku"].as_str().unwrap(), "A-1");
}

// == GET /profiles/:uuid ==

#[tokio::test]
async fn test_get_profile_success() {
    let app = create_test_app();

    send(&app, "PUT", "/profiles", Some(r#"{"uuid":"u1","name":"Alice"}"#)).await;
    let response = send(&app, "GET", "/profiles/u1", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["uuid"].as_str().unwrap(), "u1");
    assert_eq!(json["name"].as_str().unwrap(), "Alice");
    assert!(json["orders"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_get_profile_not_found() {
    let app = create_test_app();

    let response = send(&app, "GET", "/profiles/nonexistent", None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_to_json(response.into_body()).await;
    assert!(json["error"].as_str().unwrap().contains("nonexistent"));
}

#[tokio::test]
async fn test_profile_overwrite() {
    let app = create_test_app();

    send(&app, "PUT", "/profiles", Some(r#"{"uuid":"u1","name":"Alice"}"#)).await;
    send(&app, "PUT", "/profiles", Some(r#"{"uuid":"u1","name":"Alicia"}"#)).await;

    let response = send(&app, "GET", "/profiles/u1", None).await;
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["name"].as_str().unwrap(), "Alicia");
}

// == Order Endpoints ==

#[tokio::test]
async fn test_put_order_adds_and_updates() {
    let app = create_test_app();
    send(&app, "PUT", "/profiles", Some(r#"{"uuid":"u1","name":"Alice"}"#)).await;

    let response = send(&app, "PUT", "/profiles/u1/orders", Some(r#"{"uuid":"o1","value":1}"#)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let first = body_to_json(response.into_body()).await;

    let response = send(&app, "PUT", "/profiles/u1/orders", Some(r#"{"uuid":"o1","value":2}"#)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let second = body_to_json(response.into_body()).await;

    let orders = second["orders"].as_array().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["value"].as_u64().unwrap(), 2);
    assert_eq!(orders[0]["created_at"], first["orders"][0]["created_at"]);
}

#[tokio::test]
async fn test_put_order_unknown_profile() {
    let app = create_test_app();

    let response = send(&app, "PUT", "/profiles/ghost/orders", Some(r#"{"uuid":"o1"}"#)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_order_success() {
    let app = create_test_app();
    send(&app, "PUT", "/profiles", Some(r#"{"uuid":"u1","name":"Alice"}"#)).await;
    send(&app, "PUT", "/profiles/u1/orders", Some(r#"{"uuid":"o1","value":1}"#)).await;

    let response = send(&app, "DELETE", "/profiles/u1/orders/o1", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, "GET", "/profiles/u1", None).await;
    let json = body_to_json(response.into_body()).await;
    assert!(json["orders"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_order_not_found() {
    let app = create_test_app();
    send(&app, "PUT", "/profiles", Some(r#"{"uuid":"u1","name":"Alice"}"#)).await;

    let response = send(&app, "DELETE", "/profiles/u1/orders/missing", None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// == STATS Endpoint Tests ==

#[tokio::test]
async fn test_stats_endpoint() {
    let app = create_test_app();

    send(&app, "PUT", "/profiles", Some(r#"{"uuid":"u1","name":"Alice"}"#)).await;
    send(&app, "GET", "/profiles/u1", None).await; // hit
    send(&app, "GET", "/profiles/nonexistent", None).await; // miss

    let response = send(&app, "GET", "/stats", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["hits"].as_u64().unwrap(), 1);
    assert_eq!(json["misses"].as_u64().unwrap(), 1);
    assert_eq!(json["total_entries"].as_u64().unwrap(), 1);
    assert!(json.get("hit_rate").is_some());
    assert!(json.get("expired_removed").is_some());
}

// == HEALTH Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let response = send(&app, "GET", "/health", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"].as_str().unwrap(), "healthy");
    assert!(json.get("timestamp").is_some());
}

// == Error Response Tests ==

#[tokio::test]
async fn test_invalid_json_request() {
    let app = create_test_app();

    let response = send(&app, "PUT", "/profiles", Some(r#"{"invalid json"#)).await;

    // Axum returns 400 or 422 for JSON parsing errors
    assert!(
        response.status() == StatusCode::BAD_REQUEST
            || response.status() == StatusCode::UNPROCESSABLE_ENTITY
    );
}

#[tokio::test]
async fn test_empty_uuid_request() {
    let app = create_test_app();

    let response = send(&app, "PUT", "/profiles", Some(r#"{"uuid":"","name":"Nobody"}"#)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert!(json.get("error").is_some());
}

// == TTL Expiration via API Tests ==

#[tokio::test(start_paused = true)]
async fn test_ttl_expiration_via_api() {
    let app = create_app_with_ttl(Duration::from_secs(1));

    let response = send(&app, "PUT", "/profiles", Some(r#"{"uuid":"u1","name":"Alice"}"#)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, "GET", "/profiles/u1", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    tokio::time::advance(Duration::from_millis(1100)).await;

    let response = send(&app, "GET", "/profiles/u1", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
