//! Shared helpers for router integration tests.

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use eventreg_axum::{AxumContext, CorsConfig, create_router};
use eventreg_db::{CoreFactory, setup_test_database};

/// Router over a fresh in-memory database.
pub async fn test_app() -> Router {
    test_app_with_cors(&CorsConfig::AllowAll).await
}

pub async fn test_app_with_cors(cors: &CorsConfig) -> Router {
    let pool = setup_test_database().await.expect("in-memory database");
    let ctx = AxumContext::new(CoreFactory::build_service(pool));
    create_router(ctx, cors)
}

/// Send a body-less request and decode the JSON response.
///
/// Non-JSON bodies come back as a JSON string.
pub async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, body)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri).await
}

pub async fn post(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::POST, uri).await
}

/// Create the "Gala" event used across tests.
pub async fn create_gala(app: &Router) {
    let (status, _) = post(
        app,
        "/events/Gala?date=2024-05-01&startTime=18:00&endTime=22:00",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}
