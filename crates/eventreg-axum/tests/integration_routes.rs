//! Integration tests for the HTTP surface.
//!
//! Each test drives the full router over an in-memory database.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::json;
use tower::ServiceExt;

use common::{create_gala, get, post, test_app, test_app_with_cors};
use eventreg_axum::CorsConfig;

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let app = test_app().await;

    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("OK"));
}

#[tokio::test]
async fn created_person_is_listed_once_with_no_events() {
    let app = test_app().await;

    let (status, body) = post(&app, "/persons/Alice").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "name": "Alice", "events": [] }));

    let (status, body) = get(&app, "/persons").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{ "name": "Alice", "events": [] }]));
}

#[tokio::test]
async fn duplicate_person_is_a_conflict() {
    let app = test_app().await;
    post(&app, "/persons/Alice").await;

    let (status, body) = post(&app, "/persons/Alice").await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status"], 409);
}

#[tokio::test]
async fn blank_person_name_is_rejected() {
    let app = test_app().await;

    let (status, body) = post(&app, "/persons/%20%20").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("empty"));
}

#[tokio::test]
async fn created_event_is_fetched_by_name_with_exact_fields() {
    let app = test_app().await;
    create_gala(&app).await;

    let (status, body) = get(&app, "/events/Gala").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "name": "Gala",
            "date": "2024-05-01",
            "startTime": "18:00:00",
            "endTime": "22:00:00"
        })
    );
}

#[tokio::test]
async fn missing_event_is_not_found() {
    let app = test_app().await;

    let (status, body) = get(&app, "/events/Nothing").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "There is no such Event!");
}

#[tokio::test]
async fn malformed_event_times_are_rejected_before_creation() {
    let app = test_app().await;

    for uri in [
        "/events/Gala?date=2024-05-01&startTime=6pm&endTime=22:00",
        "/events/Gala?date=01-05-2024&startTime=18:00&endTime=22:00",
        "/events/Gala?date=2024-05-01&startTime=18:00",
    ] {
        let (status, _) = post(&app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
    }

    let (_, body) = get(&app, "/events").await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn event_ending_before_it_starts_is_rejected() {
    let app = test_app().await;

    let (status, _) = post(
        &app,
        "/events/Gala?date=2024-05-01&startTime=22:00&endTime=18:00",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn duplicate_query_key_is_a_json_bad_request() {
    let app = test_app().await;

    let (status, body) = post(
        &app,
        "/events/Gala?date=2024-05-01&date=2024-05-02&startTime=18:00&endTime=22:00",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert!(body["error"].as_str().unwrap().contains("duplicate"));

    let (status, body) = post(&app, "/register?person=Bob&person=Alice&event=Gala").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);

    let (_, events) = get(&app, "/events").await;
    assert_eq!(events, json!([]));
}

#[tokio::test]
async fn padded_names_resolve_to_the_trimmed_entity() {
    let app = test_app().await;

    let (status, body) = post(&app, "/persons/%20Bob").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Bob");
    create_gala(&app).await;

    let (status, body) = post(&app, "/register?person=%20Bob&event=Gala%20").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["person"]["name"], "Bob");

    let (status, body) = get(&app, "/registrations/person/%20Bob").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["name"], "Gala");

    let (status, _) = get(&app, "/events/%20Gala").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn registration_links_person_and_event() {
    let app = test_app().await;
    post(&app, "/persons/Bob").await;
    create_gala(&app).await;

    let (status, body) = post(&app, "/register?person=Bob&event=Gala").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["person"]["name"], "Bob");
    assert_eq!(body["event"]["name"], "Gala");
    assert_eq!(body["person"]["events"][0]["name"], "Gala");

    let (status, body) = get(&app, "/registrations/person/Bob").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "Gala");

    let (_, persons) = get(&app, "/persons").await;
    assert_eq!(persons[0]["events"][0]["name"], "Gala");
}

#[tokio::test]
async fn registration_with_unknown_side_is_not_found() {
    let app = test_app().await;
    post(&app, "/persons/Bob").await;
    create_gala(&app).await;

    let (status, _) = post(&app, "/register?person=Ghost&event=Gala").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = post(&app, "/register?person=Bob&event=Nowhere").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = post(&app, "/register?person=Bob").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn duplicate_registration_is_a_conflict() {
    let app = test_app().await;
    post(&app, "/persons/Bob").await;
    create_gala(&app).await;
    post(&app, "/register?person=Bob&event=Gala").await;

    let (status, _) = post(&app, "/register?person=Bob&event=Gala").await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, body) = get(&app, "/registrations/person/Bob").await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn events_of_unknown_person_is_empty_list() {
    let app = test_app().await;

    let (status, body) = get(&app, "/registrations/person/Nobody").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn listings_are_stable_without_writes() {
    let app = test_app().await;
    for name in ["Carol", "Alice", "Bob"] {
        post(&app, &format!("/persons/{name}")).await;
    }
    create_gala(&app).await;
    post(
        &app,
        "/events/Brunch?date=2024-05-02&startTime=10:00&endTime=12:00",
    )
    .await;

    let (_, persons_first) = get(&app, "/persons").await;
    let (_, persons_second) = get(&app, "/persons").await;
    assert_eq!(persons_first, persons_second);
    assert_eq!(persons_first[0]["name"], "Carol");

    let (_, events_first) = get(&app, "/events").await;
    let (_, events_second) = get(&app, "/events").await;
    assert_eq!(events_first, events_second);
    assert_eq!(events_first[1]["name"], "Brunch");
}

#[tokio::test]
async fn trailing_slash_routes_match() {
    let app = test_app().await;

    let (status, _) = post(&app, "/persons/Alice/").await;
    assert_eq!(status, StatusCode::OK);
    create_gala(&app).await;

    for uri in [
        "/persons/",
        "/events/",
        "/events/Gala/",
        "/registrations/person/Alice/",
    ] {
        let (status, _) = get(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
    }

    let (status, _) = post(&app, "/register/?person=Alice&event=Gala").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn cors_preflight_allows_any_origin() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/persons")
                .header(header::ORIGIN, "http://example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn cors_allow_list_rejects_other_origins() {
    let app = test_app_with_cors(&CorsConfig::AllowOrigins(vec![
        "http://localhost:3000".to_string(),
    ]))
    .await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/events")
                .header(header::ORIGIN, "http://evil.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}
