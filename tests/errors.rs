mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use common::{
    config, get, router, router_with, router_with_config, send, send_request, FailingStore,
};
use serde_json::json;
use std::sync::Arc;
use tutors_api::{Environment, TodoService};

#[tokio::test]
async fn unmatched_routes_are_not_found() {
    let app = router();
    let (status, err) = get(&app, "/nowhere").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        err,
        json!({ "status": 404, "code": "NOT_FOUND", "message": "Resource not found" })
    );
}

#[tokio::test]
async fn unsupported_methods_on_known_paths_are_not_found() {
    let app = router();
    for (method, uri) in [
        (Method::PATCH, "/todos/1"),
        (Method::DELETE, "/todos"),
        (Method::PATCH, "/subjects"),
        (Method::POST, "/health"),
    ] {
        let (status, err) = send(&app, method, uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(
            err,
            json!({ "status": 404, "code": "NOT_FOUND", "message": "Resource not found" })
        );
    }
}

fn small_limit_router() -> axum::Router {
    let mut config = config(Environment::Development);
    config.body_limit_bytes = 16;
    router_with_config(&config)
}

fn too_large() -> serde_json::Value {
    json!({
        "status": 413,
        "code": "PAYLOAD_TOO_LARGE",
        "message": "Request body too large"
    })
}

#[tokio::test]
async fn declared_oversized_body_is_payload_too_large() {
    let app = small_limit_router();
    let body = json!({ "title": "a title well past sixteen bytes" }).to_string();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/todos")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::CONTENT_LENGTH, body.len())
        .body(Body::from(body))
        .unwrap();
    let (status, err) = send_request(&app, request).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(err, too_large());
}

#[tokio::test]
async fn streamed_oversized_body_is_payload_too_large() {
    let app = small_limit_router();
    let chunks: Vec<Result<String, std::io::Error>> = vec![
        Ok(r#"{"title":"#.to_string()),
        Ok(r#""a title well past sixteen bytes"}"#.to_string()),
    ];
    let request = Request::builder()
        .method(Method::POST)
        .uri("/subjects")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from_stream(futures_util::stream::iter(chunks)))
        .unwrap();
    let (status, err) = send_request(&app, request).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(err, too_large());
}

#[tokio::test]
async fn malformed_json_is_a_parse_error() {
    let app = router();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/todos")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let (status, err) = send_request(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["code"], "PARSE_ERROR");
    assert_eq!(err["message"], "Invalid request format");
}

#[tokio::test]
async fn missing_content_type_is_a_parse_error() {
    let app = router();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/subjects")
        .body(Body::from(r#"{"name":"Maths"}"#))
        .unwrap();
    let (status, err) = send_request(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["code"], "PARSE_ERROR");
}

#[tokio::test]
async fn non_object_body_fails_validation() {
    let app = router();
    let (status, err) = send(&app, Method::POST, "/todos", Some(json!([1, 2]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["errors"], json!([{ "field": "/", "info": "Expected object" }]));
}

#[tokio::test]
async fn store_failures_expose_details_outside_production() {
    let app = router_with(
        Arc::new(FailingStore),
        TodoService::new(),
        Environment::Development,
    );
    let (status, err) = get(&app, "/subjects").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err["code"], "INTERNAL_SERVER_ERROR");
    assert!(err["message"].as_str().unwrap().contains("pool timed out"));
    assert!(err["stack"].is_string());
}

#[tokio::test]
async fn store_failures_are_redacted_in_production() {
    let app = router_with(Arc::new(FailingStore), TodoService::new(), Environment::Production);
    let uri = format!("/subjects/{}", uuid::Uuid::new_v4());
    let (status, err) = send(&app, Method::PUT, &uri, Some(json!({ "name": "x" }))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        err,
        json!({
            "status": 500,
            "code": "INTERNAL_SERVER_ERROR",
            "message": "Internal server error"
        })
    );
}

#[tokio::test]
async fn readiness_reflects_store() {
    let (status, body) = get(&router(), "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["store"], "ok");

    let app = router_with(Arc::new(FailingStore), TodoService::new(), Environment::Production);
    let (status, body) = get(&app, "/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");
}

#[tokio::test]
async fn common_routes_respond() {
    let app = router();
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));

    let (_, body) = get(&app, "/version").await;
    assert_eq!(body["name"], "tutors-api");

    let (status, _) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn seeded_list_starts_with_demo_item() {
    let app = router_with(
        Arc::new(tutors_api::MemorySubjectStore::new()),
        TodoService::seeded(),
        Environment::Development,
    );
    let (_, body) = get(&app, "/todos").await;
    assert_eq!(body["data"][0]["title"], "Buy groceries");
    assert_eq!(body["meta"]["totalItems"], 1);
}
