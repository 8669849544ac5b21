//! Tests for routing

use super::*;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use magic_slash_config::ConfigStore;
use std::fs;
use tempfile::TempDir;
use tower::ServiceExt;

fn test_state(temp_dir: &TempDir) -> AppState {
    AppState::new(ConfigStore::new(temp_dir.path().join("config.json")))
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_health_route_is_registered() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let app = create_router(test_state(&temp_dir));

    let response = app
        .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_api_route_is_not_found() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let app = create_router(test_state(&temp_dir));

    let response = app
        .oneshot(Request::builder().uri("/api/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wrong_method_is_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let app = create_router(test_state(&temp_dir));

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/config")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_app_serves_index_from_public_dir() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let public_dir = temp_dir.path().join("public");
    fs::create_dir(&public_dir).unwrap();
    fs::write(public_dir.join("index.html"), "<h1>Magic Slash</h1>").unwrap();
    let app = create_app(test_state(&temp_dir), &public_dir);

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "<h1>Magic Slash</h1>");
}

#[tokio::test]
async fn test_app_still_routes_api_requests() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let public_dir = temp_dir.path().join("public");
    fs::create_dir(&public_dir).unwrap();
    let app = create_app(test_state(&temp_dir), &public_dir);

    let response = app
        .oneshot(Request::builder().uri("/api/config").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("\"version\""));
}
