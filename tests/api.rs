//! In-process router tests: one `oneshot` request per assertion path.

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use bankdash::app::{AppState, router};
use bankdash::mock;
use bankdash::resource::{DASHBOARD_RESOURCES, ResourceKey};
use bankdash::store::SettingsStore;

const CACHE_CONTROL: &str = "public, s-maxage=60, stale-while-revalidate=30";
const BOUNDARY: &str = "bankdash-test-boundary";

/// Router backed by a temp directory; `seeded` controls whether the settings
/// file exists.
fn test_app(seeded: bool) -> (Router, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = SettingsStore::new(dir.path().join("database/settings.json"));
    if seeded {
        store.ensure_seeded().expect("seed");
    }
    let state = Arc::new(AppState::new(store, dir.path().join("uploads")));
    (router(state), dir)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let cache = response
        .headers()
        .get(header::CACHE_CONTROL)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, cache, serde_json::from_slice(&bytes).unwrap())
}

fn text_part(name: &str, value: &str) -> Vec<u8> {
    format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
    )
    .into_bytes()
}

fn file_part(filename: &str, content_type: &str, contents: &[u8]) -> Vec<u8> {
    let mut part = format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"avatar\"; filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
    )
    .into_bytes();
    part.extend_from_slice(contents);
    part.extend_from_slice(b"\r\n");
    part
}

fn multipart_request(parts: Vec<Vec<u8>>) -> Request<Body> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(&part);
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    Request::builder()
        .method("POST")
        .uri("/api/settings")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn every_dashboard_slice_is_served_with_cache_headers() {
    let (app, _dir) = test_app(true);
    for key in DASHBOARD_RESOURCES {
        let (status, cache, body) = get(app.clone(), &key.path()).await;
        assert_eq!(status, StatusCode::OK, "{}", key);
        assert_eq!(cache.as_deref(), Some(CACHE_CONTROL), "{}", key);
        assert_eq!(body, mock::dashboard_slice(key).unwrap(), "{}", key);
    }
}

#[tokio::test]
async fn settings_get_returns_the_seeded_profile() {
    let (app, _dir) = test_app(true);
    let (status, cache, body) = get(app, "/api/settings").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cache.as_deref(), Some(CACHE_CONTROL));
    assert_eq!(body["name"], "Charlene Reed");
    assert_eq!(body["postalCode"], "45962");
}

#[tokio::test]
async fn settings_get_without_a_data_source_is_404() {
    let (app, _dir) = test_app(false);
    let (status, _, body) = get(app, "/api/settings").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Settings data source not found");
}

#[tokio::test]
async fn put_echoes_field_validation() {
    let (app, _dir) = test_app(true);

    let request = Request::builder()
        .method("PUT")
        .uri("/api/settings")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"field":"email","value":"bad@"}"#))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["isValid"], false);
    assert_eq!(body["error"], "Invalid email format.");
    assert_eq!(body["field"], "email");

    let request = Request::builder()
        .method("PUT")
        .uri("/api/settings")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"field":"postalCode","value":"12345"}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["isValid"], true);
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn post_updates_fields_and_persists() {
    let (app, _dir) = test_app(true);

    let request = multipart_request(vec![
        text_part("city", "Lyon"),
        text_part("country", "France"),
    ]);
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["city"], "Lyon");
    assert_eq!(body["country"], "France");

    // A later GET sees the saved profile.
    let (_, _, reread) = get(app, "/api/settings").await;
    assert_eq!(reread["city"], "Lyon");
}

#[tokio::test]
async fn post_rejects_non_image_uploads() {
    let (app, _dir) = test_app(true);
    let request = multipart_request(vec![file_part("note.txt", "text/plain", b"hello")]);
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(
        body["error"].as_str().unwrap().contains("Invalid file type"),
        "unexpected error: {}",
        body["error"]
    );
}

#[tokio::test]
async fn post_rejects_oversized_uploads() {
    let (app, _dir) = test_app(true);
    let oversized = vec![0u8; 5 * 1024 * 1024 + 1];
    let request = multipart_request(vec![file_part("huge.png", "image/png", &oversized)]);
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "File too large. Maximum size is 5MB.");
}

#[tokio::test]
async fn post_stores_a_valid_avatar_and_serves_it() {
    let (app, dir) = test_app(true);
    let pixels = [0x89u8, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a];
    let request = multipart_request(vec![file_part("me.png", "image/png", &pixels)]);
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    let avatar = body["avatar"].as_str().unwrap();
    assert!(avatar.starts_with("/uploads/"));
    assert!(avatar.ends_with(".png"));
    let on_disk = dir
        .path()
        .join("uploads")
        .join(avatar.trim_start_matches("/uploads/"));
    assert_eq!(std::fs::read(on_disk).unwrap(), pixels);

    // The stored file is reachable through the static route.
    let served = app
        .oneshot(Request::builder().uri(avatar).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(served.status(), StatusCode::OK);
}

#[tokio::test]
async fn health_and_service_info_answer() {
    let (app, _dir) = test_app(true);
    let (status, _, body) = get(app.clone(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, _, body) = get(app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "bankdash");
    let endpoints = body["endpoints"].as_array().unwrap();
    assert!(endpoints.contains(&Value::String("/api/settings".to_string())));
    assert_eq!(endpoints.len(), 7);
}

#[tokio::test]
async fn unknown_routes_fall_through_to_404() {
    let (app, _dir) = test_app(true);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/no-such-slice")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn slice_bodies_match_resource_shapes() {
    let (app, _dir) = test_app(true);
    let (_, _, cards) = get(app.clone(), &ResourceKey::Cards.path()).await;
    assert_eq!(cards.as_array().unwrap().len(), 3);
    assert_eq!(cards[0]["cardHolder"], "Eddy Cusuma");

    let (_, _, history) = get(app, &ResourceKey::BalanceHistory.path()).await;
    assert_eq!(history.as_array().unwrap().len(), 12);
}
