//! API integration tests

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use frontdesk_server::{
    api,
    clock::FixedClock,
    config::{AppConfig, StorageConfig},
    repository::Repository,
    services::Services,
    AppState,
};

const FRONT: &str = "data:image/jpeg;base64,/9j/4AAQSkZJRgABAQ==";
const BACK: &str = "/9j/4AAQSkZJRgABAg==";

/// Helper to build the router over a fresh data directory
async fn setup_app() -> (TempDir, Router) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = AppConfig {
        storage: StorageConfig {
            data_dir: dir.path().join("data"),
            photos_dir: dir.path().join("data/photos"),
            photos_url: "photos".to_string(),
        },
        ..Default::default()
    };

    let repository = Repository::open(&config.storage)
        .await
        .expect("Failed to open repository");
    let clock = FixedClock(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    let services = Services::new(repository, Arc::new(clock));

    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };
    (dir, api::create_router(state))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .expect("Failed to send request");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

fn visitor_body(name: &str) -> Value {
    json!({
        "serialNumber": "0500",
        "idNumber": "784-1234-1234567-1",
        "name": name,
        "company": "Acme",
        "phone": "0501234567",
        "purpose": "Meeting",
        "date": "2001-01-01",
        "timeIn": "09:00",
        "frontPhoto": FRONT,
        "backPhoto": BACK
    })
}

fn key_body(tag: &str) -> Value {
    json!({
        "idNumber": "784-1234-1234567-1",
        "name": "Sam",
        "keyTagName": tag,
        "timeTaken": "08:00",
        "securityRemarks": "Ok",
        "frontPhoto": FRONT,
        "backPhoto": BACK
    })
}

#[tokio::test]
async fn test_health_check() {
    let (_dir, app) = setup_app().await;

    let (status, body) = send(&app, Method::GET, "/api/v1/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(&app, Method::GET, "/api/v1/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_create_visitor() {
    let (_dir, app) = setup_app().await;

    let (status, body) = send(&app, Method::POST, "/api/v1/visitors", Some(visitor_body("Jane"))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["serialNumber"], "0001");
    assert_eq!(body["date"], "2024-02-29");
    assert_eq!(body["frontPhoto"], "photos/0001_front.jpg");
    assert_eq!(body["backPhoto"], "photos/0001_back.jpg");
    assert!(body.get("timeOut").is_none());
}

#[tokio::test]
async fn test_create_visitor_validation() {
    let (_dir, app) = setup_app().await;

    let mut missing = visitor_body("Jane");
    missing["company"] = json!("");
    missing.as_object_mut().unwrap().remove("phone");
    let (status, body) = send(&app, Method::POST, "/api/v1/visitors", Some(missing)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("company"));
    assert!(message.contains("phone"));

    let mut bad_id = visitor_body("Jane");
    bad_id["idNumber"] = json!("123-4567-8901234-5");
    let (status, body) = send(&app, Method::POST, "/api/v1/visitors", Some(bad_id)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");

    let (_, list) = send(&app, Method::GET, "/api/v1/visitors", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_uploaded_photo_is_served() {
    let (_dir, app) = setup_app().await;
    send(&app, Method::POST, "/api/v1/visitors", Some(visitor_body("Jane"))).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/photos/0001_back.jpg")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..4], &[0xff, 0xd8, 0xff, 0xe0]);
}

#[tokio::test]
async fn test_timeout_visitor() {
    let (_dir, app) = setup_app().await;
    send(&app, Method::POST, "/api/v1/visitors", Some(visitor_body("Jane"))).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/v1/visitors/0001/timeout",
        Some(json!({ "timeOut": "17:00" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["timeOut"], "17:00");
    assert_eq!(body["timeIn"], "09:00");
    assert_eq!(body["frontPhoto"], "photos/0001_front.jpg");

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/v1/visitors/0009/timeout",
        Some(json!({ "timeOut": "17:00" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_body_is_bad_value() {
    let (_dir, app) = setup_app().await;
    send(&app, Method::POST, "/api/v1/visitors", Some(visitor_body("Jane"))).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/v1/visitors/0001/timeout",
        Some(json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
    assert_eq!(body["code"], 18);

    let (status, body) =
        send(&app, Method::POST, "/api/v1/visitors", Some(json!({ "name": 5 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/v1/keys/0001/return",
        Some(json!({ "timeReturned": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");

    let (_, body) = send(&app, Method::GET, "/api/v1/visitors/0001", None).await;
    assert!(body.get("timeOut").map_or(true, Value::is_null));
}

#[tokio::test]
async fn test_delete_visitor_renumbers() {
    let (dir, app) = setup_app().await;
    for name in ["Ann", "Bob", "Cid"] {
        send(&app, Method::POST, "/api/v1/visitors", Some(visitor_body(name))).await;
    }

    let (status, body) = send(&app, Method::DELETE, "/api/v1/visitors/0002", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "remainingCount": 2 }));

    let (_, list) = send(&app, Method::GET, "/api/v1/visitors", None).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["name"], "Ann");
    assert_eq!(list[1]["name"], "Cid");
    assert_eq!(list[1]["serialNumber"], "0002");
    assert_eq!(list[1]["backPhoto"], "photos/0002_back.jpg");

    let photos = dir.path().join("data/photos");
    assert!(photos.join("0002_front.jpg").exists());
    assert!(!photos.join("0003_front.jpg").exists());

    let (status, body) = send(&app, Method::GET, "/api/v1/visitors/0003", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchRecord");

    let (status, _) = send(&app, Method::DELETE, "/api/v1/visitors/0003", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_key_lifecycle_and_stats() {
    let (_dir, app) = setup_app().await;
    send(&app, Method::POST, "/api/v1/visitors", Some(visitor_body("Jane"))).await;
    for tag in ["Lab", "Roof"] {
        let (status, body) = send(&app, Method::POST, "/api/v1/keys", Some(key_body(tag))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert!(body["frontPhoto"].as_str().unwrap().starts_with("photos/key_"));
    }

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/v1/keys/0001/return",
        Some(json!({ "timeReturned": "12:00" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["timeReturned"], "12:00");

    let (status, stats) = send(&app, Method::GET, "/api/v1/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["totalVisitors"], 1);
    assert_eq!(stats["activeVisitors"], 1);
    assert_eq!(stats["totalKeys"], 2);
    assert_eq!(stats["activeKeys"], 1);

    let (status, body) = send(&app, Method::DELETE, "/api/v1/keys/0001", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["remainingCount"], 1);

    let (_, key) = send(&app, Method::GET, "/api/v1/keys/0001", None).await;
    assert_eq!(key["keyTagName"], "Roof");
    assert_eq!(key["frontPhoto"], "photos/key_0001_front.jpg");
}

#[tokio::test]
async fn test_openapi_document() {
    let (_dir, app) = setup_app().await;

    let (status, doc) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/visitors"].is_object());
    assert!(doc["paths"]["/keys/{serial}/return"].is_object());
}
