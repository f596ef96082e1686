// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! In-process tests for the tutorial HTTP API.
//!
//! Each test builds the full router over a fresh SQLite database and drives
//! it with `tower::ServiceExt::oneshot`, asserting the status-code contract
//! and response bodies.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use tutoria_core::model::TutorialFields;
use tutoria_core::service::TutorialService;
use tutoria_core::store::SqliteTutorialStore;

use tutoria_server::routes::{self, AppState};

/// Router plus a service handle for seeding the database directly.
async fn test_app(dir: &TempDir) -> (Router, TutorialService) {
    let store = SqliteTutorialStore::from_path(dir.path().join("tutorials.db"))
        .await
        .expect("store should open");
    let service = TutorialService::new(Arc::new(store));

    let cors_origin = "http://localhost:8081".parse().unwrap();
    let app = routes::router(
        AppState {
            service: service.clone(),
        },
        &cors_origin,
    );

    (app, service)
}

fn fields(title: &str, description: &str, published: bool) -> TutorialFields {
    TutorialFields {
        title: Some(title.to_string()),
        description: Some(description.to_string()),
        published,
    }
}

/// Seed rows (Tut1, published), (Tut2, draft), (Tut3, published); returns ids.
async fn seed_three(service: &TutorialService) -> Vec<i64> {
    let mut ids = Vec::new();
    for (title, desc, published) in [
        ("Tut1 title", "Tut1 desc", true),
        ("Tut2 title", "Tut2 desc", false),
        ("Tut3 title", "Tut3 desc", true),
    ] {
        let row = service.create(&fields(title, desc, published)).await.unwrap();
        ids.push(row.id);
    }
    ids
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

async fn send_json(app: Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

#[tokio::test]
async fn test_list_returns_no_content_when_empty() {
    let dir = TempDir::new().unwrap();
    let (app, _service) = test_app(&dir).await;

    let (status, body) = get(app, "/api/tutorials").await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn test_create_tutorial() {
    let dir = TempDir::new().unwrap();
    let (app, service) = test_app(&dir).await;

    let (status, body) = send_json(
        app,
        "POST",
        "/api/tutorials",
        json!({"title": "Tut title", "description": "Tut desc", "published": true}),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].as_i64().unwrap() > 0);
    assert_eq!(body["title"], "Tut title");
    assert_eq!(body["description"], "Tut desc");
    assert_eq!(body["published"], true);

    assert_eq!(service.list(None).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_with_empty_body_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let (app, _service) = test_app(&dir).await;

    let (status, body) = send_json(app, "POST", "/api/tutorials", json!({})).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["title"].is_null());
    assert!(body["description"].is_null());
    assert_eq!(body["published"], false);
}

#[tokio::test]
async fn test_create_ignores_client_supplied_id() {
    let dir = TempDir::new().unwrap();
    let (app, _service) = test_app(&dir).await;

    let (status, body) = send_json(
        app,
        "POST",
        "/api/tutorials",
        json!({"id": 9999, "title": "Tut title"}),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_ne!(body["id"], 9999);
}

#[tokio::test]
async fn test_list_returns_all_tutorials() {
    let dir = TempDir::new().unwrap();
    let (app, service) = test_app(&dir).await;
    seed_three(&service).await;

    let (status, body) = get(app, "/api/tutorials").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_get_tutorial_by_id() {
    let dir = TempDir::new().unwrap();
    let (app, service) = test_app(&dir).await;
    let ids = seed_three(&service).await;

    let (status, body) = get(app, &format!("/api/tutorials/{}", ids[1])).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], ids[1]);
    assert_eq!(body["title"], "Tut2 title");
    assert_eq!(body["description"], "Tut2 desc");
    assert_eq!(body["published"], false);
}

#[tokio::test]
async fn test_get_unknown_id_is_not_found() {
    let dir = TempDir::new().unwrap();
    let (app, _service) = test_app(&dir).await;

    let (status, body) = get(app, "/api/tutorials/1").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["statusCode"], 404);
    assert_eq!(body["message"], "Tutorial not found with id: 1");
    assert_eq!(body["description"], "uri=/api/tutorials/1");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_list_filtered_by_title() {
    let dir = TempDir::new().unwrap();
    let (app, service) = test_app(&dir).await;
    seed_three(&service).await;

    // All three titles contain "title".
    let (status, body) = get(app.clone(), "/api/tutorials?title=title").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);

    let (status, body) = get(app.clone(), "/api/tutorials?title=Tut2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["title"], "Tut2 title");

    // No match at all falls back to 204.
    let (status, _body) = get(app, "/api/tutorials?title=no+such+title").await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_update_tutorial() {
    let dir = TempDir::new().unwrap();
    let (app, service) = test_app(&dir).await;
    let ids = seed_three(&service).await;

    let (status, body) = send_json(
        app,
        "PUT",
        &format!("/api/tutorials/{}", ids[1]),
        json!({"title": "X", "description": "Y", "published": true}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], ids[1]);
    assert_eq!(body["title"], "X");
    assert_eq!(body["description"], "Y");
    assert_eq!(body["published"], true);

    let stored = service.get_by_id(ids[1]).await.unwrap();
    assert_eq!(stored.title.as_deref(), Some("X"));
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let dir = TempDir::new().unwrap();
    let (app, service) = test_app(&dir).await;

    let (status, body) = send_json(
        app,
        "PUT",
        "/api/tutorials/42",
        json!({"title": "X", "description": "Y", "published": true}),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["statusCode"], 404);
    assert_eq!(body["message"], "Tutorial not found with id: 42");

    assert!(service.list(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_tutorial_by_id() {
    let dir = TempDir::new().unwrap();
    let (app, service) = test_app(&dir).await;
    let ids = seed_three(&service).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/tutorials/{}", ids[1]))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let remaining = service.list(None).await.unwrap();
    assert_eq!(remaining.len(), 2);
    assert!(remaining.iter().all(|t| t.id != ids[1]));

    // Deleting an absent id still answers 204.
    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/tutorials/{}", ids[1]))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_delete_all_tutorials() {
    let dir = TempDir::new().unwrap();
    let (app, service) = test_app(&dir).await;
    seed_three(&service).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/tutorials")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let (status, _body) = get(app, "/api/tutorials").await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_list_published() {
    let dir = TempDir::new().unwrap();
    let (app, service) = test_app(&dir).await;
    seed_three(&service).await;

    let (status, body) = get(app, "/api/tutorials/published").await;

    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|t| t["published"] == true));
}

#[tokio::test]
async fn test_list_published_empty_is_no_content() {
    let dir = TempDir::new().unwrap();
    let (app, service) = test_app(&dir).await;
    service
        .create(&fields("Tut2 title", "Tut2 desc", false))
        .await
        .unwrap();

    let (status, _body) = get(app, "/api/tutorials/published").await;

    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_healthz() {
    let dir = TempDir::new().unwrap();
    let (app, _service) = test_app(&dir).await;

    let response = app
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"ok");
}
