// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Route table and request handlers.
//!
//! Routes are registered explicitly; every handler is one service call plus
//! status-code translation. Each request is stateless and independent.

use axum::extract::{Path, Query, State};
use axum::http::{HeaderValue, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use tutoria_core::model::{Tutorial, TutorialFields};
use tutoria_core::service::TutorialService;

use crate::error::ApiError;

/// Shared state for request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Tutorial use cases.
    pub service: TutorialService,
}

/// Build the application router.
///
/// Cross-origin requests are admitted from the single `cors_origin` only.
pub fn router(state: AppState, cors_origin: &HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(cors_origin.clone())
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route(
            "/api/tutorials",
            get(list_tutorials)
                .post(create_tutorial)
                .delete(delete_all_tutorials),
        )
        .route("/api/tutorials/published", get(list_published))
        .route(
            "/api/tutorials/{id}",
            get(get_tutorial)
                .put(update_tutorial)
                .delete(delete_tutorial),
        )
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct ListParams {
    title: Option<String>,
}

/// Empty listings become 204 No Content, never an error.
fn list_response(tutorials: Vec<Tutorial>) -> Response {
    if tutorials.is_empty() {
        StatusCode::NO_CONTENT.into_response()
    } else {
        Json(tutorials).into_response()
    }
}

async fn list_tutorials(
    State(state): State<AppState>,
    uri: Uri,
    Query(params): Query<ListParams>,
) -> Result<Response, ApiError> {
    let tutorials = state
        .service
        .list(params.title.as_deref())
        .await
        .map_err(|e| ApiError::from_domain(e, &uri))?;

    Ok(list_response(tutorials))
}

async fn get_tutorial(
    State(state): State<AppState>,
    uri: Uri,
    Path(id): Path<i64>,
) -> Result<Json<Tutorial>, ApiError> {
    let tutorial = state
        .service
        .get_by_id(id)
        .await
        .map_err(|e| ApiError::from_domain(e, &uri))?;

    Ok(Json(tutorial))
}

async fn create_tutorial(
    State(state): State<AppState>,
    uri: Uri,
    Json(fields): Json<TutorialFields>,
) -> Result<(StatusCode, Json<Tutorial>), ApiError> {
    let tutorial = state
        .service
        .create(&fields)
        .await
        .map_err(|e| ApiError::from_domain(e, &uri))?;

    Ok((StatusCode::CREATED, Json(tutorial)))
}

async fn update_tutorial(
    State(state): State<AppState>,
    uri: Uri,
    Path(id): Path<i64>,
    Json(fields): Json<TutorialFields>,
) -> Result<Json<Tutorial>, ApiError> {
    let tutorial = state
        .service
        .update(id, &fields)
        .await
        .map_err(|e| ApiError::from_domain(e, &uri))?;

    Ok(Json(tutorial))
}

async fn delete_tutorial(
    State(state): State<AppState>,
    uri: Uri,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state
        .service
        .delete_by_id(id)
        .await
        .map_err(|e| ApiError::from_domain(e, &uri))?;

    Ok(StatusCode::NO_CONTENT)
}

async fn delete_all_tutorials(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<StatusCode, ApiError> {
    state
        .service
        .delete_all()
        .await
        .map_err(|e| ApiError::from_domain(e, &uri))?;

    Ok(StatusCode::NO_CONTENT)
}

async fn list_published(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Response, ApiError> {
    let tutorials = state
        .service
        .list_published()
        .await
        .map_err(|e| ApiError::from_domain(e, &uri))?;

    Ok(list_response(tutorials))
}

async fn healthz(State(state): State<AppState>) -> Response {
    match state.service.health_check().await {
        Ok(true) => (StatusCode::OK, "ok").into_response(),
        _ => (StatusCode::SERVICE_UNAVAILABLE, "unavailable").into_response(),
    }
}
