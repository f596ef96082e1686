// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Error-to-status translation for the tutorial API.
//!
//! Two error kinds surface over HTTP: not-found (404) and internal (500).
//! Both render the same JSON body shape.

use axum::Json;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::Serialize;

use tutoria_core::error::TutorialError;

/// JSON body returned for handled failures.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorMessage {
    /// Numeric HTTP status code.
    pub status_code: u16,
    /// When the failure was handled.
    pub timestamp: DateTime<Utc>,
    /// Human-readable error message.
    pub message: String,
    /// The request that failed, as `uri=<path>`.
    pub description: String,
}

/// A request failure carrying its HTTP status and response body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    description: String,
}

impl ApiError {
    /// Map a domain error onto its HTTP status for the given request URI.
    pub fn from_domain(err: TutorialError, uri: &Uri) -> Self {
        let status = match err {
            TutorialError::NotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        Self {
            status,
            message: err.to_string(),
            description: format!("uri={}", uri.path()),
        }
    }

    /// The HTTP status this error renders with.
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorMessage {
            status_code: self.status.as_u16(),
            timestamp: Utc::now(),
            message: self.message,
            description: self.description,
        };

        (self.status, Json(body)).into_response()
    }
}
