// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Tutoria Server - Tutorial CRUD HTTP API
//!
//! Maps the tutorial use cases in `tutoria-core` onto a REST surface:
//!
//! | Method | Path | Success | Failure |
//! |--------|------|---------|---------|
//! | GET | `/api/tutorials?title=` | 200 + array, 204 if empty | 500 |
//! | GET | `/api/tutorials/{id}` | 200 + object | 404 if absent |
//! | POST | `/api/tutorials` | 201 + created object | 500 |
//! | PUT | `/api/tutorials/{id}` | 200 + updated object | 404 if absent |
//! | DELETE | `/api/tutorials/{id}` | 204 | 500 |
//! | DELETE | `/api/tutorials` | 204 | 500 |
//! | GET | `/api/tutorials/published` | 200 + array, 204 if empty | 500 |
//! | GET | `/healthz` | 200 | 503 if the store probe fails |
//!
//! Handled failures carry a JSON body with `statusCode`, `timestamp`,
//! `message` and `description` fields. Cross-origin requests are accepted
//! from a single configured origin.
//!
//! # Configuration
//!
//! Configuration is loaded from environment variables:
//!
//! | Variable | Required | Default | Description |
//! |----------|----------|---------|-------------|
//! | `TUTORIA_DATABASE_URL` | Yes | - | PostgreSQL or SQLite connection string |
//! | `TUTORIA_HTTP_PORT` | No | `8080` | HTTP listen port |
//! | `TUTORIA_CORS_ORIGIN` | No | `http://localhost:8081` | Allowed cross-origin origin |

#![deny(missing_docs)]

/// Server configuration loaded from environment variables.
pub mod config;

/// Error-to-status translation and the JSON error body.
pub mod error;

/// Route table and request handlers.
pub mod routes;
