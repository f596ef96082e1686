// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Configuration loading from environment variables.

use std::net::SocketAddr;

/// Tutoria server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL or SQLite connection URL
    pub database_url: String,
    /// HTTP listen address
    pub http_addr: SocketAddr,
    /// Origin allowed to make cross-origin requests
    pub cors_origin: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `TUTORIA_DATABASE_URL`: PostgreSQL or SQLite connection string;
    ///   the URL scheme selects the store backend
    ///
    /// Optional (with defaults):
    /// - `TUTORIA_HTTP_PORT`: HTTP listen port (default: 8080)
    /// - `TUTORIA_CORS_ORIGIN`: allowed cross-origin origin
    ///   (default: http://localhost:8081)
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("TUTORIA_DATABASE_URL")
            .map_err(|_| ConfigError::Missing("TUTORIA_DATABASE_URL"))?;

        let http_port: u16 = std::env::var("TUTORIA_HTTP_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| {
                ConfigError::Invalid("TUTORIA_HTTP_PORT", "must be a valid port number")
            })?;

        let cors_origin = std::env::var("TUTORIA_CORS_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:8081".to_string());

        Ok(Self {
            database_url,
            http_addr: SocketAddr::from(([0, 0, 0, 0], http_port)),
            cors_origin,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is missing.
    #[error("missing required environment variable: {0}")]
    Missing(&'static str),

    /// An environment variable has an invalid value.
    #[error("invalid value for {0}: {1}")]
    Invalid(&'static str, &'static str),
}
