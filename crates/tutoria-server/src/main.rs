// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Tutoria Server - Tutorial CRUD HTTP API
//!
//! Wires configuration, the store backend selected by the database URL
//! scheme, the service layer, and the axum router into one binary.

use std::sync::Arc;

use anyhow::Result;
use axum::http::HeaderValue;
use tracing::{error, info};

use tutoria_core::service::TutorialService;
use tutoria_core::store::{PostgresTutorialStore, SqliteTutorialStore, TutorialStore};

use tutoria_server::config::Config;
use tutoria_server::routes::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (from crate directory or parent directories)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tutoria_server=info".parse().unwrap()),
        )
        .init();

    info!("Starting Tutoria Server");

    // Load configuration
    let config = Config::from_env().map_err(|e| {
        error!("Configuration error: {}", e);
        e
    })?;

    info!(
        http_addr = %config.http_addr,
        cors_origin = %config.cors_origin,
        "Configuration loaded"
    );

    // Connect to the database; the URL scheme selects the backend
    info!("Connecting to database...");
    let store: Arc<dyn TutorialStore> = if config.database_url.starts_with("sqlite") {
        Arc::new(SqliteTutorialStore::from_url(&config.database_url).await?)
    } else {
        Arc::new(PostgresTutorialStore::connect(&config.database_url).await?)
    };

    // Verify connection
    if !store.health_check().await? {
        anyhow::bail!("database health check failed");
    }
    info!("Database connection established");

    let service = TutorialService::new(store);
    let cors_origin: HeaderValue = config.cors_origin.parse()?;
    let app = routes::router(AppState { service }, &cors_origin);

    let listener = tokio::net::TcpListener::bind(config.http_addr).await?;
    info!(addr = %config.http_addr, "Listening for HTTP connections");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
}
