// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! SQLite-backed tutorial store.

use std::path::Path;

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use crate::error::TutorialError;
use crate::model::{Tutorial, TutorialFields};

use super::TutorialStore;

static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations/sqlite");

/// SQLite-backed tutorial store.
#[derive(Clone)]
pub struct SqliteTutorialStore {
    pool: SqlitePool,
}

impl SqliteTutorialStore {
    /// Create a store from an existing pool. Migrations must already have run.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create and initialize a store from a database file path.
    ///
    /// This convenience constructor handles all setup:
    /// - Creates parent directories if they don't exist
    /// - Creates the database file if it doesn't exist
    /// - Connects to the database with sensible defaults
    /// - Runs all migrations
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, TutorialError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| TutorialError::Database {
                operation: "create_dir".to_string(),
                details: format!("Failed to create directory {:?}: {}", parent, e),
            })?;
        }

        let url = format!("sqlite:{}?mode=rwc", path.to_string_lossy());
        Self::from_url(&url).await
    }

    /// Create and initialize a store from a `sqlite:` connection URL.
    pub async fn from_url(url: &str) -> Result<Self, TutorialError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(url)
            .await
            .map_err(|e| TutorialError::Database {
                operation: "connect".to_string(),
                details: format!("Failed to connect to SQLite at {}: {}", url, e),
            })?;

        MIGRATOR
            .run(&pool)
            .await
            .map_err(|e| TutorialError::Database {
                operation: "migrate".to_string(),
                details: format!("Failed to run migrations: {}", e),
            })?;

        Ok(Self { pool })
    }
}

#[async_trait::async_trait]
impl TutorialStore for SqliteTutorialStore {
    async fn find_all(&self) -> Result<Vec<Tutorial>, TutorialError> {
        let rows = sqlx::query_as::<_, Tutorial>(
            r#"
            SELECT id, title, description, published
            FROM tutorials
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn find_by_title_containing(
        &self,
        fragment: &str,
    ) -> Result<Vec<Tutorial>, TutorialError> {
        let rows = sqlx::query_as::<_, Tutorial>(
            r#"
            SELECT id, title, description, published
            FROM tutorials
            WHERE title LIKE '%' || ?1 || '%'
            ORDER BY id
            "#,
        )
        .bind(fragment)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Tutorial>, TutorialError> {
        let row = sqlx::query_as::<_, Tutorial>(
            r#"
            SELECT id, title, description, published
            FROM tutorials
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn find_by_published(&self, published: bool) -> Result<Vec<Tutorial>, TutorialError> {
        let rows = sqlx::query_as::<_, Tutorial>(
            r#"
            SELECT id, title, description, published
            FROM tutorials
            WHERE published = ?1
            ORDER BY id
            "#,
        )
        .bind(published)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn save(
        &self,
        id: Option<i64>,
        fields: &TutorialFields,
    ) -> Result<Tutorial, TutorialError> {
        match id {
            None => {
                let row = sqlx::query_as::<_, Tutorial>(
                    r#"
                    INSERT INTO tutorials (title, description, published)
                    VALUES (?1, ?2, ?3)
                    RETURNING id, title, description, published
                    "#,
                )
                .bind(&fields.title)
                .bind(&fields.description)
                .bind(fields.published)
                .fetch_one(&self.pool)
                .await?;

                Ok(row)
            }
            Some(id) => {
                let row = sqlx::query_as::<_, Tutorial>(
                    r#"
                    UPDATE tutorials
                    SET title = ?2, description = ?3, published = ?4
                    WHERE id = ?1
                    RETURNING id, title, description, published
                    "#,
                )
                .bind(id)
                .bind(&fields.title)
                .bind(&fields.description)
                .bind(fields.published)
                .fetch_optional(&self.pool)
                .await?;

                row.ok_or(TutorialError::NotFound { id })
            }
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, TutorialError> {
        let result = sqlx::query(
            r#"
            DELETE FROM tutorials
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete_all(&self) -> Result<u64, TutorialError> {
        let result = sqlx::query("DELETE FROM tutorials")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn health_check(&self) -> Result<bool, TutorialError> {
        let row: (i32,) = sqlx::query_as("SELECT 1").fetch_one(&self.pool).await?;

        Ok(row.0 == 1)
    }
}
