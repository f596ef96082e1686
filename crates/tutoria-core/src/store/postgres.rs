// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! PostgreSQL-backed tutorial store.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::error::TutorialError;
use crate::model::{Tutorial, TutorialFields};

use super::TutorialStore;

static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations/postgres");

/// PostgreSQL-backed tutorial store.
#[derive(Clone)]
pub struct PostgresTutorialStore {
    pool: PgPool,
}

impl PostgresTutorialStore {
    /// Create a store from an existing pool. Migrations must already have run.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to a `postgres:` URL and run all migrations.
    pub async fn connect(url: &str) -> Result<Self, TutorialError> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(url)
            .await
            .map_err(|e| TutorialError::Database {
                operation: "connect".to_string(),
                details: format!("Failed to connect to PostgreSQL: {}", e),
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
impl TutorialStore for PostgresTutorialStore {
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
            WHERE title LIKE '%' || $1 || '%'
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
            WHERE id = $1
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
            WHERE published = $1
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
                    VALUES ($1, $2, $3)
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
                    SET title = $2, description = $3, published = $4
                    WHERE id = $1
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
            WHERE id = $1
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
