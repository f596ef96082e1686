// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Persistence gateway for tutorial rows.
//!
//! This module defines the storage abstraction and the database backends
//! behind it. Every operation is a single statement against the `tutorials`
//! table; per-call atomicity comes from the database itself. There is no
//! pagination, no custom indexing, and no explicit transaction handling.

pub mod postgres;
pub mod sqlite;

pub use self::postgres::PostgresTutorialStore;
pub use self::sqlite::SqliteTutorialStore;

use async_trait::async_trait;

use crate::error::TutorialError;
use crate::model::{Tutorial, TutorialFields};

/// Storage gateway used by the service layer.
#[async_trait]
pub trait TutorialStore: Send + Sync {
    /// Fetch all tutorial rows, ordered by id.
    async fn find_all(&self) -> Result<Vec<Tutorial>, TutorialError>;

    /// Fetch rows whose title contains `fragment`.
    ///
    /// Matching uses SQL `LIKE`, so case sensitivity follows the backend's
    /// collation and `%`/`_` inside the fragment act as wildcards. Rows with
    /// a NULL title never match.
    async fn find_by_title_containing(
        &self,
        fragment: &str,
    ) -> Result<Vec<Tutorial>, TutorialError>;

    /// Fetch a single row by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Tutorial>, TutorialError>;

    /// Fetch rows whose published flag equals `published`, ordered by id.
    async fn find_by_published(&self, published: bool) -> Result<Vec<Tutorial>, TutorialError>;

    /// Insert or update, dispatching on id presence.
    ///
    /// With `None` a new row is inserted and returned with its generated id.
    /// With `Some(id)` the row's mutable fields are overwritten and the
    /// updated row returned; a missing id yields [`TutorialError::NotFound`]
    /// and writes nothing.
    async fn save(
        &self,
        id: Option<i64>,
        fields: &TutorialFields,
    ) -> Result<Tutorial, TutorialError>;

    /// Delete a row by id. Deleting an absent id is not an error.
    ///
    /// Returns the number of rows removed (0 or 1).
    async fn delete_by_id(&self, id: i64) -> Result<u64, TutorialError>;

    /// Delete every row. Returns the number of rows removed.
    async fn delete_all(&self) -> Result<u64, TutorialError>;

    /// Probe database connectivity.
    async fn health_check(&self) -> Result<bool, TutorialError>;
}
