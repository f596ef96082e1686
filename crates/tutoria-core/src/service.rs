// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Tutorial use cases on top of the persistence gateway.
//!
//! Thin by design: each method is at most one conditional and one store
//! call. Not-found is always signalled with [`TutorialError::NotFound`],
//! never with an empty success.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::error::TutorialError;
use crate::model::{Tutorial, TutorialFields};
use crate::store::TutorialStore;

/// Use-case layer for tutorial operations.
#[derive(Clone)]
pub struct TutorialService {
    store: Arc<dyn TutorialStore>,
}

impl TutorialService {
    /// Create a service over the given store.
    pub fn new(store: Arc<dyn TutorialStore>) -> Self {
        Self { store }
    }

    /// List all tutorials, or only those whose title contains `title`.
    pub async fn list(&self, title: Option<&str>) -> Result<Vec<Tutorial>, TutorialError> {
        match title {
            None => self.store.find_all().await,
            Some(fragment) => self.store.find_by_title_containing(fragment).await,
        }
    }

    /// Fetch one tutorial by id, or [`TutorialError::NotFound`].
    pub async fn get_by_id(&self, id: i64) -> Result<Tutorial, TutorialError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(TutorialError::NotFound { id })
    }

    /// Store a new tutorial and return it with its generated id.
    ///
    /// Any id supplied by the client is ignored.
    #[instrument(skip(self, fields))]
    pub async fn create(&self, fields: &TutorialFields) -> Result<Tutorial, TutorialError> {
        let tutorial = self.store.save(None, fields).await?;
        debug!(id = tutorial.id, "Tutorial created");

        Ok(tutorial)
    }

    /// Overwrite the mutable fields of an existing tutorial.
    ///
    /// The id is preserved. A missing id errors before any write happens.
    #[instrument(skip(self, fields))]
    pub async fn update(&self, id: i64, fields: &TutorialFields) -> Result<Tutorial, TutorialError> {
        if self.store.find_by_id(id).await?.is_none() {
            return Err(TutorialError::NotFound { id });
        }

        self.store.save(Some(id), fields).await
    }

    /// Delete one tutorial. Deleting an absent id succeeds.
    pub async fn delete_by_id(&self, id: i64) -> Result<(), TutorialError> {
        self.store.delete_by_id(id).await?;

        Ok(())
    }

    /// Delete every tutorial.
    #[instrument(skip(self))]
    pub async fn delete_all(&self) -> Result<(), TutorialError> {
        let removed = self.store.delete_all().await?;
        debug!(removed, "All tutorials deleted");

        Ok(())
    }

    /// List tutorials whose published flag is set.
    pub async fn list_published(&self) -> Result<Vec<Tutorial>, TutorialError> {
        self.store.find_by_published(true).await
    }

    /// Probe the underlying store's connectivity.
    pub async fn health_check(&self) -> Result<bool, TutorialError> {
        self.store.health_check().await
    }
}
