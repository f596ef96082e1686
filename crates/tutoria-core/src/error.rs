// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Error types for tutoria-core.
//!
//! Provides a unified error type that the HTTP layer maps to status codes.

/// Result type using TutorialError
pub type Result<T> = std::result::Result<T, TutorialError>;

/// Domain errors from the store and service layers.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum TutorialError {
    /// No tutorial row exists for the requested id.
    #[error("Tutorial not found with id: {id}")]
    NotFound {
        /// The id that had no matching row.
        id: i64,
    },

    /// The underlying database failed an operation.
    #[error("Database error during '{operation}': {details}")]
    Database {
        /// The operation that failed.
        operation: String,
        /// Error details.
        details: String,
    },
}

impl From<sqlx::Error> for TutorialError {
    fn from(err: sqlx::Error) -> Self {
        TutorialError::Database {
            operation: "query".to_string(),
            details: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = TutorialError::NotFound { id: 42 };
        assert_eq!(err.to_string(), "Tutorial not found with id: 42");
    }

    #[test]
    fn test_database_display() {
        let err = TutorialError::Database {
            operation: "insert".to_string(),
            details: "connection refused".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Database error during 'insert': connection refused"
        );
    }

    #[test]
    fn test_sqlx_error_converts_to_database() {
        let err: TutorialError = sqlx::Error::RowNotFound.into();

        assert!(matches!(
            err,
            TutorialError::Database { ref operation, .. } if operation == "query"
        ));
    }
}
