// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Tutorial record and request payload types.

use serde::{Deserialize, Serialize};

/// A stored tutorial row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Tutorial {
    /// Surrogate key, assigned by the database at insert and immutable after.
    pub id: i64,
    /// Tutorial title.
    pub title: Option<String>,
    /// Tutorial description.
    pub description: Option<String>,
    /// Whether the tutorial is published.
    pub published: bool,
}

/// Mutable tutorial fields carried by create and update requests.
///
/// Ids are assigned by the database, so any `id` present in a request body is
/// ignored. Absent fields deserialize to their defaults; no shape validation
/// happens at this layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorialFields {
    /// Tutorial title.
    #[serde(default)]
    pub title: Option<String>,
    /// Tutorial description.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the tutorial is published. False when unset.
    #[serde(default)]
    pub published: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_deserialize_with_defaults() {
        let fields: TutorialFields = serde_json::from_str("{}").unwrap();

        assert_eq!(fields.title, None);
        assert_eq!(fields.description, None);
        assert!(!fields.published);
    }

    #[test]
    fn test_fields_ignore_client_supplied_id() {
        let fields: TutorialFields =
            serde_json::from_str(r#"{"id": 99, "title": "Tut title", "published": true}"#).unwrap();

        assert_eq!(fields.title.as_deref(), Some("Tut title"));
        assert!(fields.published);
    }

    #[test]
    fn test_tutorial_serializes_all_fields() {
        let tutorial = Tutorial {
            id: 7,
            title: Some("Tut title".to_string()),
            description: None,
            published: false,
        };

        let value = serde_json::to_value(&tutorial).unwrap();

        assert_eq!(value["id"], 7);
        assert_eq!(value["title"], "Tut title");
        assert!(value["description"].is_null());
        assert_eq!(value["published"], false);
    }
}
