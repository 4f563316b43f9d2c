//! Common types shared by several resources.
//!
//! These types are not resources themselves (they don't implement
//! `RestResource`). They are embedded in entities, inputs and filters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Creation and modification metadata carried by every entity.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Audit {
    /// When the entity was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Id of the user who created the entity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    /// When the entity was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// Id of the user who last updated the entity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
}

/// The value of one custom field.
///
/// `value` is a string, number, boolean, list or null depending on the
/// field's type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomFieldValue {
    /// The custom field definition id.
    pub field_id: String,
    /// The stored value.
    pub value: serde_json::Value,
}

/// Account health indicator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Health {
    /// At risk.
    Red,
    /// Needs attention.
    Yellow,
    /// On track.
    Green,
}

/// A filter value that accepts either one value or a list.
///
/// A list encodes as the key repeated once per element.
///
/// # Example
///
/// ```rust
/// use rocketlane_api::rest::resources::{OneOrMany, TaskPriority};
///
/// let one: OneOrMany<TaskPriority> = TaskPriority::High.into();
/// let many: OneOrMany<TaskPriority> = vec![TaskPriority::High, TaskPriority::Urgent].into();
/// # let _ = (one, many);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    /// A single value.
    One(T),
    /// Several values.
    Many(Vec<T>),
}

impl<T> From<T> for OneOrMany<T> {
    fn from(value: T) -> Self {
        Self::One(value)
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(values: Vec<T>) -> Self {
        Self::Many(values)
    }
}

/// An inclusive date range filter. Either bound may be open.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DateRange {
    /// Lower bound (ISO 8601 date or timestamp).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,

    /// Upper bound (ISO 8601 date or timestamp).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

impl DateRange {
    /// Creates a range between two bounds.
    #[must_use]
    pub fn between(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: Some(from.into()),
            to: Some(to.into()),
        }
    }
}

/// A file attached to a comment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// The attachment id.
    pub id: String,
    /// The file name.
    pub name: String,
    /// The MIME type.
    pub mime_type: String,
    /// Size in bytes.
    pub size: u64,
    /// Download URL.
    pub url: String,
}

/// A comment on a task or project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// The comment id.
    pub id: String,

    /// The comment text.
    pub body: String,

    /// Id of the user who wrote the comment.
    pub author_id: String,

    /// The task commented on, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,

    /// The project commented on, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    /// Attached files.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,

    /// Audit metadata.
    #[serde(flatten)]
    pub audit: Audit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_one_or_many_serializes_untagged() {
        let one: OneOrMany<&str> = "a".into();
        let many: OneOrMany<&str> = vec!["a", "b"].into();
        assert_eq!(serde_json::to_value(one).unwrap(), json!("a"));
        assert_eq!(serde_json::to_value(many).unwrap(), json!(["a", "b"]));
    }

    #[test]
    fn test_comment_deserializes_with_audit() {
        let comment: Comment = serde_json::from_value(json!({
            "id": "c1",
            "body": "Looks good",
            "authorId": "u1",
            "taskId": "t1",
            "createdAt": "2024-03-01T10:00:00Z",
            "createdBy": "u1"
        }))
        .unwrap();

        assert_eq!(comment.author_id, "u1");
        assert_eq!(comment.task_id.as_deref(), Some("t1"));
        assert!(comment.attachments.is_empty());
        assert_eq!(comment.audit.created_by.as_deref(), Some("u1"));
        assert!(comment.audit.created_at.is_some());
    }

    #[test]
    fn test_date_range_skips_open_bounds() {
        let range = DateRange {
            from: Some("2024-01-01".to_string()),
            to: None,
        };
        assert_eq!(
            serde_json::to_value(range).unwrap(),
            json!({"from": "2024-01-01"})
        );
    }
}
