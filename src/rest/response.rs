//! Result types for resource operations.
//!
//! - [`Outcome<T>`]: either the decoded payload or a marker that the call was
//!   only rendered (dry run)
//! - [`PaginatedResponse<T>`]: one page of a list endpoint
//! - [`BulkResult<T>`]: per-item results of a bulk operation
//!
//! # Deref Pattern
//!
//! `PaginatedResponse<T>` implements `Deref<Target = [T]>`, so a page can be
//! used like a slice of its items:
//!
//! ```rust,ignore
//! let page = client.tasks().list(None, None).await?.into_option().unwrap_or_default();
//!
//! for task in page.iter() {
//!     println!("{}", task.name);
//! }
//!
//! if page.has_next_page() {
//!     let next = ListQuery::new().page_token(page.next_page_token().unwrap_or_default());
//!     // Fetch next page...
//! }
//! ```

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

/// The result of a resource operation.
///
/// A dry-run call never reaches the server, so it has no payload to decode.
/// Those calls return [`Outcome::DryRun`] instead of a fabricated entity.
/// A 204 or empty 2xx body for an operation that normally returns an entity
/// yields [`Outcome::NoContent`].
///
/// # Example
///
/// ```rust
/// use rocketlane_api::rest::Outcome;
///
/// let sent: Outcome<u32> = Outcome::Completed(7);
/// assert_eq!(sent.into_option(), Some(7));
///
/// let previewed: Outcome<u32> = Outcome::DryRun;
/// assert!(previewed.is_dry_run());
/// assert_eq!(previewed.into_option(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The request was sent and its payload decoded.
    Completed(T),
    /// The request was rendered to the dry-run sink and not sent.
    DryRun,
    /// The request succeeded but the server returned no body.
    NoContent,
}

impl<T> Outcome<T> {
    /// Returns `true` if the call was only rendered.
    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        matches!(self, Self::DryRun)
    }

    /// Returns `true` if the server answered with no body.
    #[must_use]
    pub const fn is_no_content(&self) -> bool {
        matches!(self, Self::NoContent)
    }

    /// Returns the payload, or `None` for a dry run or an empty response.
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Completed(value) => Some(value),
            Self::DryRun | Self::NoContent => None,
        }
    }

    /// Borrows the payload, or `None` for a dry run or an empty response.
    #[must_use]
    pub const fn as_option(&self) -> Option<&T> {
        match self {
            Self::Completed(value) => Some(value),
            Self::DryRun | Self::NoContent => None,
        }
    }

    /// Maps the payload, leaving the bodiless variants untouched.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Completed(value) => Outcome::Completed(f(value)),
            Self::DryRun => Outcome::DryRun,
            Self::NoContent => Outcome::NoContent,
        }
    }
}

/// One page of a list endpoint.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    /// The items on this page.
    pub data: Vec<T>,

    /// Token for the next page; absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,

    /// Total number of matching items, when the server reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

impl<T> Default for PaginatedResponse<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            next_page_token: None,
            total: None,
        }
    }
}

impl<T> PaginatedResponse<T> {
    /// Returns `true` if another page is available.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.next_page_token.is_some()
    }

    /// Returns the token for the next page.
    #[must_use]
    pub fn next_page_token(&self) -> Option<&str> {
        self.next_page_token.as_deref()
    }

    /// Consumes the page and returns its items.
    #[must_use]
    pub fn into_inner(self) -> Vec<T> {
        self.data
    }
}

impl<T> Deref for PaginatedResponse<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for PaginatedResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

/// Identifies the item a bulk failure refers to.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identifier {
    /// The item id.
    pub id: String,
}

/// One failed item of a bulk operation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BulkFailure {
    /// The item that failed.
    pub identifier: Identifier,
    /// Why it failed.
    pub error: String,
}

/// Per-item results of a bulk operation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BulkResult<T> {
    /// Items that were processed.
    #[serde(default = "Vec::new")]
    pub successes: Vec<T>,
    /// Items that were rejected.
    #[serde(default = "Vec::new")]
    pub failures: Vec<BulkFailure>,
}

impl<T> BulkResult<T> {
    /// Returns `true` if no item failed.
    #[must_use]
    pub fn is_complete_success(&self) -> bool {
        self.failures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_paginated_response_deserializes_camel_case() {
        let page: PaginatedResponse<u32> = serde_json::from_value(json!({
            "data": [1, 2, 3],
            "nextPageToken": "abc",
            "total": 10
        }))
        .unwrap();

        assert_eq!(page.len(), 3);
        assert_eq!(page[0], 1);
        assert!(page.has_next_page());
        assert_eq!(page.next_page_token(), Some("abc"));
        assert_eq!(page.total, Some(10));
    }

    #[test]
    fn test_last_page_has_no_token() {
        let page: PaginatedResponse<u32> = serde_json::from_value(json!({"data": []})).unwrap();
        assert!(!page.has_next_page());
        assert!(page.is_empty());
    }

    #[test]
    fn test_bulk_result_with_failures() {
        let result: BulkResult<String> = serde_json::from_value(json!({
            "successes": ["a"],
            "failures": [{"identifier": {"id": "b"}, "error": "locked"}]
        }))
        .unwrap();

        assert!(!result.is_complete_success());
        assert_eq!(result.failures[0].identifier.id, "b");
        assert_eq!(result.failures[0].error, "locked");
    }

    #[test]
    fn test_outcome_map_and_accessors() {
        let outcome = Outcome::Completed(2).map(|n| n * 10);
        assert_eq!(outcome.as_option(), Some(&20));
        assert!(!outcome.is_dry_run());

        let dry: Outcome<u32> = Outcome::DryRun;
        assert_eq!(dry.map(|n| n + 1), Outcome::DryRun);

        let empty: Outcome<u32> = Outcome::NoContent;
        assert!(empty.is_no_content());
        assert_eq!(empty.clone().map(|n| n + 1), Outcome::NoContent);
        assert_eq!(empty.into_option(), None);
    }
}
