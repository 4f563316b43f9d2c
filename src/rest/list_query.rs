//! The list query shared by every list endpoint.
//!
//! A [`ListQuery`] serializes to a query tree with camelCase keys:
//! `limit`, `pageToken`, `sort`, `filter`, `include`, `fields`, `search`,
//! plus any extra parameters, in that order.
//!
//! # Example
//!
//! ```rust
//! use rocketlane_api::query::build_query_string;
//! use rocketlane_api::rest::{ListQuery, SortDirection};
//! use rocketlane_api::rest::resources::{TaskFilter, TaskStatus};
//!
//! let query = ListQuery::<TaskFilter>::new()
//!     .limit(20)
//!     .sort_by("dueDate", SortDirection::Asc)
//!     .filter(TaskFilter {
//!         status: Some(vec![TaskStatus::Blocked, TaskStatus::InProgress].into()),
//!         ..Default::default()
//!     });
//!
//! assert_eq!(
//!     build_query_string(Some(&query.to_query_params().unwrap())),
//!     "?limit=20&sort.dueDate=asc&filter.status=blocked&filter.status=in_progress"
//! );
//! ```

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::query::{QueryParams, QueryValue};

/// Sort direction for one field.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

/// Ordered sort keys. Earlier fields take priority.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SortOrder(Vec<(String, SortDirection)>);

impl SortOrder {
    /// Creates an empty sort order.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Adds a field, replacing its direction if already present.
    #[must_use]
    pub fn then(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        let field = field.into();
        if let Some(slot) = self.0.iter_mut().find(|(f, _)| *f == field) {
            slot.1 = direction;
        } else {
            self.0.push((field, direction));
        }
        self
    }

    /// Returns `true` if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for SortOrder {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, direction) in &self.0 {
            map.serialize_entry(field, direction)?;
        }
        map.end()
    }
}

/// Named include flags, kept in the order they were set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IncludeFlags(Vec<(String, bool)>);

impl IncludeFlags {
    /// Creates an empty flag set.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Sets a flag, replacing its value if already present.
    #[must_use]
    pub fn set(mut self, name: impl Into<String>, enabled: bool) -> Self {
        let name = name.into();
        if let Some(slot) = self.0.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = enabled;
        } else {
            self.0.push((name, enabled));
        }
        self
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for IncludeFlags {
    fn from_iter<T: IntoIterator<Item = (S, bool)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::new(), |flags, (name, enabled)| flags.set(name, enabled))
    }
}

impl Serialize for IncludeFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, enabled) in &self.0 {
            map.serialize_entry(name, enabled)?;
        }
        map.end()
    }
}

/// Related data to embed in list results.
///
/// Endpoints accept either named flags or a plain list of names.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Include {
    /// `include.<name>=true|false`
    Flags(IncludeFlags),
    /// `include=<name>` repeated.
    Names(Vec<String>),
}

impl Include {
    /// Builds a flag set from `(name, enabled)` pairs, in order.
    pub fn flags<I, S>(flags: I) -> Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        Self::Flags(flags.into_iter().collect())
    }

    /// Builds a list of names.
    pub fn names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Names(names.into_iter().map(Into::into).collect())
    }
}

/// Query for a list endpoint.
///
/// `F` is the endpoint's filter type. `I` is the include type: [`Include`]
/// unless the endpoint has a typed flag set.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery<F, I = Include> {
    /// Maximum number of items per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Token from the previous page's `next_page_token`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,

    /// Sort order.
    #[serde(skip_serializing_if = "SortOrder::is_empty")]
    pub sort: SortOrder,

    /// Endpoint-specific filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<F>,

    /// Related data to embed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<I>,

    /// Sparse field selection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,

    /// Free-text search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    /// Additional raw parameters, appended after the named ones.
    #[serde(flatten)]
    pub extra: QueryParams,
}

impl<F, I> Default for ListQuery<F, I> {
    fn default() -> Self {
        Self {
            limit: None,
            page_token: None,
            sort: SortOrder::new(),
            filter: None,
            include: None,
            fields: None,
            search: None,
            extra: QueryParams::new(),
        }
    }
}

impl<F, I> ListQuery<F, I> {
    /// Creates an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the page token.
    #[must_use]
    pub fn page_token(mut self, token: impl Into<String>) -> Self {
        self.page_token = Some(token.into());
        self
    }

    /// Appends a sort key.
    #[must_use]
    pub fn sort_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort = self.sort.then(field, direction);
        self
    }

    /// Sets the filter.
    #[must_use]
    pub fn filter(mut self, filter: F) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Sets the include selection.
    #[must_use]
    pub fn include(mut self, include: I) -> Self {
        self.include = Some(include);
        self
    }

    /// Restricts the returned fields.
    #[must_use]
    pub fn fields<T, S>(mut self, fields: T) -> Self
    where
        T: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the free-text search.
    #[must_use]
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Adds a raw parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.extra.insert(key, value);
        self
    }

    /// Returns a copy of this query positioned at another page.
    #[must_use]
    pub fn with_page_token(&self, token: impl Into<String>) -> Self
    where
        F: Clone,
        I: Clone,
    {
        self.clone().page_token(token)
    }
}

impl<F: Serialize, I: Serialize> ListQuery<F, I> {
    /// Converts the query into a query tree.
    ///
    /// # Errors
    ///
    /// Returns an error if the filter or include type fails to serialize.
    pub fn to_query_params(&self) -> Result<QueryParams, serde_json::Error> {
        QueryParams::from_serialize(self)
    }
}
