//! Query string encoding for filter, sort and include structures.
//!
//! Rocketlane list endpoints accept nested filter trees flattened into a
//! query string. This module provides the tree type ([`QueryValue`] /
//! [`QueryParams`]) and the encoder ([`build_query_string`]).
//!
//! # Encoding Rules
//!
//! - Null entries are dropped at any depth; no `key=` is emitted for them.
//! - Nested trees produce dotted keys: `filter.status`.
//! - Arrays repeat the key once per element, in order: `tag=x&tag=y`.
//!   Array elements that are themselves trees recurse under the same key.
//! - Dates render as RFC 3339 UTC timestamps with millisecond precision.
//! - Keys and values are percent-encoded. An empty result has no leading `?`.
//!
//! Encoding preserves declaration order, so the same tree always yields the
//! same string.
//!
//! # Example
//!
//! ```rust
//! use rocketlane_api::query::{build_query_string, QueryParams};
//!
//! let params = QueryParams::new()
//!     .with("limit", 25)
//!     .with("filter", QueryParams::new().with("status", "active"))
//!     .with("tag", vec!["x", "y"]);
//!
//! assert_eq!(
//!     build_query_string(Some(&params)),
//!     "?limit=25&filter.status=active&tag=x&tag=y"
//! );
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use serde::ser::{Error as _, SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::Value;

/// A single node of a query tree.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryValue {
    /// An absent value. Never emitted.
    Null,
    /// A boolean, rendered as `true` / `false`.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// An unsigned integer.
    UInt(u64),
    /// A floating point number.
    Float(f64),
    /// A string.
    String(String),
    /// A timestamp, rendered as RFC 3339 with millisecond precision.
    Date(DateTime<Utc>),
    /// A list whose elements repeat the parent key.
    Array(Vec<QueryValue>),
    /// A nested tree whose keys are joined to the parent with `.`.
    Object(QueryParams),
}

impl QueryValue {
    fn render_scalar(&self) -> Option<String> {
        match self {
            Self::Bool(b) => Some(b.to_string()),
            Self::Int(n) => Some(n.to_string()),
            Self::UInt(n) => Some(n.to_string()),
            Self::Float(n) => Some(n.to_string()),
            Self::String(s) => Some(s.clone()),
            Self::Date(d) => Some(format_date(d)),
            Self::Null | Self::Array(_) | Self::Object(_) => None,
        }
    }
}

fn format_date(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// An ordered tree of named query values.
///
/// Keys keep their insertion order. Inserting an existing key replaces its
/// value in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryParams(Vec<(String, QueryValue)>);

impl QueryParams {
    /// Creates an empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Adds an entry and returns the tree, for chained construction.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts an entry, replacing the value of an existing key in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.0.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.0.push((key, value));
        }
    }

    /// Returns the value stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns `true` if the tree has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Builds a tree from any serializable value.
    ///
    /// Struct fields keep their declaration order. A value serializing to
    /// `null` yields an empty tree.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the value does not
    /// serialize to a map.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self, serde_json::Error> {
        match serde_json::to_value(value)? {
            Value::Null => Ok(Self::new()),
            Value::Object(map) => Ok(map
                .into_iter()
                .map(|(k, v)| (k, QueryValue::from(v)))
                .collect()),
            other => Err(serde_json::Error::custom(format!(
                "query parameters must serialize to a map, got {other}"
            ))),
        }
    }

    /// Flattens the tree into ordered `(key, value)` pairs, unencoded.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        flatten_into(self, None, &mut pairs);
        pairs
    }
}

impl<K: Into<String>, V: Into<QueryValue>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

fn flatten_into(params: &QueryParams, prefix: Option<&str>, pairs: &mut Vec<(String, String)>) {
    for (key, value) in params.iter() {
        let full_key = prefix.map_or_else(|| key.to_string(), |p| format!("{p}.{key}"));
        flatten_value(&full_key, value, pairs);
    }
}

fn flatten_value(key: &str, value: &QueryValue, pairs: &mut Vec<(String, String)>) {
    match value {
        QueryValue::Null => {}
        QueryValue::Object(nested) => flatten_into(nested, Some(key), pairs),
        QueryValue::Array(items) => {
            for item in items {
                flatten_value(key, item, pairs);
            }
        }
        scalar => {
            if let Some(rendered) = scalar.render_scalar() {
                pairs.push((key.to_string(), rendered));
            }
        }
    }
}

/// Encodes a query tree into a query string.
///
/// Returns an empty string when `params` is `None` or produces no pairs;
/// otherwise the result starts with `?`.
#[must_use]
pub fn build_query_string(params: Option<&QueryParams>) -> String {
    let Some(params) = params else {
        return String::new();
    };

    let encoded = params
        .to_pairs()
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    if encoded.is_empty() {
        encoded
    } else {
        format!("?{encoded}")
    }
}

impl From<Value> for QueryValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => n
                .as_u64()
                .map(Self::UInt)
                .or_else(|| n.as_i64().map(Self::Int))
                .or_else(|| n.as_f64().map(Self::Float))
                .unwrap_or(Self::Null),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => Self::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Self::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        Self::UInt(u64::from(value))
    }
}

impl From<u64> for QueryValue {
    fn from(value: u64) -> Self {
        Self::UInt(value)
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<DateTime<Utc>> for QueryValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }
}

impl From<QueryParams> for QueryValue {
    fn from(value: QueryParams) -> Self {
        Self::Object(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for QueryValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Self>> From<Vec<T>> for QueryValue {
    fn from(value: Vec<T>) -> Self {
        Self::Array(value.into_iter().map(Into::into).collect())
    }
}

impl Serialize for QueryValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_none(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Int(n) => serializer.serialize_i64(*n),
            Self::UInt(n) => serializer.serialize_u64(*n),
            Self::Float(n) => serializer.serialize_f64(*n),
            Self::String(s) => serializer.serialize_str(s),
            Self::Date(d) => serializer.serialize_str(&format_date(d)),
            Self::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Object(params) => params.serialize(serializer),
        }
    }
}

impl Serialize for QueryParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_none_and_empty_produce_empty_string() {
        assert_eq!(build_query_string(None), "");
        assert_eq!(build_query_string(Some(&QueryParams::new())), "");
    }

    #[test]
    fn test_null_entries_are_omitted() {
        let params = QueryParams::new()
            .with("a", 1)
            .with("b", QueryValue::Null);
        assert_eq!(build_query_string(Some(&params)), "?a=1");
    }

    #[test]
    fn test_all_null_tree_has_no_question_mark() {
        let params = QueryParams::new()
            .with("a", QueryValue::Null)
            .with("b", QueryParams::new().with("c", Option::<String>::None));
        assert_eq!(build_query_string(Some(&params)), "");
    }

    #[test]
    fn test_nested_keys_are_dotted() {
        let params = QueryParams::new().with(
            "filter",
            QueryParams::new()
                .with("status", "active")
                .with("due", QueryParams::new().with("from", "2024-01-01")),
        );
        assert_eq!(
            build_query_string(Some(&params)),
            "?filter.status=active&filter.due.from=2024-01-01"
        );
    }

    #[test]
    fn test_arrays_repeat_key() {
        let params = QueryParams::new().with("tag", vec!["x", "y"]);
        assert_eq!(build_query_string(Some(&params)), "?tag=x&tag=y");
    }

    #[test]
    fn test_array_of_trees_recurse_under_same_key() {
        let params = QueryParams::new().with(
            "include",
            vec![
                QueryValue::from(QueryParams::new().with("a", true)),
                QueryValue::Null,
                QueryValue::from(QueryParams::new().with("b", false)),
            ],
        );
        assert_eq!(
            build_query_string(Some(&params)),
            "?include.a=true&include.b=false"
        );
    }

    #[test]
    fn test_dates_render_as_millisecond_timestamps() {
        let date = Utc.with_ymd_and_hms(2024, 3, 5, 8, 30, 0).unwrap();
        let params = QueryParams::new().with("since", date);
        assert_eq!(
            build_query_string(Some(&params)),
            "?since=2024-03-05T08%3A30%3A00.000Z"
        );
    }

    #[test]
    fn test_keys_and_values_are_percent_encoded() {
        let params = QueryParams::new().with("search term", "a&b=c d");
        assert_eq!(
            build_query_string(Some(&params)),
            "?search%20term=a%26b%3Dc%20d"
        );
    }

    #[test]
    fn test_encoding_is_deterministic_and_ordered() {
        let params = QueryParams::new()
            .with("zeta", 1)
            .with("alpha", 2)
            .with("mid", QueryParams::new().with("y", 3).with("x", 4));
        let first = build_query_string(Some(&params));
        let second = build_query_string(Some(&params));
        assert_eq!(first, second);
        assert_eq!(first, "?zeta=1&alpha=2&mid.y=3&mid.x=4");
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut params = QueryParams::new().with("a", 1).with("b", 2);
        params.insert("a", 3);
        assert_eq!(build_query_string(Some(&params)), "?a=3&b=2");
    }

    #[test]
    fn test_from_serialize_keeps_field_order() {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Filter {
            project_id: &'static str,
            #[serde(skip_serializing_if = "Option::is_none")]
            assignee_id: Option<&'static str>,
            status: Vec<&'static str>,
            billable: bool,
        }

        let params = QueryParams::from_serialize(&Filter {
            project_id: "p1",
            assignee_id: None,
            status: vec!["blocked", "in_progress"],
            billable: true,
        })
        .unwrap();

        assert_eq!(
            build_query_string(Some(&params)),
            "?projectId=p1&status=blocked&status=in_progress&billable=true"
        );
    }

    #[test]
    fn test_from_serialize_rejects_non_map() {
        assert!(QueryParams::from_serialize(&vec![1, 2]).is_err());
        assert!(QueryParams::from_serialize(&()).unwrap().is_empty());
    }

    #[test]
    fn test_from_json_value_numbers() {
        let value = QueryValue::from(json!({"limit": 10, "offset": -1, "ratio": 0.5}));
        let QueryValue::Object(params) = value else {
            panic!("expected object");
        };
        assert_eq!(params.get("limit"), Some(&QueryValue::UInt(10)));
        assert_eq!(params.get("offset"), Some(&QueryValue::Int(-1)));
        assert_eq!(params.get("ratio"), Some(&QueryValue::Float(0.5)));
    }

    #[test]
    fn test_serialize_round_trips_through_json() {
        let date = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let params = QueryParams::new()
            .with("since", date)
            .with("ids", vec![1_u64, 2]);
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(
            value,
            json!({"since": "2024-01-02T03:04:05.000Z", "ids": [1, 2]})
        );
    }
}
