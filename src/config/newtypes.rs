//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Rocketlane API key.
///
/// This newtype ensures the key is non-empty and masks its value in debug
/// output so it never ends up in logs.
///
/// # Example
///
/// ```rust
/// use rocketlane_api::ApiKey;
///
/// let key = ApiKey::new("rl-key").unwrap();
/// assert_eq!(key.as_ref(), "rl-key");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated workspace (tenant) identifier.
///
/// Sent in the workspace header to scope a call to one customer-side workspace.
///
/// # Example
///
/// ```rust
/// use rocketlane_api::WorkspaceId;
///
/// let workspace = WorkspaceId::new("ws-42").unwrap();
/// assert_eq!(workspace.as_ref(), "ws-42");
/// assert!(WorkspaceId::new("  ").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WorkspaceId(String);

impl WorkspaceId {
    /// Creates a new validated workspace id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyWorkspaceId`] if the id is empty or blank.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        let id = id.trim();
        if id.is_empty() {
            return Err(ConfigError::EmptyWorkspaceId);
        }
        Ok(Self(id.to_string()))
    }
}

impl AsRef<str> for WorkspaceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkspaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for WorkspaceId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for WorkspaceId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated API base URL.
///
/// The URL must carry a scheme and a host. It is normalized to always end
/// with `/`, so relative request paths are appended beneath it and never
/// replace its last path segment.
///
/// # Example
///
/// ```rust
/// use rocketlane_api::BaseUrl;
///
/// let url = BaseUrl::new("https://api.example.com/v1").unwrap();
/// assert_eq!(url.as_ref(), "https://api.example.com/v1/");
/// assert_eq!(url.join("/tasks/1"), "https://api.example.com/v1/tasks/1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// The production API endpoint.
    pub const DEFAULT: &'static str = "https://api.rocketlane.com/v1";

    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no scheme or host,
    /// or carries a query string or fragment.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().to_string();
        let invalid = || ConfigError::InvalidBaseUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let remainder = &url[scheme_end + 3..];
        let host_end = remainder.find([':', '/', '?', '#']).unwrap_or(remainder.len());
        if remainder[..host_end].is_empty() || remainder.contains(['?', '#']) {
            return Err(invalid());
        }

        if url.ends_with('/') {
            Ok(Self(url))
        } else {
            Ok(Self(format!("{url}/")))
        }
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        self.0.split("://").next().unwrap_or_default()
    }

    /// Resolves a relative path against this base.
    ///
    /// Leading slashes on `path` are ignored so the result always stays
    /// beneath the base path.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.0, path.trim_start_matches('/'))
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self(format!("{}/", Self::DEFAULT))
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_rejects_empty_string() {
        assert!(matches!(ApiKey::new(""), Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_api_key_masks_value_in_debug() {
        let key = ApiKey::new("super-secret-key").unwrap();
        let debug_output = format!("{key:?}");
        assert_eq!(debug_output, "ApiKey(*****)");
        assert!(!debug_output.contains("super-secret-key"));
    }

    #[test]
    fn test_workspace_id_trims_and_rejects_blank() {
        assert_eq!(WorkspaceId::new(" ws-1 ").unwrap().as_ref(), "ws-1");
        assert!(matches!(
            WorkspaceId::new(""),
            Err(ConfigError::EmptyWorkspaceId)
        ));
    }

    #[test]
    fn test_base_url_appends_trailing_slash() {
        let url = BaseUrl::new("https://api.example.com/v1").unwrap();
        assert_eq!(url.as_ref(), "https://api.example.com/v1/");

        let url = BaseUrl::new("https://api.example.com/v1/").unwrap();
        assert_eq!(url.as_ref(), "https://api.example.com/v1/");
    }

    #[test]
    fn test_base_url_join_keeps_base_path() {
        let url = BaseUrl::new("http://localhost:8080/api/v1").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.join("tasks"), "http://localhost:8080/api/v1/tasks");
        assert_eq!(url.join("/tasks"), "http://localhost:8080/api/v1/tasks");
        assert_eq!(url.join(""), "http://localhost:8080/api/v1/");
    }

    #[test]
    fn test_base_url_rejects_invalid() {
        assert!(BaseUrl::new("api.example.com").is_err());
        assert!(BaseUrl::new("https://").is_err());
        assert!(BaseUrl::new("://example.com").is_err());
        assert!(BaseUrl::new("https://example.com/v1?x=1").is_err());
    }

    #[test]
    fn test_default_base_url_is_production() {
        assert_eq!(BaseUrl::default().as_ref(), "https://api.rocketlane.com/v1/");
    }

    #[test]
    fn test_workspace_id_round_trip_serialization() {
        let original = WorkspaceId::new("ws-9").unwrap();
        let json = serde_json::to_string(&original).unwrap();
        assert_eq!(json, r#""ws-9""#);
        let restored: WorkspaceId = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }
}
