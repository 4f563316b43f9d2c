//! Error types for the Rocketlane API SDK.
//!
//! This module contains the configuration errors raised while building a
//! [`RocketlaneConfig`](crate::RocketlaneConfig) or constructing a client.
//! Request-time failures live in [`crate::clients::HttpError`].
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use rocketlane_api::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// These are raised synchronously at construction time and are fatal to
/// that construction attempt.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("Rocketlane API key is required. Please provide a non-empty API key.")]
    EmptyApiKey,

    /// Workspace identifier cannot be empty.
    #[error("Workspace id cannot be empty. Omit the workspace instead of passing an empty id.")]
    EmptyWorkspaceId,

    /// A header name override is not a valid HTTP header name.
    #[error("Invalid header name '{name}'. Header names must be non-empty visible ASCII without separators.")]
    InvalidHeaderName {
        /// The rejected header name.
        name: String,
    },

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://api.rocketlane.com/v1').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The default HTTP executor could not be created.
    #[error("An HTTP executor could not be created: {reason}")]
    HttpExecutorUnavailable {
        /// Why the executor could not be built.
        reason: String,
    },
}
