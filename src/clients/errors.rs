//! HTTP-specific error types for the Rocketlane API SDK.
//!
//! # Error Handling
//!
//! Every request-time failure surfaces as one [`HttpError`]:
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`AbortReason`]: The call was cancelled or ran past its timeout
//! - [`InvalidHttpRequestError`]: A request failed validation before sending
//! - `Network`: The transport could not complete the exchange
//! - `Serialization`: A body could not be encoded, or a payload did not match
//!   the expected entity shape
//!
//! # Example
//!
//! ```rust,ignore
//! use rocketlane_api::clients::{AbortReason, HttpError};
//!
//! match client.tasks().retrieve(42, None).await {
//!     Ok(outcome) => println!("{outcome:?}"),
//!     Err(HttpError::Response(e)) if e.is_not_found() => println!("no such task"),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::Aborted(AbortReason::TimedOut { timeout })) => {
//!         println!("gave up after {timeout:?}");
//!     }
//!     Err(e) => println!("request failed: {e}"),
//! }
//! ```

use std::time::Duration;

use thiserror::Error;

/// The fallback message used when an error response carries nothing better.
pub const DEFAULT_ERROR_MESSAGE: &str = "Rocketlane request failed";

/// Decoded body of an error response.
#[derive(Clone, Debug, PartialEq)]
pub enum ErrorDetails {
    /// The body parsed as JSON.
    Json(serde_json::Value),
    /// The body was not valid JSON and is kept verbatim.
    Text(String),
}

/// Error returned when an HTTP request receives a non-successful response.
///
/// `message` is the server's `message` field when the body is JSON and that
/// field is a string. Otherwise it is the status reason phrase, or
/// [`DEFAULT_ERROR_MESSAGE`] when no reason phrase is known.
///
/// # Example
///
/// ```rust
/// use rocketlane_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: "not found".to_string(),
///     details: None,
/// };
///
/// assert!(error.is_not_found());
/// assert_eq!(error.to_string(), "not found");
/// ```
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Human-readable failure message.
    pub message: String,
    /// The decoded error body, absent when the body was empty.
    pub details: Option<ErrorDetails>,
}

impl HttpResponseError {
    /// Returns `true` for 4xx responses.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.code >= 400 && self.code < 500
    }

    /// Returns `true` for 5xx responses.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.code >= 500
    }

    /// Returns `true` for 404 responses.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        self.code == 404
    }
}

/// Error returned when an HTTP request fails validation.
///
/// Raised before anything is sent or rendered.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request path is an absolute URL.
    #[error("Request path '{path}' must be relative to the configured base URL.")]
    AbsolutePath {
        /// The rejected path.
        path: String,
    },

    /// A body was attached to a method that does not carry one.
    #[error("Cannot send a body with {method}.")]
    BodyNotAllowed {
        /// The HTTP method of the request.
        method: String,
    },
}

/// Why a request was abandoned before a response arrived.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AbortReason {
    /// The caller's cancellation handle fired.
    Cancelled,
    /// The configured timeout elapsed first.
    TimedOut {
        /// The timeout that elapsed.
        timeout: Duration,
    },
}

impl std::fmt::Display for AbortReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cancelled => f.write_str("request was cancelled"),
            Self::TimedOut { timeout } => {
                write!(f, "request timed out after {}ms", timeout.as_millis())
            }
        }
    }
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// The request was cancelled or timed out.
    #[error("Request aborted: {0}")]
    Aborted(AbortReason),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A body could not be serialized or a payload could not be decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl HttpError {
    /// Returns `true` if the call was abandoned by cancellation or timeout.
    #[must_use]
    pub const fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted(_))
    }

    /// Returns the HTTP status code for response errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}
