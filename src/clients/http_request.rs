//! HTTP request types for the Rocketlane API SDK.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! describing a single call to the Rocketlane API.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::clients::dry_run::DryRunSink;
use crate::clients::errors::InvalidHttpRequestError;
use crate::clients::Headers;
use crate::query::QueryParams;

/// HTTP methods used by the Rocketlane API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources and triggering actions.
    Post,
    /// HTTP PUT method for replacing sub-resources.
    Put,
    /// HTTP PATCH method for updating resources.
    Patch,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the upper-case method token.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One part of a multipart form body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormPart {
    /// A plain text field.
    Text {
        /// Field name.
        name: String,
        /// Field value.
        value: String,
    },
    /// A file upload.
    File {
        /// Field name.
        name: String,
        /// File name reported to the server.
        file_name: String,
        /// MIME type of the content, if known.
        content_type: Option<String>,
        /// Raw file bytes.
        bytes: Vec<u8>,
    },
}

/// A multipart form payload.
///
/// Form bodies are passed to the executor untouched; the multipart encoder
/// sets the `Content-Type` header including its boundary.
///
/// # Example
///
/// ```rust
/// use rocketlane_api::clients::FormData;
///
/// let form = FormData::new()
///     .text("description", "Signed SOW")
///     .file("file", "sow.pdf", Some("application/pdf"), vec![0x25, 0x50]);
/// assert_eq!(form.parts().len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormData {
    parts: Vec<FormPart>,
}

impl FormData {
    /// Creates an empty form.
    #[must_use]
    pub const fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// Appends a text field.
    #[must_use]
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(FormPart::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Appends a file field.
    #[must_use]
    pub fn file(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        content_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> Self {
        self.parts.push(FormPart::File {
            name: name.into(),
            file_name: file_name.into(),
            content_type: content_type.map(String::from),
            bytes,
        });
        self
    }

    /// Returns the form parts in insertion order.
    #[must_use]
    pub fn parts(&self) -> &[FormPart] {
        &self.parts
    }
}

/// The payload of a request.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    /// A JSON document, serialized to text before sending.
    Json(serde_json::Value),
    /// A multipart form, sent as-is.
    Form(FormData),
}

impl RequestBody {
    /// Serializes any value into a JSON body.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if `value` cannot be represented as JSON.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, serde_json::Error> {
        serde_json::to_value(value).map(Self::Json)
    }

    /// Returns `true` for multipart form bodies.
    #[must_use]
    pub const fn is_form(&self) -> bool {
        matches!(self, Self::Form(_))
    }
}

/// A request to be sent to the Rocketlane API.
///
/// Use [`HttpRequest::builder`] to construct requests. A request is consumed
/// by a single call to [`HttpClient::request`](crate::clients::HttpClient::request).
///
/// # Example
///
/// ```rust
/// use rocketlane_api::clients::{HttpMethod, HttpRequest, RequestBody};
/// use rocketlane_api::query::QueryParams;
/// use serde_json::json;
///
/// let list = HttpRequest::builder(HttpMethod::Get, "tasks")
///     .query(QueryParams::new().with("limit", 50))
///     .build()
///     .unwrap();
///
/// let create = HttpRequest::builder(HttpMethod::Post, "tasks")
///     .body(RequestBody::Json(json!({"name": "Kickoff"})))
///     .dry_run(true)
///     .build()
///     .unwrap();
/// # let _ = (list, create);
/// ```
#[derive(Clone)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path, relative to the configured base URL.
    pub path: String,
    /// Query tree appended to the URL.
    pub query: Option<QueryParams>,
    /// The request body, if any.
    pub body: Option<RequestBody>,
    /// Headers that override every configured header.
    pub extra_headers: Headers,
    /// Caller-supplied cancellation handle.
    pub cancellation: Option<CancellationToken>,
    /// Per-call dry-run override.
    pub dry_run: Option<bool>,
    /// Per-call dry-run sink override.
    pub dry_run_sink: Option<Arc<dyn DryRunSink>>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `path` is an absolute URL, so it would escape the base URL
    /// - a `GET` request carries a body
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.path.contains("://") {
            return Err(InvalidHttpRequestError::AbsolutePath {
                path: self.path.clone(),
            });
        }

        if self.http_method == HttpMethod::Get && self.body.is_some() {
            return Err(InvalidHttpRequestError::BodyNotAllowed {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }
}

impl fmt::Debug for HttpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpRequest")
            .field("http_method", &self.http_method)
            .field("path", &self.path)
            .field("query", &self.query)
            .field("body", &self.body)
            .field("extra_headers", &self.extra_headers)
            .field("cancellation", &self.cancellation)
            .field("dry_run", &self.dry_run)
            .field("dry_run_sink", &self.dry_run_sink.is_some())
            .finish()
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    request: HttpRequest,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            request: HttpRequest {
                http_method: method,
                path: path.into(),
                query: None,
                body: None,
                extra_headers: Headers::new(),
                cancellation: None,
                dry_run: None,
                dry_run_sink: None,
            },
        }
    }

    /// Sets the query tree.
    #[must_use]
    pub fn query(mut self, query: QueryParams) -> Self {
        self.request.query = Some(query);
        self
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: RequestBody) -> Self {
        self.request.body = Some(body);
        self
    }

    /// Adds a single per-call header.
    #[must_use]
    pub fn header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.request.extra_headers.insert(name, value);
        self
    }

    /// Merges a set of per-call headers.
    #[must_use]
    pub fn headers(mut self, headers: &Headers) -> Self {
        self.request.extra_headers.extend_from(headers);
        self
    }

    /// Attaches a cancellation handle.
    #[must_use]
    pub fn cancellation(mut self, token: CancellationToken) -> Self {
        self.request.cancellation = Some(token);
        self
    }

    /// Overrides the configured dry-run default for this call.
    #[must_use]
    pub const fn dry_run(mut self, dry_run: bool) -> Self {
        self.request.dry_run = Some(dry_run);
        self
    }

    /// Overrides the configured dry-run sink for this call.
    #[must_use]
    pub fn dry_run_sink(mut self, sink: Arc<dyn DryRunSink>) -> Self {
        self.request.dry_run_sink = Some(sink);
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        self.request.verify()?;
        Ok(self.request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display_is_upper_case() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
        assert_eq!(HttpMethod::Patch.to_string(), "PATCH");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, "tasks").build().unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.path, "tasks");
        assert!(request.body.is_none());
        assert!(request.query.is_none());
        assert!(request.dry_run.is_none());
    }

    #[test]
    fn test_builder_creates_valid_post_request() {
        let request = HttpRequest::builder(HttpMethod::Post, "tasks")
            .body(RequestBody::Json(json!({"name": "Kickoff"})))
            .build()
            .unwrap();

        assert_eq!(
            request.body,
            Some(RequestBody::Json(json!({"name": "Kickoff"})))
        );
    }

    #[test]
    fn test_verify_rejects_absolute_path() {
        let result = HttpRequest::builder(HttpMethod::Get, "https://evil.example.com/x").build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::AbsolutePath { .. })
        ));
    }

    #[test]
    fn test_verify_rejects_get_with_body() {
        let result = HttpRequest::builder(HttpMethod::Get, "tasks")
            .body(RequestBody::Json(json!({})))
            .build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::BodyNotAllowed { method }) if method == "GET"
        ));
    }

    #[test]
    fn test_builder_with_headers_and_overrides() {
        let token = CancellationToken::new();
        let request = HttpRequest::builder(HttpMethod::Delete, "tasks/1")
            .header("X-Request-Source", "cli")
            .cancellation(token)
            .dry_run(false)
            .build()
            .unwrap();

        assert_eq!(request.extra_headers.get("x-request-source"), Some("cli"));
        assert!(request.cancellation.is_some());
        assert_eq!(request.dry_run, Some(false));
    }

    #[test]
    fn test_request_body_json_and_form() {
        #[derive(Serialize)]
        struct Payload {
            name: &'static str,
        }

        let body = RequestBody::json(&Payload { name: "a" }).unwrap();
        assert_eq!(body, RequestBody::Json(json!({"name": "a"})));
        assert!(!body.is_form());
        assert!(RequestBody::Form(FormData::new().text("k", "v")).is_form());
    }
}
