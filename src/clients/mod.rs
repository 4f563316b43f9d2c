//! HTTP client types for Rocketlane API communication.
//!
//! This module is the transport layer every resource call goes through. It
//! handles header layering, URL resolution, dry-run rendering, timeout and
//! cancellation, and response parsing.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods
//! - [`RequestBody`]: JSON or multipart request payloads
//! - [`HttpExecutor`]: The seam that performs the network exchange
//! - [`DryRunSink`]: Receives rendered `curl` commands in dry-run mode
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use rocketlane_api::{ApiKey, RocketlaneConfig};
//! use rocketlane_api::clients::{HttpClient, HttpMethod, HttpRequest, MemorySink};
//!
//! let sink = Arc::new(MemorySink::new());
//! let config = RocketlaneConfig::builder()
//!     .api_key(ApiKey::new("rl-key")?)
//!     .dry_run(true)
//!     .dry_run_sink(sink.clone())
//!     .build()?;
//! let client = HttpClient::new(config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "tasks").build()?;
//! let response = client.request(request).await?;
//! assert!(response.is_dry_run());
//! println!("{}", sink.commands()[0]);
//! ```

mod dry_run;
mod errors;
mod executor;
mod headers;
mod http_client;
mod http_request;
mod http_response;

pub use dry_run::{
    escape_single_quotes, render_curl, DryRunSink, FnSink, MemorySink, RenderedBody, StdoutSink,
    TracingSink, FORM_DATA_PLACEHOLDER,
};
pub use errors::{
    AbortReason, ErrorDetails, HttpError, HttpResponseError, InvalidHttpRequestError,
    DEFAULT_ERROR_MESSAGE,
};
pub use executor::{HttpExecutor, PreparedBody, PreparedRequest, ReqwestExecutor};
pub use headers::Headers;
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{FormData, FormPart, HttpMethod, HttpRequest, HttpRequestBuilder, RequestBody};
pub use http_response::{HttpResponse, RawResponse, ResponsePayload};
