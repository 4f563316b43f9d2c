//! HTTP client for Rocketlane API communication.
//!
//! This module provides the [`HttpClient`] type, the single request pipeline
//! every resource call goes through.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::clients::dry_run::{render_curl, DryRunSink, StdoutSink};
use crate::clients::errors::{AbortReason, HttpError};
use crate::clients::executor::{HttpExecutor, PreparedBody, PreparedRequest, ReqwestExecutor};
use crate::clients::http_request::{HttpRequest, RequestBody};
use crate::clients::http_response::{HttpResponse, RawResponse};
use crate::clients::Headers;
use crate::config::{RocketlaneConfig, WorkspaceId};
use crate::error::ConfigError;
use crate::query::build_query_string;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Rocketlane API.
///
/// The client handles:
/// - URL resolution against the configured base URL
/// - Layered headers: credential, workspace, defaults, then per-call
/// - Dry-run rendering in place of network I/O
/// - Timeout and cancellation
/// - Response and error parsing
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` and cheap to clone; clones share the
/// underlying executor.
///
/// # Example
///
/// ```rust,ignore
/// use rocketlane_api::{ApiKey, RocketlaneConfig};
/// use rocketlane_api::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let config = RocketlaneConfig::builder()
///     .api_key(ApiKey::new("rl-key")?)
///     .build()?;
/// let client = HttpClient::new(config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "tasks").build()?;
/// let response = client.request(request).await?;
/// println!("{:?}", response.payload);
/// ```
#[derive(Clone)]
pub struct HttpClient {
    config: RocketlaneConfig,
    executor: Arc<dyn HttpExecutor>,
    user_agent: String,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a client that sends requests with [`ReqwestExecutor`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpExecutorUnavailable`] if the default
    /// executor cannot be created.
    pub fn new(config: RocketlaneConfig) -> Result<Self, ConfigError> {
        let executor = ReqwestExecutor::new()?;
        Ok(Self::with_executor(config, Arc::new(executor)))
    }

    /// Creates a client that sends requests through `executor`.
    #[must_use]
    pub fn with_executor(config: RocketlaneConfig, executor: Arc<dyn HttpExecutor>) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Rocketlane API Library v{SDK_VERSION} | Rust {rust_version}"
        );

        Self {
            config,
            executor,
            user_agent,
        }
    }

    /// Returns a client scoped to another workspace.
    ///
    /// The new client shares this client's executor; this client keeps its
    /// own workspace.
    #[must_use]
    pub fn with_workspace(&self, workspace_id: WorkspaceId) -> Self {
        Self {
            config: self.config.with_workspace_id(workspace_id),
            executor: Arc::clone(&self.executor),
            user_agent: self.user_agent.clone(),
        }
    }

    /// Returns the configuration this client sends with.
    #[must_use]
    pub const fn config(&self) -> &RocketlaneConfig {
        &self.config
    }

    /// Returns the `User-Agent` value sent with every request.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Merges headers for `request`, later layers winning.
    fn headers_for(&self, request: &HttpRequest) -> Headers {
        let mut headers = Headers::new();
        headers.insert("user-agent", self.user_agent.as_str());
        headers.insert(
            self.config.api_key_header_name(),
            self.config.api_key().as_ref(),
        );
        if let Some(workspace_id) = self.config.workspace_id() {
            headers.insert(self.config.workspace_header_name(), workspace_id.as_ref());
        }
        headers.extend_from(self.config.default_headers());
        headers.extend_from(&request.extra_headers);

        let is_form = request.body.as_ref().is_some_and(RequestBody::is_form);
        if !is_form && !headers.contains("content-type") {
            headers.insert("content-type", "application/json");
        }
        headers
    }

    /// Sends an HTTP request to the Rocketlane API.
    ///
    /// When dry-run is in effect (the request's override, else the
    /// configured default) the request is rendered as a `curl` command,
    /// passed to the dry-run sink, and a [`HttpResponse::dry_run`] envelope is
    /// returned without any network I/O.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The JSON body cannot be serialized (`Serialization`)
    /// - The call is cancelled or times out (`Aborted`)
    /// - A network error occurs (`Network`)
    /// - A non-2xx response is received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!(
            "{}{}",
            self.config.base_url().join(&request.path),
            build_query_string(request.query.as_ref())
        );
        let headers = self.headers_for(&request);

        let HttpRequest {
            http_method,
            body,
            cancellation,
            dry_run,
            dry_run_sink,
            ..
        } = request;

        let body = match body {
            Some(RequestBody::Json(value)) => Some(PreparedBody::Text(serde_json::to_string(&value)?)),
            Some(RequestBody::Form(form)) => Some(PreparedBody::Form(form)),
            None => None,
        };

        let dry_run = dry_run.unwrap_or_else(|| self.config.dry_run());
        tracing::debug!(method = %http_method, %url, dry_run, "Rocketlane request");

        if dry_run {
            let command = render_curl(
                http_method,
                &url,
                &headers,
                body.as_ref().map(PreparedBody::rendered),
            );
            match dry_run_sink.as_ref().or_else(|| self.config.dry_run_sink()) {
                Some(sink) => sink.emit(&command),
                None => StdoutSink.emit(&command),
            }
            return Ok(HttpResponse::dry_run());
        }

        let prepared = PreparedRequest {
            method: http_method,
            url,
            headers,
            body,
        };
        let path = prepared.url.clone();
        let raw = self.dispatch(prepared, cancellation.as_ref()).await?;

        HttpResponse::from_raw(raw).map_err(|error| {
            tracing::warn!("Rocketlane request to {} failed: {}", path, error);
            error
        })
    }

    /// Races the executor against cancellation and the configured timeout.
    async fn dispatch(
        &self,
        request: PreparedRequest,
        cancellation: Option<&CancellationToken>,
    ) -> Result<RawResponse, HttpError> {
        let cancelled = async {
            match cancellation {
                Some(token) => token.cancelled().await,
                None => std::future::pending::<()>().await,
            }
        };

        let timeout = self.config.timeout();
        let timed_out = async {
            match timeout {
                Some(timeout) => {
                    tokio::time::sleep(timeout).await;
                    timeout
                }
                None => std::future::pending::<Duration>().await,
            }
        };

        let url = request.url.clone();
        tokio::select! {
            biased;
            () = cancelled => {
                tracing::warn!("Rocketlane request to {} was cancelled", url);
                Err(HttpError::Aborted(AbortReason::Cancelled))
            }
            timeout = timed_out => {
                tracing::warn!("Rocketlane request to {} timed out after {:?}", url, timeout);
                Err(HttpError::Aborted(AbortReason::TimedOut { timeout }))
            }
            result = self.executor.execute(request) => result,
        }
    }
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}
