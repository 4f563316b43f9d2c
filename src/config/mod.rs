//! Configuration types for the Rocketlane API SDK.
//!
//! This module provides the configuration used to construct the HTTP
//! transport and every resource client built on top of it.
//!
//! # Overview
//!
//! - [`RocketlaneConfig`]: The immutable configuration record
//! - [`RocketlaneConfigBuilder`]: A builder for constructing [`RocketlaneConfig`] instances
//! - [`ApiKey`]: A validated API key with masked debug output
//! - [`WorkspaceId`]: A validated workspace (tenant) identifier
//! - [`BaseUrl`]: A validated, slash-terminated API endpoint
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use rocketlane_api::{ApiKey, RocketlaneConfig, WorkspaceId};
//!
//! let config = RocketlaneConfig::builder()
//!     .api_key(ApiKey::new("rl-key").unwrap())
//!     .workspace_id(WorkspaceId::new("ws-1").unwrap())
//!     .timeout(Duration::from_secs(30))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_key_header_name(), "x-api-key");
//! ```

mod newtypes;

pub use newtypes::{ApiKey, BaseUrl, WorkspaceId};

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::HeaderName;

use crate::clients::{DryRunSink, Headers};
use crate::error::ConfigError;

/// Default header carrying the API key.
pub const DEFAULT_API_KEY_HEADER: &str = "x-api-key";

/// Default header carrying the workspace id.
pub const DEFAULT_WORKSPACE_HEADER: &str = "x-workspace-id";

/// Configuration for the Rocketlane API SDK.
///
/// A config is read-only once built. Deriving a variant for a different
/// workspace produces a new value via [`with_workspace_id`](Self::with_workspace_id);
/// the original is never mutated.
///
/// # Thread Safety
///
/// `RocketlaneConfig` is `Clone`, `Send`, and `Sync`. The dry-run sink is
/// shared behind an `Arc`, so clones are cheap.
#[derive(Clone)]
pub struct RocketlaneConfig {
    api_key: ApiKey,
    workspace_id: Option<WorkspaceId>,
    base_url: BaseUrl,
    timeout: Option<Duration>,
    default_headers: Headers,
    api_key_header_name: String,
    workspace_header_name: String,
    dry_run: bool,
    dry_run_sink: Option<Arc<dyn DryRunSink>>,
    user_agent_prefix: Option<String>,
}

impl RocketlaneConfig {
    /// Creates a new builder for constructing a `RocketlaneConfig`.
    #[must_use]
    pub fn builder() -> RocketlaneConfigBuilder {
        RocketlaneConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the workspace id, if configured.
    #[must_use]
    pub const fn workspace_id(&self) -> Option<&WorkspaceId> {
        self.workspace_id.as_ref()
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the per-request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the extra headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &Headers {
        &self.default_headers
    }

    /// Returns the name of the header carrying the API key.
    #[must_use]
    pub fn api_key_header_name(&self) -> &str {
        &self.api_key_header_name
    }

    /// Returns the name of the header carrying the workspace id.
    #[must_use]
    pub fn workspace_header_name(&self) -> &str {
        &self.workspace_header_name
    }

    /// Returns whether requests are rendered instead of sent by default.
    #[must_use]
    pub const fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Returns the configured dry-run sink, if any.
    #[must_use]
    pub fn dry_run_sink(&self) -> Option<&Arc<dyn DryRunSink>> {
        self.dry_run_sink.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns a copy of this configuration scoped to another workspace.
    ///
    /// Every other field is carried over unchanged.
    #[must_use]
    pub fn with_workspace_id(&self, workspace_id: WorkspaceId) -> Self {
        Self {
            workspace_id: Some(workspace_id),
            ..self.clone()
        }
    }
}

impl fmt::Debug for RocketlaneConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RocketlaneConfig")
            .field("api_key", &self.api_key)
            .field("workspace_id", &self.workspace_id)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("default_headers", &self.default_headers)
            .field("api_key_header_name", &self.api_key_header_name)
            .field("workspace_header_name", &self.workspace_header_name)
            .field("dry_run", &self.dry_run)
            .field("dry_run_sink", &self.dry_run_sink.is_some())
            .field("user_agent_prefix", &self.user_agent_prefix)
            .finish()
    }
}

// Verify RocketlaneConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RocketlaneConfig>();
};

/// Builder for constructing [`RocketlaneConfig`] instances.
///
/// The only required field is `api_key`.
///
/// # Defaults
///
/// - `base_url`: `https://api.rocketlane.com/v1`
/// - `api_key_header_name`: `x-api-key`
/// - `workspace_header_name`: `x-workspace-id`
/// - `dry_run`: `false`
/// - `workspace_id`, `timeout`, `dry_run_sink`, `user_agent_prefix`: `None`
/// - `default_headers`: empty
#[derive(Default)]
pub struct RocketlaneConfigBuilder {
    api_key: Option<ApiKey>,
    workspace_id: Option<WorkspaceId>,
    base_url: Option<BaseUrl>,
    timeout: Option<Duration>,
    default_headers: Headers,
    api_key_header_name: Option<String>,
    workspace_header_name: Option<String>,
    dry_run: Option<bool>,
    dry_run_sink: Option<Arc<dyn DryRunSink>>,
    user_agent_prefix: Option<String>,
}

impl RocketlaneConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the workspace the client is scoped to.
    #[must_use]
    pub fn workspace_id(mut self, workspace_id: WorkspaceId) -> Self {
        self.workspace_id = Some(workspace_id);
        self
    }

    /// Overrides the API endpoint.
    #[must_use]
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets a timeout applied to every live request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Adds a header sent with every request.
    ///
    /// Default headers override the credential and workspace headers but are
    /// themselves overridden by per-call headers.
    #[must_use]
    pub fn default_header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name, value);
        self
    }

    /// Replaces all default headers at once.
    #[must_use]
    pub fn default_headers(mut self, headers: Headers) -> Self {
        self.default_headers = headers;
        self
    }

    /// Overrides the name of the header carrying the API key.
    #[must_use]
    pub fn api_key_header_name(mut self, name: impl Into<String>) -> Self {
        self.api_key_header_name = Some(name.into());
        self
    }

    /// Overrides the name of the header carrying the workspace id.
    #[must_use]
    pub fn workspace_header_name(mut self, name: impl Into<String>) -> Self {
        self.workspace_header_name = Some(name.into());
        self
    }

    /// Renders requests as `curl` commands instead of sending them.
    #[must_use]
    pub const fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = Some(dry_run);
        self
    }

    /// Sets where dry-run commands are written.
    ///
    /// When unset, commands are printed to standard output.
    #[must_use]
    pub fn dry_run_sink(mut self, sink: Arc<dyn DryRunSink>) -> Self {
        self.dry_run_sink = Some(sink);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`RocketlaneConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set,
    /// or [`ConfigError::InvalidHeaderName`] if a header name override is not
    /// a valid HTTP header name.
    pub fn build(self) -> Result<RocketlaneConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        let api_key_header_name = validate_header_name(
            self.api_key_header_name
                .unwrap_or_else(|| DEFAULT_API_KEY_HEADER.to_string()),
        )?;
        let workspace_header_name = validate_header_name(
            self.workspace_header_name
                .unwrap_or_else(|| DEFAULT_WORKSPACE_HEADER.to_string()),
        )?;

        Ok(RocketlaneConfig {
            api_key,
            workspace_id: self.workspace_id,
            base_url: self.base_url.unwrap_or_default(),
            timeout: self.timeout,
            default_headers: self.default_headers,
            api_key_header_name,
            workspace_header_name,
            dry_run: self.dry_run.unwrap_or(false),
            dry_run_sink: self.dry_run_sink,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

impl fmt::Debug for RocketlaneConfigBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RocketlaneConfigBuilder")
            .field("api_key", &self.api_key)
            .field("workspace_id", &self.workspace_id)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

fn validate_header_name(name: String) -> Result<String, ConfigError> {
    if HeaderName::from_bytes(name.as_bytes()).is_err() {
        return Err(ConfigError::InvalidHeaderName { name });
    }
    Ok(name.to_ascii_lowercase())
}
