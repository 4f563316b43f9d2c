//! Per-call options accepted by every resource operation.

use std::fmt;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::clients::{DryRunSink, Headers, HttpRequestBuilder};

/// Overrides applied to a single resource call.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use rocketlane_api::clients::MemorySink;
/// use rocketlane_api::rest::OperationOptions;
///
/// let sink = Arc::new(MemorySink::new());
/// let options = OperationOptions::new()
///     .dry_run(true)
///     .dry_run_sink(sink)
///     .header("x-request-source", "nightly-sync");
/// # let _ = options;
/// ```
#[derive(Clone, Default)]
pub struct OperationOptions {
    dry_run: Option<bool>,
    dry_run_sink: Option<Arc<dyn DryRunSink>>,
    cancellation: Option<CancellationToken>,
    headers: Headers,
}

impl OperationOptions {
    /// Creates options that change nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the client's dry-run default.
    #[must_use]
    pub const fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = Some(dry_run);
        self
    }

    /// Overrides the client's dry-run sink.
    #[must_use]
    pub fn dry_run_sink(mut self, sink: Arc<dyn DryRunSink>) -> Self {
        self.dry_run_sink = Some(sink);
        self
    }

    /// Attaches a cancellation handle.
    #[must_use]
    pub fn cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Adds a header that overrides every configured header.
    #[must_use]
    pub fn header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub(crate) fn apply(self, mut builder: HttpRequestBuilder) -> HttpRequestBuilder {
        if let Some(dry_run) = self.dry_run {
            builder = builder.dry_run(dry_run);
        }
        if let Some(sink) = self.dry_run_sink {
            builder = builder.dry_run_sink(sink);
        }
        if let Some(token) = self.cancellation {
            builder = builder.cancellation(token);
        }
        builder.headers(&self.headers)
    }
}

impl fmt::Debug for OperationOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationOptions")
            .field("dry_run", &self.dry_run)
            .field("dry_run_sink", &self.dry_run_sink.is_some())
            .field("cancellation", &self.cancellation)
            .field("headers", &self.headers)
            .finish()
    }
}
