//! Dry-run rendering.
//!
//! In dry-run mode a request is rendered as a copy-pasteable `curl` command
//! and handed to a [`DryRunSink`] instead of being sent.

use std::fmt;
use std::sync::Mutex;

use crate::clients::{Headers, HttpMethod};

/// Placeholder used for multipart bodies, which are not rendered.
pub const FORM_DATA_PLACEHOLDER: &str = "[form-data omitted]";

/// The body of a request as it appears in a rendered command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderedBody<'a> {
    /// Serialized JSON text.
    Text(&'a str),
    /// A multipart form.
    Form,
}

/// Receives the commands rendered in dry-run mode.
pub trait DryRunSink: Send + Sync {
    /// Handles one rendered command.
    fn emit(&self, command: &str);
}

/// Writes each command to standard output. This is the default sink.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutSink;

impl DryRunSink for StdoutSink {
    fn emit(&self, command: &str) {
        println!("{command}");
    }
}

/// Emits each command as an `info` tracing event.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DryRunSink for TracingSink {
    fn emit(&self, command: &str) {
        tracing::info!(target: "rocketlane_api::dry_run", "{command}");
    }
}

/// Adapts a closure into a sink.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use rocketlane_api::clients::{DryRunSink, FnSink};
///
/// let sink: Arc<dyn DryRunSink> = Arc::new(FnSink::new(|command: &str| {
///     eprintln!("{command}");
/// }));
/// sink.emit("curl -X GET 'https://api.rocketlane.com/v1/tasks'");
/// ```
pub struct FnSink<F>(F);

impl<F> FnSink<F>
where
    F: Fn(&str) + Send + Sync,
{
    /// Wraps `f`.
    pub const fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> DryRunSink for FnSink<F>
where
    F: Fn(&str) + Send + Sync,
{
    fn emit(&self, command: &str) {
        (self.0)(command);
    }
}

impl<F> fmt::Debug for FnSink<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnSink")
    }
}

/// Collects commands in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    commands: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every command received so far.
    #[must_use]
    pub fn commands(&self) -> Vec<String> {
        self.commands
            .lock()
            .map(|commands| commands.clone())
            .unwrap_or_default()
    }
}

impl DryRunSink for MemorySink {
    fn emit(&self, command: &str) {
        if let Ok(mut commands) = self.commands.lock() {
            commands.push(command.to_string());
        }
    }
}

/// Escapes a value for use inside a single-quoted shell string.
#[must_use]
pub fn escape_single_quotes(value: &str) -> String {
    value.replace('\'', r"'\''")
}

/// Renders a request as a `curl` command.
///
/// The parts are the method and URL, one `-H` per header in header order,
/// and the body, joined by a backslash-newline and two spaces of indent.
///
/// # Example
///
/// ```rust
/// use rocketlane_api::clients::{render_curl, Headers, HttpMethod, RenderedBody};
///
/// let headers: Headers = [("x-api-key", "k")].into_iter().collect();
/// let command = render_curl(
///     HttpMethod::Post,
///     "https://api.rocketlane.com/v1/tasks",
///     &headers,
///     Some(RenderedBody::Text(r#"{"name":"it's"}"#)),
/// );
/// assert_eq!(
///     command,
///     "curl -X POST 'https://api.rocketlane.com/v1/tasks' \\\n  \
///      -H 'x-api-key: k' \\\n  \
///      --data '{\"name\":\"it'\\''s\"}'"
/// );
/// ```
#[must_use]
pub fn render_curl(
    method: HttpMethod,
    url: &str,
    headers: &Headers,
    body: Option<RenderedBody<'_>>,
) -> String {
    let mut parts = Vec::with_capacity(headers.len() + 2);
    parts.push(format!("curl -X {method} '{}'", escape_single_quotes(url)));

    for (name, value) in headers.iter() {
        parts.push(format!(
            "-H '{}: {}'",
            escape_single_quotes(name),
            escape_single_quotes(value)
        ));
    }

    match body {
        Some(RenderedBody::Text(text)) => {
            parts.push(format!("--data '{}'", escape_single_quotes(text)));
        }
        Some(RenderedBody::Form) => {
            parts.push(format!("--form '{FORM_DATA_PLACEHOLDER}'"));
        }
        None => {}
    }

    parts.join(" \\\n  ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn test_tracing_sink_emits_command_as_event() {
        let sink: Arc<dyn DryRunSink> = Arc::new(TracingSink);
        sink.emit("curl -X GET 'https://api.rocketlane.com/v1/teams'");

        assert!(logs_contain("curl -X GET 'https://api.rocketlane.com/v1/teams'"));
        assert!(logs_contain("INFO"));
    }

    #[test]
    fn test_escape_single_quotes() {
        assert_eq!(escape_single_quotes("it's"), r"it'\''s");
        assert_eq!(escape_single_quotes("plain"), "plain");
    }

    #[test]
    fn test_render_without_headers_or_body() {
        let command = render_curl(
            HttpMethod::Get,
            "https://api.rocketlane.com/v1/tasks?limit=5",
            &Headers::new(),
            None,
        );
        assert_eq!(
            command,
            "curl -X GET 'https://api.rocketlane.com/v1/tasks?limit=5'"
        );
    }

    #[test]
    fn test_render_headers_in_order_and_body() {
        let headers: Headers = [("x-workspace-id", "w1"), ("x-api-key", "k")]
            .into_iter()
            .collect();
        let command = render_curl(
            HttpMethod::Patch,
            "https://h/v1/tasks/1",
            &headers,
            Some(RenderedBody::Text(r#"{"a":1}"#)),
        );
        let lines: Vec<&str> = command.split(" \\\n  ").collect();
        assert_eq!(
            lines,
            vec![
                "curl -X PATCH 'https://h/v1/tasks/1'",
                "-H 'x-api-key: k'",
                "-H 'x-workspace-id: w1'",
                r#"--data '{"a":1}'"#,
            ]
        );
    }

    #[test]
    fn test_render_form_body_placeholder() {
        let command = render_curl(
            HttpMethod::Post,
            "https://h/v1/forms/1/submissions",
            &Headers::new(),
            Some(RenderedBody::Form),
        );
        assert!(command.ends_with("--form '[form-data omitted]'"));
    }

    #[test]
    fn test_memory_and_fn_sinks_receive_commands() {
        let memory = MemorySink::new();
        memory.emit("one");
        memory.emit("two");
        assert_eq!(memory.commands(), vec!["one", "two"]);

        let forwarded = Arc::new(MemorySink::new());
        let target = Arc::clone(&forwarded);
        let sink = FnSink::new(move |command: &str| target.emit(command));
        sink.emit("three");
        assert_eq!(forwarded.commands(), vec!["three"]);
    }
}
