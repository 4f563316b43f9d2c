//! # Rocketlane API Rust SDK
//!
//! A Rust SDK for the Rocketlane project management API, providing
//! type-safe configuration, a transport with dry-run and cancellation
//! support, and typed facades for every entity collection.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`RocketlaneConfig`] and [`RocketlaneConfigBuilder`]
//! - Validated newtypes for the API key, workspace id and base URL
//! - Query encoding of nested filters into flat dotted keys via [`query`]
//! - An async HTTP transport with header layering, timeouts and cancellation
//! - Dry-run mode that renders each call as a `curl` command instead of sending it
//! - Typed facades for tasks, projects, customers, task lists, templates,
//!   time entries, teams, users and form responses
//! - Workspace scoping without mutating the original client
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use rocketlane_api::{ApiKey, RocketlaneConfig, WorkspaceId};
//!
//! let config = RocketlaneConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .workspace_id(WorkspaceId::new("ws-1").unwrap())
//!     .timeout(Duration::from_secs(30))
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use rocketlane_api::{RocketlaneClient, RocketlaneConfig, ApiKey};
//! use rocketlane_api::rest::{ListQuery, Outcome, RestResource};
//! use rocketlane_api::rest::resources::{TaskFilter, TaskStatus};
//!
//! let client = RocketlaneClient::new(config)?;
//!
//! let query = ListQuery::new().limit(25).filter(TaskFilter {
//!     project_id: Some("p-1".to_string()),
//!     status: Some(TaskStatus::Blocked.into()),
//!     ..Default::default()
//! });
//!
//! if let Outcome::Completed(page) = client.tasks().list(Some(&query), None).await? {
//!     for task in page.iter() {
//!         println!("{} ({:?})", task.name, task.status);
//!     }
//! }
//! ```
//!
//! ## Dry Run
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use rocketlane_api::clients::MemorySink;
//! use rocketlane_api::rest::{OperationOptions, RestResource};
//!
//! let sink = Arc::new(MemorySink::new());
//! let options = OperationOptions::new().dry_run(true).dry_run_sink(sink.clone());
//!
//! let outcome = client.projects().archive("p-1", Some(options)).await?;
//! assert!(outcome.is_dry_run());
//! println!("{}", sink.commands()[0]); // curl -X POST '.../projects/p-1/archive' ...
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All clients are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **Immutable configuration**: Scoping to a workspace derives a new client

pub mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod query;
pub mod rest;

// Re-export public types at crate root for convenience
pub use client::RocketlaneClient;
pub use config::{ApiKey, BaseUrl, RocketlaneConfig, RocketlaneConfigBuilder, WorkspaceId};
pub use error::ConfigError;
pub use query::{build_query_string, QueryParams, QueryValue};

// Re-export HTTP client types
pub use clients::{
    AbortReason, DryRunSink, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, HttpResponseError, InvalidHttpRequestError,
};
pub use rest::{ListQuery, OperationOptions, Outcome, PaginatedResponse, RestResource};
