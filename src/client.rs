//! The top-level Rocketlane client.
//!
//! [`RocketlaneClient`] owns one [`HttpClient`] and exposes one facade per
//! entity collection. All facades share the same transport.
//!
//! # Example
//!
//! ```rust,ignore
//! use rocketlane_api::{ApiKey, RocketlaneClient, RocketlaneConfig, WorkspaceId};
//! use rocketlane_api::rest::RestResource;
//!
//! let config = RocketlaneConfig::builder()
//!     .api_key(ApiKey::new("rl-key")?)
//!     .build()?;
//! let client = RocketlaneClient::new(config)?;
//!
//! // Same credentials, different tenant; `client` is unaffected.
//! let acme = client.with_workspace(WorkspaceId::new("ws-acme")?);
//! let projects = acme.projects().list(None, None).await?;
//! ```

use std::sync::Arc;

use crate::clients::{HttpClient, HttpExecutor};
use crate::config::{RocketlaneConfig, WorkspaceId};
use crate::error::ConfigError;
use crate::rest::resources::{
    CustomersResource, FormsResource, ProjectsResource, TaskListsResource, TasksResource,
    TeamsResource, TemplatesResource, TimeEntriesResource, UsersResource,
};

/// Entry point to the Rocketlane API.
///
/// # Thread Safety
///
/// `RocketlaneClient` is `Send + Sync` and cheap to clone. Clones share the
/// transport and its connection pool.
#[derive(Clone, Debug)]
pub struct RocketlaneClient {
    http: Arc<HttpClient>,
    tasks: TasksResource,
    projects: ProjectsResource,
    customers: CustomersResource,
    task_lists: TaskListsResource,
    templates: TemplatesResource,
    time_entries: TimeEntriesResource,
    teams: TeamsResource,
    users: UsersResource,
    forms: FormsResource,
}

// Verify RocketlaneClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RocketlaneClient>();
};

impl RocketlaneClient {
    /// Creates a client backed by the default `reqwest` executor.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpExecutorUnavailable`] if the executor
    /// cannot be created.
    pub fn new(config: RocketlaneConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_http(HttpClient::new(config)?))
    }

    /// Creates a client that sends requests through `executor`.
    #[must_use]
    pub fn with_executor(config: RocketlaneConfig, executor: Arc<dyn HttpExecutor>) -> Self {
        Self::from_http(HttpClient::with_executor(config, executor))
    }

    /// Wraps an existing transport.
    #[must_use]
    pub fn from_http(http: HttpClient) -> Self {
        let http = Arc::new(http);
        Self {
            tasks: TasksResource::new(Arc::clone(&http)),
            projects: ProjectsResource::new(Arc::clone(&http)),
            customers: CustomersResource::new(Arc::clone(&http)),
            task_lists: TaskListsResource::new(Arc::clone(&http)),
            templates: TemplatesResource::new(Arc::clone(&http)),
            time_entries: TimeEntriesResource::new(Arc::clone(&http)),
            teams: TeamsResource::new(Arc::clone(&http)),
            users: UsersResource::new(Arc::clone(&http)),
            forms: FormsResource::new(Arc::clone(&http)),
            http,
        }
    }

    /// Returns a new client for another workspace.
    ///
    /// The returned client reuses this client's executor and differs only in
    /// its workspace id. This client is not modified.
    #[must_use]
    pub fn with_workspace(&self, workspace_id: WorkspaceId) -> Self {
        Self::from_http(self.http.with_workspace(workspace_id))
    }

    /// Returns the configuration this client sends with.
    #[must_use]
    pub fn config(&self) -> &RocketlaneConfig {
        self.http.config()
    }

    /// Returns the shared transport.
    #[must_use]
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Tasks (`/tasks`).
    #[must_use]
    pub const fn tasks(&self) -> &TasksResource {
        &self.tasks
    }

    /// Projects (`/projects`).
    #[must_use]
    pub const fn projects(&self) -> &ProjectsResource {
        &self.projects
    }

    /// Customers (`/customers`).
    #[must_use]
    pub const fn customers(&self) -> &CustomersResource {
        &self.customers
    }

    /// Task lists (`/task-lists`).
    #[must_use]
    pub const fn task_lists(&self) -> &TaskListsResource {
        &self.task_lists
    }

    /// Templates (`/templates`).
    #[must_use]
    pub const fn templates(&self) -> &TemplatesResource {
        &self.templates
    }

    /// Time entries (`/time-entries`).
    #[must_use]
    pub const fn time_entries(&self) -> &TimeEntriesResource {
        &self.time_entries
    }

    /// Teams (`/teams`).
    #[must_use]
    pub const fn teams(&self) -> &TeamsResource {
        &self.teams
    }

    /// Users (`/users`).
    #[must_use]
    pub const fn users(&self) -> &UsersResource {
        &self.users
    }

    /// Form responses (`/forms/responses`).
    #[must_use]
    pub const fn forms(&self) -> &FormsResource {
        &self.forms
    }
}
