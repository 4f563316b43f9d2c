//! Project resource implementation.
//!
//! This module provides [`ProjectsResource`] for managing customer projects.
//!
//! # Project Lifecycle
//!
//! - `archive()` / `unarchive()` - Hide a project from active views, or bring it back
//! - `clone_project()` - Start a new project from an existing one
//! - `summary()` - Health and progress rollup across projects
//!
//! # Example
//!
//! ```rust,ignore
//! use rocketlane_api::rest::{ListQuery, RestResource};
//! use rocketlane_api::rest::resources::{CloneProjectInput, ProjectFilter, ProjectStatus};
//!
//! let query = ListQuery::new().filter(ProjectFilter {
//!     status: Some(ProjectStatus::Active.into()),
//!     ..Default::default()
//! });
//! let active = client.projects().list(Some(&query), None).await?;
//!
//! let copy = client
//!     .projects()
//!     .clone_project(
//!         &CloneProjectInput {
//!             project_id: "p-1".to_string(),
//!             name: Some("Acme onboarding (EU)".to_string()),
//!             start_date: None,
//!         },
//!         None,
//!     )
//!     .await?;
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpError, HttpMethod};
use crate::rest::resources::common::{Audit, CustomFieldValue, DateRange, Health, OneOrMany};
use crate::rest::resources::tasks::{Task, TaskFilter};
use crate::rest::resources::templates::Template;
use crate::rest::{
    segment, ListQuery, OperationOptions, Outcome, PaginatedResponse, ResourceClient, RestResource,
};

/// Lifecycle state of a project.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Being set up.
    Draft,
    /// In progress.
    Active,
    /// Finished.
    Completed,
    /// Hidden from active views.
    Archived,
    /// Paused.
    OnHold,
}

/// A customer project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// The project id.
    pub id: String,

    /// The project name.
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The internal owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,

    /// The customer the project is delivered to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,

    /// Current lifecycle state.
    pub status: ProjectStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,

    /// The template the project was created from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_fields: Vec<CustomFieldValue>,

    /// Audit metadata.
    #[serde(flatten)]
    pub audit: Audit,
}

/// Body for creating or updating a project.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInput {
    /// The project name.
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Vec<CustomFieldValue>>,
}

/// Filter accepted by the project list endpoints.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFilter {
    /// One status or several.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OneOrMany<ProjectStatus>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateRange>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateRange>,
}

/// Related data to embed in project list results.
#[derive(Debug, Clone, Copy, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInclude {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_lists: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<bool>,
}

/// Body for cloning a project.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CloneProjectInput {
    /// The project to copy.
    pub project_id: String,

    /// Name of the copy; defaults server-side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Start date of the copy; schedule offsets are kept.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
}

/// Progress rollup for one project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub id: String,
    pub name: String,
    pub status: ProjectStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health: Option<Health>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overdue_tasks: Option<u64>,
}

/// Facade for `/projects`.
#[derive(Clone, Debug)]
pub struct ProjectsResource {
    client: ResourceClient,
}

impl ProjectsResource {
    /// Binds the facade to a transport.
    #[must_use]
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self {
            client: ResourceClient::new(http, Self::PATH),
        }
    }

    /// Archives a project.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on any transport or decoding failure.
    pub async fn archive(
        &self,
        project_id: &str,
        options: Option<OperationOptions>,
    ) -> Result<Outcome<Project>, HttpError> {
        let path = format!("/{}/archive", segment(project_id));
        let builder = self.client.request(HttpMethod::Post, &path);
        self.client.send(builder, options).await
    }

    /// Restores an archived project.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on any transport or decoding failure.
    pub async fn unarchive(
        &self,
        project_id: &str,
        options: Option<OperationOptions>,
    ) -> Result<Outcome<Project>, HttpError> {
        let path = format!("/{}/unarchive", segment(project_id));
        let builder = self.client.request(HttpMethod::Post, &path);
        self.client.send(builder, options).await
    }

    /// Creates a new project by copying an existing one.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on any transport or decoding failure.
    pub async fn clone_project(
        &self,
        input: &CloneProjectInput,
        options: Option<OperationOptions>,
    ) -> Result<Outcome<Project>, HttpError> {
        self.client
            .send_json(HttpMethod::Post, "/clone", input, options)
            .await
    }

    /// Returns the progress rollup of every visible project.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on any transport or decoding failure.
    pub async fn summary(
        &self,
        options: Option<OperationOptions>,
    ) -> Result<Outcome<Vec<ProjectSummary>>, HttpError> {
        let builder = self.client.request(HttpMethod::Get, "/summary");
        self.client.send(builder, options).await
    }

    /// Lists the tasks of a project.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on any transport or decoding failure.
    pub async fn list_tasks(
        &self,
        project_id: &str,
        query: Option<&ListQuery<TaskFilter>>,
        options: Option<OperationOptions>,
    ) -> Result<Outcome<PaginatedResponse<Task>>, HttpError> {
        let path = format!("/{}/tasks", segment(project_id));
        self.client.get(&path, query, options).await
    }

    /// Lists the templates available for new projects.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on any transport or decoding failure.
    pub async fn list_templates(
        &self,
        options: Option<OperationOptions>,
    ) -> Result<Outcome<Vec<Template>>, HttpError> {
        let builder = self.client.request(HttpMethod::Get, "/templates");
        self.client.send(builder, options).await
    }
}

impl RestResource for ProjectsResource {
    type Entity = Project;
    type CreateInput = ProjectInput;
    type UpdateInput = ProjectInput;
    type Filter = ProjectFilter;
    type Include = ProjectInclude;

    const PATH: &'static str = "/projects";

    fn client(&self) -> &ResourceClient {
        &self.client
    }
}
