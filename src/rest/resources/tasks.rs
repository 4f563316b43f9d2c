//! Task resource implementation.
//!
//! This module provides [`TasksResource`] for managing project tasks.
//! Besides the standard operations, tasks support:
//! - `bulk_update_status()` - Move many tasks to one status
//! - `assign()` - Assign users to tasks in bulk
//! - `add_comment()` / `list_comments()` - Task discussion
//! - `update_checklist()` - Replace the task checklist
//! - `link_time_entry()` - Attach an existing time entry
//!
//! # Example
//!
//! ```rust,ignore
//! use rocketlane_api::rest::{ListQuery, RestResource};
//! use rocketlane_api::rest::resources::{TaskFilter, TaskInclude, TaskStatus};
//!
//! let query = ListQuery::new()
//!     .filter(TaskFilter {
//!         project_id: Some("p-1".to_string()),
//!         status: Some(vec![TaskStatus::InProgress, TaskStatus::Blocked].into()),
//!         ..Default::default()
//!     })
//!     .include(TaskInclude {
//!         assignees: Some(true),
//!         ..Default::default()
//!     });
//! let page = client.tasks().list(Some(&query), None).await?;
//!
//! let result = client
//!     .tasks()
//!     .bulk_update_status(&["t-1", "t-2"], TaskStatus::Completed, None)
//!     .await?;
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpError, HttpMethod, RequestBody};
use crate::rest::resources::common::{Attachment, Audit, Comment, CustomFieldValue, DateRange, OneOrMany};
use crate::rest::{segment, BulkResult, OperationOptions, Outcome, ResourceClient, RestResource};

/// Workflow state of a task.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not yet begun.
    NotStarted,
    /// Being worked on.
    InProgress,
    /// Waiting on something else.
    Blocked,
    /// Done.
    Completed,
    /// Hidden from active views.
    Archived,
}

/// Priority of a task.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    /// Low priority.
    Low,
    /// Medium priority.
    Medium,
    /// High priority.
    High,
    /// Needs immediate attention.
    Urgent,
}

/// A unit of work within a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// The task id.
    pub id: String,

    /// The task name.
    pub name: String,

    /// Longer description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Current status.
    pub status: TaskStatus,

    /// Priority, if set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,

    /// Planned start date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    /// Due date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    /// When the task was completed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,

    /// The owning project.
    pub project_id: String,

    /// The task list the task belongs to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_list_id: Option<String>,

    /// Assigned users.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assignee_ids: Vec<String>,

    /// Users watching the task.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub watcher_ids: Vec<String>,

    /// Free-form tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Estimated effort in hours.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f64>,

    /// Logged effort in hours.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_hours: Option<f64>,

    /// Custom field values.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_fields: Vec<CustomFieldValue>,

    /// Audit metadata.
    #[serde(flatten)]
    pub audit: Audit,
}

/// Body for creating or updating a task.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskInput {
    /// The task name.
    pub name: String,

    /// The owning project.
    pub project_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_list_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_ids: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub watcher_ids: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Vec<CustomFieldValue>>,
}

/// Filter accepted by the task list endpoints.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_list_id: Option<String>,

    /// One status or several.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OneOrMany<TaskStatus>>,

    /// One priority or several.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<OneOrMany<TaskPriority>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub watcher_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    /// Due date window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<DateRange>,

    /// Start date window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<DateRange>,

    /// Custom field equality matches, keyed by field id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Related data to embed in task list results.
#[derive(Debug, Clone, Copy, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaskInclude {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignees: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub watchers: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub checklist: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_entries: Option<bool>,
}

/// One task-to-user assignment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaskAssignment {
    /// The task.
    pub task_id: String,
    /// The user assigned to it.
    pub user_id: String,
}

/// Body for adding a comment to a task.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CommentInput {
    /// The comment text.
    pub body: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,

    /// Hide the comment from customer-side users.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_internal: Option<bool>,
}

/// One checklist item.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItemInput {
    /// Existing item id; omit to create a new item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Item text.
    pub label: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_done: Option<bool>,
}

/// Body for replacing a task checklist.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct UpdateChecklistInput {
    /// The full list of items, in order.
    pub items: Vec<ChecklistItemInput>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BulkStatusBody<'a> {
    task_ids: &'a [&'a str],
    status: TaskStatus,
}

#[derive(Serialize)]
struct AssignBody<'a> {
    assignments: &'a [TaskAssignment],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LinkTimeEntryBody<'a> {
    time_entry_id: &'a str,
}

/// Facade for `/tasks`.
#[derive(Clone, Debug)]
pub struct TasksResource {
    client: ResourceClient,
}

impl TasksResource {
    /// Binds the facade to a transport.
    #[must_use]
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self {
            client: ResourceClient::new(http, Self::PATH),
        }
    }

    /// Sets the status of many tasks at once.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on any transport or decoding failure. Per-task
    /// rejections are reported in the result's `failures`.
    pub async fn bulk_update_status(
        &self,
        task_ids: &[&str],
        status: TaskStatus,
        options: Option<OperationOptions>,
    ) -> Result<Outcome<BulkResult<Task>>, HttpError> {
        let body = BulkStatusBody { task_ids, status };
        self.client
            .send_json(HttpMethod::Post, "/bulk/status", &body, options)
            .await
    }

    /// Assigns users to tasks.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on any transport or decoding failure.
    pub async fn assign(
        &self,
        assignments: &[TaskAssignment],
        options: Option<OperationOptions>,
    ) -> Result<Outcome<BulkResult<TaskAssignment>>, HttpError> {
        self.client
            .send_json(HttpMethod::Post, "/assignments", &AssignBody { assignments }, options)
            .await
    }

    /// Adds a comment to a task.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on any transport or decoding failure.
    pub async fn add_comment(
        &self,
        task_id: &str,
        input: &CommentInput,
        options: Option<OperationOptions>,
    ) -> Result<Outcome<Comment>, HttpError> {
        let path = format!("/{}/comments", segment(task_id));
        self.client
            .send_json(HttpMethod::Post, &path, input, options)
            .await
    }

    /// Lists the comments on a task.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on any transport or decoding failure.
    pub async fn list_comments(
        &self,
        task_id: &str,
        options: Option<OperationOptions>,
    ) -> Result<Outcome<Vec<Comment>>, HttpError> {
        let path = format!("/{}/comments", segment(task_id));
        let builder = self.client.request(HttpMethod::Get, &path);
        self.client.send(builder, options).await
    }

    /// Replaces a task's checklist.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on any transport or decoding failure.
    pub async fn update_checklist(
        &self,
        task_id: &str,
        input: &UpdateChecklistInput,
        options: Option<OperationOptions>,
    ) -> Result<Outcome<Task>, HttpError> {
        let path = format!("/{}/checklist", segment(task_id));
        self.client
            .send_json(HttpMethod::Put, &path, input, options)
            .await
    }

    /// Links an existing time entry to a task.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on any transport failure.
    pub async fn link_time_entry(
        &self,
        task_id: &str,
        time_entry_id: &str,
        options: Option<OperationOptions>,
    ) -> Result<Outcome<()>, HttpError> {
        let path = format!("/{}/time-entries", segment(task_id));
        let builder = self
            .client
            .request(HttpMethod::Post, &path)
            .body(RequestBody::json(&LinkTimeEntryBody { time_entry_id })?);
        self.client.send_discarding(builder, options).await
    }
}

impl RestResource for TasksResource {
    type Entity = Task;
    type CreateInput = TaskInput;
    type UpdateInput = TaskInput;
    type Filter = TaskFilter;
    type Include = TaskInclude;

    const PATH: &'static str = "/tasks";

    fn client(&self) -> &ResourceClient {
        &self.client
    }
}
