//! Task list resource implementation.
//!
//! Task lists group the tasks of a project into phases. Tasks can be listed
//! or created directly under a task list.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpError, HttpMethod};
use crate::rest::resources::common::Audit;
use crate::rest::resources::tasks::{Task, TaskFilter, TaskInput};
use crate::rest::{
    segment, Include, ListQuery, OperationOptions, Outcome, PaginatedResponse, ResourceClient,
    RestResource,
};

/// A named group of tasks within a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaskList {
    pub id: String,
    pub name: String,
    pub project_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Position among the project's task lists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,

    /// Audit metadata.
    #[serde(flatten)]
    pub audit: Audit,
}

/// Body for creating or updating a task list.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaskListInput {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

/// Filter accepted by the task list endpoint.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaskListFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// Facade for `/task-lists`.
#[derive(Clone, Debug)]
pub struct TaskListsResource {
    client: ResourceClient,
}

impl TaskListsResource {
    /// Binds the facade to a transport.
    #[must_use]
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self {
            client: ResourceClient::new(http, Self::PATH),
        }
    }

    /// Lists the tasks in a task list.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on any transport or decoding failure.
    pub async fn list_tasks(
        &self,
        task_list_id: &str,
        query: Option<&ListQuery<TaskFilter>>,
        options: Option<OperationOptions>,
    ) -> Result<Outcome<PaginatedResponse<Task>>, HttpError> {
        let path = format!("/{}/tasks", segment(task_list_id));
        self.client.get(&path, query, options).await
    }

    /// Creates a task inside a task list.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on any transport or decoding failure.
    pub async fn create_task(
        &self,
        task_list_id: &str,
        input: &TaskInput,
        options: Option<OperationOptions>,
    ) -> Result<Outcome<Task>, HttpError> {
        let path = format!("/{}/tasks", segment(task_list_id));
        self.client
            .send_json(HttpMethod::Post, &path, input, options)
            .await
    }
}

impl RestResource for TaskListsResource {
    type Entity = TaskList;
    type CreateInput = TaskListInput;
    type UpdateInput = TaskListInput;
    type Filter = TaskListFilter;
    type Include = Include;

    const PATH: &'static str = "/task-lists";

    fn client(&self) -> &ResourceClient {
        &self.client
    }
}
