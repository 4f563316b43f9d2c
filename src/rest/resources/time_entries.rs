//! Time entry resource implementation.
//!
//! Time entries record effort logged against a project, and optionally a
//! task. Entries can be approved by a project manager.
//!
//! # Example
//!
//! ```rust,ignore
//! use rocketlane_api::rest::{ListQuery, RestResource};
//! use rocketlane_api::rest::resources::TimeEntryFilter;
//!
//! let query = ListQuery::new().filter(TimeEntryFilter {
//!     user_id: Some("u-1".to_string()),
//!     from: Some("2024-06-01".to_string()),
//!     to: Some("2024-06-30".to_string()),
//!     billable: Some(true),
//!     ..Default::default()
//! });
//! let june = client.time_entries().list(Some(&query), None).await?;
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpError, HttpMethod};
use crate::rest::resources::common::Audit;
use crate::rest::{segment, Include, OperationOptions, Outcome, ResourceClient, RestResource};

/// Effort logged by one user on one day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,

    pub project_id: String,
    pub user_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// The day the work was done.
    pub date: String,

    /// Logged duration in minutes.
    pub duration_minutes: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,

    /// Audit metadata.
    #[serde(flatten)]
    pub audit: Audit,
}

/// Body for creating or updating a time entry.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntryInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,

    pub project_id: String,
    pub user_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    pub date: String,
    pub duration_minutes: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
}

/// Filter accepted by the time entry list endpoint.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntryFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// Earliest entry date, inclusive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,

    /// Latest entry date, inclusive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
}

/// Facade for `/time-entries`.
#[derive(Clone, Debug)]
pub struct TimeEntriesResource {
    client: ResourceClient,
}

impl TimeEntriesResource {
    /// Binds the facade to a transport.
    #[must_use]
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self {
            client: ResourceClient::new(http, Self::PATH),
        }
    }

    /// Approves a time entry.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on any transport or decoding failure.
    pub async fn approve(
        &self,
        entry_id: &str,
        options: Option<OperationOptions>,
    ) -> Result<Outcome<TimeEntry>, HttpError> {
        let path = format!("/{}/approve", segment(entry_id));
        let builder = self.client.request(HttpMethod::Post, &path);
        self.client.send(builder, options).await
    }
}

impl RestResource for TimeEntriesResource {
    type Entity = TimeEntry;
    type CreateInput = TimeEntryInput;
    type UpdateInput = TimeEntryInput;
    type Filter = TimeEntryFilter;
    type Include = Include;

    const PATH: &'static str = "/time-entries";

    fn client(&self) -> &ResourceClient {
        &self.client
    }
}
