//! REST resource infrastructure for the Rocketlane API.
//!
//! This module provides the building blocks every entity facade shares:
//!
//! - **[`RestResource`] trait**: The standard `list`, `retrieve`, `create`,
//!   `update` and `delete` operations
//! - **[`ResourceClient`]**: A transport handle bound to one path prefix
//! - **[`ListQuery`]**: Typed pagination, sort, filter and include parameters
//! - **[`OperationOptions`]**: Per-call dry-run, cancellation and headers
//! - **[`Outcome`]**: Either the decoded result or a dry-run marker
//! - **[`PaginatedResponse`]**: A Deref-based page wrapper
//!
//! # Example
//!
//! ```rust,ignore
//! use rocketlane_api::rest::{ListQuery, Outcome, RestResource, SortDirection};
//! use rocketlane_api::rest::resources::{TaskFilter, TaskStatus};
//!
//! let mut query = ListQuery::new()
//!     .limit(100)
//!     .sort_by("dueDate", SortDirection::Asc)
//!     .filter(TaskFilter {
//!         status: Some(TaskStatus::InProgress.into()),
//!         ..Default::default()
//!     });
//!
//! loop {
//!     let Outcome::Completed(page) = client.tasks().list(Some(&query), None).await? else {
//!         break;
//!     };
//!     for task in page.iter() {
//!         println!("{}: {}", task.id, task.name);
//!     }
//!     match page.next_page_token() {
//!         Some(token) => query = query.with_page_token(token),
//!         None => break,
//!     }
//! }
//! ```

mod list_query;
mod options;
mod resource;
mod response;

pub mod resources;

pub use list_query::{Include, IncludeFlags, ListQuery, SortDirection, SortOrder};
pub use options::OperationOptions;
pub use resource::{segment, ResourceClient, RestResource};
pub use response::{BulkFailure, BulkResult, Identifier, Outcome, PaginatedResponse};
