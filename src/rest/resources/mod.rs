//! Rocketlane entity facades.
//!
//! Each submodule holds one entity collection: its wire types, its list
//! filter, and a facade implementing [`RestResource`](crate::rest::RestResource)
//! plus the entity-specific operations.
//!
//! | Facade | Path |
//! |--------|------|
//! | [`TasksResource`] | `/tasks` |
//! | [`ProjectsResource`] | `/projects` |
//! | [`CustomersResource`] | `/customers` |
//! | [`TaskListsResource`] | `/task-lists` |
//! | [`TemplatesResource`] | `/templates` |
//! | [`TimeEntriesResource`] | `/time-entries` |
//! | [`TeamsResource`] | `/teams` |
//! | [`UsersResource`] | `/users` |
//! | [`FormsResource`] | `/forms/responses` |
//!
//! Facades are normally obtained from
//! [`RocketlaneClient`](crate::RocketlaneClient) rather than built directly.

mod common;
mod customers;
mod forms;
mod projects;
mod task_lists;
mod tasks;
mod teams;
mod templates;
mod time_entries;
mod users;

pub use common::{Attachment, Audit, Comment, CustomFieldValue, DateRange, Health, OneOrMany};
pub use customers::{Customer, CustomerFilter, CustomerInput, CustomersResource};
pub use forms::{FormResponse, FormResponseFilter, FormResponseInput, FormsResource};
pub use projects::{
    CloneProjectInput, Project, ProjectFilter, ProjectInclude, ProjectInput, ProjectStatus,
    ProjectSummary, ProjectsResource,
};
pub use task_lists::{TaskList, TaskListFilter, TaskListInput, TaskListsResource};
pub use tasks::{
    ChecklistItemInput, CommentInput, Task, TaskAssignment, TaskFilter, TaskInclude, TaskInput,
    TaskPriority, TaskStatus, TasksResource, UpdateChecklistInput,
};
pub use teams::{Team, TeamFilter, TeamInput, TeamsResource};
pub use templates::{Template, TemplateFilter, TemplateInput, TemplatesResource};
pub use time_entries::{TimeEntriesResource, TimeEntry, TimeEntryFilter, TimeEntryInput};
pub use users::{InviteInput, User, UserFilter, UserUpdate, UsersResource};
