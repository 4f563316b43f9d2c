//! Team resource implementation.
//!
//! Teams group users. Membership is managed with
//! [`TeamsResource::add_member`] and [`TeamsResource::remove_member`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpError, HttpMethod};
use crate::rest::resources::common::Audit;
use crate::rest::{segment, Include, OperationOptions, Outcome, ResourceClient, RestResource};

/// A group of users.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub member_ids: Vec<String>,

    /// Audit metadata.
    #[serde(flatten)]
    pub audit: Audit,
}

/// Body for creating or updating a team.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeamInput {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_ids: Option<Vec<String>>,
}

/// Filter accepted by the team list endpoint.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeamFilter {
    /// Only teams containing this user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MemberBody<'a> {
    member_id: &'a str,
}

/// Facade for `/teams`.
#[derive(Clone, Debug)]
pub struct TeamsResource {
    client: ResourceClient,
}

impl TeamsResource {
    /// Binds the facade to a transport.
    #[must_use]
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self {
            client: ResourceClient::new(http, Self::PATH),
        }
    }

    /// Adds a user to a team.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on any transport or decoding failure.
    pub async fn add_member(
        &self,
        team_id: &str,
        member_id: &str,
        options: Option<OperationOptions>,
    ) -> Result<Outcome<Team>, HttpError> {
        let path = format!("/{}/members", segment(team_id));
        self.client
            .send_json(HttpMethod::Post, &path, &MemberBody { member_id }, options)
            .await
    }

    /// Removes a user from a team.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on any transport failure.
    pub async fn remove_member(
        &self,
        team_id: &str,
        member_id: &str,
        options: Option<OperationOptions>,
    ) -> Result<Outcome<()>, HttpError> {
        let path = format!("/{}/members/{}", segment(team_id), segment(member_id));
        let builder = self.client.request(HttpMethod::Delete, &path);
        self.client.send_discarding(builder, options).await
    }
}

impl RestResource for TeamsResource {
    type Entity = Team;
    type CreateInput = TeamInput;
    type UpdateInput = TeamInput;
    type Filter = TeamFilter;
    type Include = Include;

    const PATH: &'static str = "/teams";

    fn client(&self) -> &ResourceClient {
        &self.client
    }
}
