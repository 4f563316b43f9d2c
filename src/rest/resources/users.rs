//! User resource implementation.
//!
//! Users are created by invitation: `create` takes an [`InviteInput`] and
//! `update` a partial [`UserUpdate`]. Accounts are switched on and off with
//! [`UsersResource::activate`] and [`UsersResource::deactivate`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpError, HttpMethod};
use crate::rest::resources::common::Audit;
use crate::rest::{segment, Include, OperationOptions, Outcome, ResourceClient, RestResource};

/// A workspace user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,

    /// IANA time zone name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Whether the account can sign in.
    pub is_active: bool,

    /// Audit metadata.
    #[serde(flatten)]
    pub audit: Audit,
}

/// Body for inviting a user.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InviteInput {
    pub email: String,
    pub role: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

/// Partial body for updating a user. Unset fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

/// Filter accepted by the user list endpoint.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// Facade for `/users`.
#[derive(Clone, Debug)]
pub struct UsersResource {
    client: ResourceClient,
}

impl UsersResource {
    /// Binds the facade to a transport.
    #[must_use]
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self {
            client: ResourceClient::new(http, Self::PATH),
        }
    }

    /// Re-enables a deactivated user.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on any transport or decoding failure.
    pub async fn activate(
        &self,
        user_id: &str,
        options: Option<OperationOptions>,
    ) -> Result<Outcome<User>, HttpError> {
        let path = format!("/{}/activate", segment(user_id));
        let builder = self.client.request(HttpMethod::Post, &path);
        self.client.send(builder, options).await
    }

    /// Prevents a user from signing in.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on any transport or decoding failure.
    pub async fn deactivate(
        &self,
        user_id: &str,
        options: Option<OperationOptions>,
    ) -> Result<Outcome<User>, HttpError> {
        let path = format!("/{}/deactivate", segment(user_id));
        let builder = self.client.request(HttpMethod::Post, &path);
        self.client.send(builder, options).await
    }
}

impl RestResource for UsersResource {
    type Entity = User;
    type CreateInput = InviteInput;
    type UpdateInput = UserUpdate;
    type Filter = UserFilter;
    type Include = Include;

    const PATH: &'static str = "/users";

    fn client(&self) -> &ResourceClient {
        &self.client
    }
}
