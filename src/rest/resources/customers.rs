//! Customer resource implementation.
//!
//! Customers are the accounts projects are delivered to. Besides the
//! standard operations, [`CustomersResource::list_projects`] lists the
//! projects of one customer.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpError};
use crate::rest::resources::common::{Audit, CustomFieldValue, Health};
use crate::rest::resources::projects::{Project, ProjectFilter};
use crate::rest::{
    segment, Include, ListQuery, OperationOptions, Outcome, PaginatedResponse, ResourceClient,
    RestResource,
};

/// A customer account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// The customer id.
    pub id: String,

    /// The customer name.
    pub name: String,

    /// The customer's primary web domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_contact_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub health: Option<Health>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_fields: Vec<CustomFieldValue>,

    /// Audit metadata.
    #[serde(flatten)]
    pub audit: Audit,
}

/// Body for creating or updating a customer.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInput {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_contact_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub health: Option<Health>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Vec<CustomFieldValue>>,
}

/// Filter accepted by the customer list endpoint.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health: Option<Health>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// Facade for `/customers`.
#[derive(Clone, Debug)]
pub struct CustomersResource {
    client: ResourceClient,
}

impl CustomersResource {
    /// Binds the facade to a transport.
    #[must_use]
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self {
            client: ResourceClient::new(http, Self::PATH),
        }
    }

    /// Lists the projects delivered to a customer.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on any transport or decoding failure.
    pub async fn list_projects(
        &self,
        customer_id: &str,
        query: Option<&ListQuery<ProjectFilter>>,
        options: Option<OperationOptions>,
    ) -> Result<Outcome<PaginatedResponse<Project>>, HttpError> {
        let path = format!("/{}/projects", segment(customer_id));
        self.client.get(&path, query, options).await
    }
}

impl RestResource for CustomersResource {
    type Entity = Customer;
    type CreateInput = CustomerInput;
    type UpdateInput = CustomerInput;
    type Filter = CustomerFilter;
    type Include = Include;

    const PATH: &'static str = "/customers";

    fn client(&self) -> &ResourceClient {
        &self.client
    }
}
