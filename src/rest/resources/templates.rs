//! Template resource implementation.
//!
//! Templates are reusable project blueprints. A template must be published
//! before projects can be created from it.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpError, HttpMethod};
use crate::rest::resources::common::Audit;
use crate::rest::{segment, Include, OperationOptions, Outcome, ResourceClient, RestResource};

/// A project template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Audit metadata.
    #[serde(flatten)]
    pub audit: Audit,
}

/// Body for creating or updating a template.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TemplateInput {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Filter accepted by the template list endpoint.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TemplateFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// Facade for `/templates`.
#[derive(Clone, Debug)]
pub struct TemplatesResource {
    client: ResourceClient,
}

impl TemplatesResource {
    /// Binds the facade to a transport.
    #[must_use]
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self {
            client: ResourceClient::new(http, Self::PATH),
        }
    }

    /// Publishes a template.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on any transport or decoding failure.
    pub async fn publish(
        &self,
        template_id: &str,
        options: Option<OperationOptions>,
    ) -> Result<Outcome<Template>, HttpError> {
        let path = format!("/{}/publish", segment(template_id));
        let builder = self.client.request(HttpMethod::Post, &path);
        self.client.send(builder, options).await
    }
}

impl RestResource for TemplatesResource {
    type Entity = Template;
    type CreateInput = TemplateInput;
    type UpdateInput = TemplateInput;
    type Filter = TemplateFilter;
    type Include = Include;

    const PATH: &'static str = "/templates";

    fn client(&self) -> &ResourceClient {
        &self.client
    }
}
