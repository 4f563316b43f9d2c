//! Form response resource implementation.
//!
//! Form responses are submissions of customer-facing forms. The facade is
//! bound to `/forms/responses` and supports the standard operations only.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clients::HttpClient;
use crate::rest::resources::common::Audit;
use crate::rest::{Include, ResourceClient, RestResource};

/// One submitted form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormResponse {
    pub id: String,
    pub form_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,

    /// Id of the submitting user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_by: Option<String>,

    /// Answers keyed by question id.
    pub answers: serde_json::Map<String, serde_json::Value>,

    /// Audit metadata.
    #[serde(flatten)]
    pub audit: Audit,
}

/// Body for submitting or amending a form response.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormResponseInput {
    pub form_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,

    pub answers: serde_json::Map<String, serde_json::Value>,
}

/// Filter accepted by the form response list endpoint.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormResponseFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_by: Option<String>,
}

/// Facade for `/forms/responses`.
#[derive(Clone, Debug)]
pub struct FormsResource {
    client: ResourceClient,
}

impl FormsResource {
    /// Binds the facade to a transport.
    #[must_use]
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self {
            client: ResourceClient::new(http, Self::PATH),
        }
    }
}

impl RestResource for FormsResource {
    type Entity = FormResponse;
    type CreateInput = FormResponseInput;
    type UpdateInput = FormResponseInput;
    type Filter = FormResponseFilter;
    type Include = Include;

    const PATH: &'static str = "/forms/responses";

    fn client(&self) -> &ResourceClient {
        &self.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_form_response_answers_keep_order() {
        let response: FormResponse = serde_json::from_value(json!({
            "id": "r-1",
            "formId": "f-1",
            "answers": {"q2": "yes", "q1": 3}
        }))
        .unwrap();

        let keys: Vec<&String> = response.answers.keys().collect();
        assert_eq!(keys, vec!["q2", "q1"]);
    }
}
