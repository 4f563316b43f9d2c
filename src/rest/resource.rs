//! REST Resource trait for CRUD operations.
//!
//! This module defines the [`RestResource`] trait, which gives every
//! Rocketlane entity facade the same `list`, `retrieve`, `create`, `update`
//! and `delete` operations, and [`ResourceClient`], the handle a facade uses
//! to send its own entity-specific calls.
//!
//! # Implementing a Resource
//!
//! 1. Define a struct holding a [`ResourceClient`]
//! 2. Implement `RestResource` with the entity, input, filter and include types
//! 3. Add entity-specific operations as inherent methods
//!
//! # Example
//!
//! ```rust,ignore
//! use rocketlane_api::rest::{Include, ResourceClient, RestResource};
//!
//! pub struct WidgetsResource {
//!     client: ResourceClient,
//! }
//!
//! impl RestResource for WidgetsResource {
//!     type Entity = Widget;
//!     type CreateInput = WidgetInput;
//!     type UpdateInput = WidgetInput;
//!     type Filter = WidgetFilter;
//!     type Include = Include;
//!
//!     const PATH: &'static str = "/widgets";
//!
//!     fn client(&self) -> &ResourceClient {
//!         &self.client
//!     }
//! }
//!
//! // Usage:
//! let widget = widgets.retrieve("w-1", None).await?;
//! let page = widgets.list(None, None).await?;
//! ```

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, RequestBody,
    ResponsePayload,
};
use crate::rest::{ListQuery, OperationOptions, Outcome, PaginatedResponse};

/// Percent-encodes an identifier for use as one path segment.
#[must_use]
pub fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

/// A transport handle bound to one resource path prefix.
#[derive(Clone, Debug)]
pub struct ResourceClient {
    http: Arc<HttpClient>,
    base_path: &'static str,
}

impl ResourceClient {
    /// Binds `http` to `base_path` (e.g. `/tasks`).
    #[must_use]
    pub const fn new(http: Arc<HttpClient>, base_path: &'static str) -> Self {
        Self { http, base_path }
    }

    /// Returns the bound path prefix.
    #[must_use]
    pub const fn base_path(&self) -> &'static str {
        self.base_path
    }

    /// Returns the underlying transport.
    #[must_use]
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Starts a request for `sub_path` beneath the prefix.
    ///
    /// `sub_path` is either empty or starts with `/`.
    #[must_use]
    pub fn request(&self, method: HttpMethod, sub_path: &str) -> HttpRequestBuilder {
        HttpRequest::builder(method, format!("{}{sub_path}", self.base_path))
    }

    /// Sends a request and decodes its payload.
    ///
    /// A bodiless 2xx decodes as JSON `null` when `T` accepts it (`()`,
    /// `Option<_>`), and yields [`Outcome::NoContent`] otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request is invalid, fails, or a non-empty
    /// payload does not decode into `T`.
    pub async fn send<T: DeserializeOwned>(
        &self,
        builder: HttpRequestBuilder,
        options: Option<OperationOptions>,
    ) -> Result<Outcome<T>, HttpError> {
        let builder = match options {
            Some(options) => options.apply(builder),
            None => builder,
        };
        let response = self.http.request(builder.build()?).await?;
        if response.is_dry_run() {
            return Ok(Outcome::DryRun);
        }
        if response.payload == ResponsePayload::Empty {
            return Ok(serde_json::from_value(serde_json::Value::Null)
                .map_or(Outcome::NoContent, Outcome::Completed));
        }
        Ok(Outcome::Completed(response.into_typed()?))
    }

    /// Sends a request whose payload, if any, is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request is invalid or fails.
    pub async fn send_discarding(
        &self,
        builder: HttpRequestBuilder,
        options: Option<OperationOptions>,
    ) -> Result<Outcome<()>, HttpError> {
        Ok(self
            .send::<serde::de::IgnoredAny>(builder, options)
            .await?
            .map(|_| ()))
    }

    /// Sends a GET with an optional list query.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Serialization`] if the query cannot be encoded,
    /// otherwise as [`send`](Self::send).
    pub async fn get<T, F, I>(
        &self,
        sub_path: &str,
        query: Option<&ListQuery<F, I>>,
        options: Option<OperationOptions>,
    ) -> Result<Outcome<T>, HttpError>
    where
        T: DeserializeOwned,
        F: Serialize,
        I: Serialize,
    {
        let mut builder = self.request(HttpMethod::Get, sub_path);
        if let Some(query) = query {
            builder = builder.query(query.to_query_params()?);
        }
        self.send(builder, options).await
    }

    /// Sends a request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Serialization`] if the body cannot be encoded,
    /// otherwise as [`send`](Self::send).
    pub async fn send_json<T, B>(
        &self,
        method: HttpMethod,
        sub_path: &str,
        body: &B,
        options: Option<OperationOptions>,
    ) -> Result<Outcome<T>, HttpError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let builder = self
            .request(method, sub_path)
            .body(RequestBody::json(body)?);
        self.send(builder, options).await
    }
}

/// A Rocketlane entity collection supporting the standard operations.
///
/// # Associated Types
///
/// - `Entity`: The entity returned by the endpoint
/// - `CreateInput` / `UpdateInput`: Request bodies for `create` / `update`
/// - `Filter`: The `filter` tree accepted by `list`
/// - `Include`: The `include` selection accepted by `list`
#[allow(async_fn_in_trait)]
pub trait RestResource {
    /// The entity type.
    type Entity: DeserializeOwned;

    /// Body for `create`.
    type CreateInput: Serialize;

    /// Body for `update`.
    type UpdateInput: Serialize;

    /// Filter for `list`.
    type Filter: Serialize;

    /// Include selection for `list`.
    type Include: Serialize;

    /// The path prefix of the collection (e.g. `/tasks`).
    const PATH: &'static str;

    /// Returns the bound transport handle.
    fn client(&self) -> &ResourceClient;

    /// Lists entities, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on any transport or decoding failure.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let query = ListQuery::new().limit(50);
    /// if let Outcome::Completed(page) = client.tasks().list(Some(&query), None).await? {
    ///     println!("{} tasks", page.len());
    /// }
    /// ```
    async fn list(
        &self,
        query: Option<&ListQuery<Self::Filter, Self::Include>>,
        options: Option<OperationOptions>,
    ) -> Result<Outcome<PaginatedResponse<Self::Entity>>, HttpError> {
        self.client().get("", query, options).await
    }

    /// Fetches one entity by id.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Response`] with code 404 if it does not exist.
    async fn retrieve(
        &self,
        id: &str,
        options: Option<OperationOptions>,
    ) -> Result<Outcome<Self::Entity>, HttpError> {
        let builder = self
            .client()
            .request(HttpMethod::Get, &format!("/{}", segment(id)));
        self.client().send(builder, options).await
    }

    /// Creates an entity.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on any transport or decoding failure.
    async fn create(
        &self,
        input: &Self::CreateInput,
        options: Option<OperationOptions>,
    ) -> Result<Outcome<Self::Entity>, HttpError> {
        self.client()
            .send_json(HttpMethod::Post, "", input, options)
            .await
    }

    /// Updates an entity.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on any transport or decoding failure.
    async fn update(
        &self,
        id: &str,
        input: &Self::UpdateInput,
        options: Option<OperationOptions>,
    ) -> Result<Outcome<Self::Entity>, HttpError> {
        self.client()
            .send_json(HttpMethod::Patch, &format!("/{}", segment(id)), input, options)
            .await
    }

    /// Deletes an entity.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on any transport failure.
    async fn delete(
        &self,
        id: &str,
        options: Option<OperationOptions>,
    ) -> Result<Outcome<()>, HttpError> {
        let builder = self
            .client()
            .request(HttpMethod::Delete, &format!("/{}", segment(id)));
        self.client().send_discarding(builder, options).await
    }
}
