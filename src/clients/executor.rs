//! The HTTP execution seam.
//!
//! [`HttpClient`](crate::clients::HttpClient) builds a [`PreparedRequest`] and
//! hands it to an [`HttpExecutor`]. [`ReqwestExecutor`] is the default; any
//! other implementation can be injected with
//! [`HttpClient::with_executor`](crate::clients::HttpClient::with_executor).

use async_trait::async_trait;

use crate::clients::dry_run::RenderedBody;
use crate::clients::errors::HttpError;
use crate::clients::http_request::{FormData, FormPart};
use crate::clients::http_response::RawResponse;
use crate::clients::{Headers, HttpMethod};
use crate::error::ConfigError;

/// A request body after serialization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreparedBody {
    /// Serialized text, normally JSON.
    Text(String),
    /// A multipart form, encoded by the executor.
    Form(FormData),
}

impl PreparedBody {
    /// Returns the body as it appears in a dry-run command.
    #[must_use]
    pub fn rendered(&self) -> RenderedBody<'_> {
        match self {
            Self::Text(text) => RenderedBody::Text(text),
            Self::Form(_) => RenderedBody::Form,
        }
    }
}

/// A fully resolved request, ready to put on the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Absolute URL including the query string.
    pub url: String,
    /// Final merged headers.
    pub headers: Headers,
    /// Serialized body, if any.
    pub body: Option<PreparedBody>,
}

/// Performs one HTTP exchange.
///
/// Implementations return every response they receive, whatever its status;
/// status interpretation happens in the client.
#[async_trait]
pub trait HttpExecutor: Send + Sync {
    /// Sends `request` and collects the full response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] when the exchange cannot be completed.
    async fn execute(&self, request: PreparedRequest) -> Result<RawResponse, HttpError>;
}

/// The default executor, backed by `reqwest` with rustls.
#[derive(Clone, Debug)]
pub struct ReqwestExecutor {
    client: reqwest::Client,
}

impl ReqwestExecutor {
    /// Creates an executor with a fresh connection pool.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpExecutorUnavailable`] if the TLS backend
    /// cannot be initialized.
    pub fn new() -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .map_err(|e| ConfigError::HttpExecutorUnavailable {
                reason: e.to_string(),
            })?;
        Ok(Self { client })
    }

    /// Wraps an existing `reqwest` client, sharing its pool.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Patch => reqwest::Method::PATCH,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

fn to_multipart(form: FormData) -> Result<reqwest::multipart::Form, reqwest::Error> {
    let mut multipart = reqwest::multipart::Form::new();
    for part in form.parts() {
        multipart = match part.clone() {
            FormPart::Text { name, value } => multipart.text(name, value),
            FormPart::File {
                name,
                file_name,
                content_type,
                bytes,
            } => {
                let mut file = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
                if let Some(content_type) = content_type {
                    file = file.mime_str(&content_type)?;
                }
                multipart.part(name, file)
            }
        };
    }
    Ok(multipart)
}

#[async_trait]
impl HttpExecutor for ReqwestExecutor {
    async fn execute(&self, request: PreparedRequest) -> Result<RawResponse, HttpError> {
        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), &request.url);

        for (name, value) in request.headers.iter() {
            builder = builder.header(name, value);
        }

        builder = match request.body {
            Some(PreparedBody::Text(text)) => builder.body(text),
            Some(PreparedBody::Form(form)) => builder.multipart(to_multipart(form)?),
            None => builder,
        };

        let response = builder.send().await?;

        let status = response.status();
        let headers: Headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| value.to_str().ok().map(|value| (name.as_str(), value)))
            .collect();
        let body = response.bytes().await?.to_vec();

        Ok(RawResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().map(String::from),
            headers,
            body,
        })
    }
}
