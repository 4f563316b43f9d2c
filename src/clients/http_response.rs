//! HTTP response types for the Rocketlane API SDK.
//!
//! This module provides the [`HttpResponse`] envelope and the rules that turn
//! a raw status/headers/body triple into either a payload or an
//! [`HttpResponseError`].

use serde::de::DeserializeOwned;

use crate::clients::errors::{ErrorDetails, HttpError, HttpResponseError, DEFAULT_ERROR_MESSAGE};
use crate::clients::Headers;

/// The decoded body of a successful response.
#[derive(Clone, Debug, PartialEq)]
pub enum ResponsePayload {
    /// No body: a 204, an empty body, or a dry run.
    Empty,
    /// The body was declared as JSON and parsed.
    Json(serde_json::Value),
    /// Any other content type, kept as text.
    Text(String),
}

/// A response exactly as the executor received it.
#[derive(Clone, Debug, Default)]
pub struct RawResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The status reason phrase, if the transport reported one.
    pub reason: Option<String>,
    /// Response headers.
    pub headers: Headers,
    /// Raw body bytes.
    pub body: Vec<u8>,
}

/// A successful response from the Rocketlane API, or a dry-run placeholder.
///
/// # Example
///
/// ```rust
/// use rocketlane_api::clients::{HttpResponse, ResponsePayload};
///
/// let response = HttpResponse::dry_run();
/// assert!(response.is_dry_run());
/// assert_eq!(response.status, 0);
/// assert_eq!(response.payload, ResponsePayload::Empty);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    /// The HTTP status code, or `0` for a dry run.
    pub status: u16,
    /// Response headers.
    pub headers: Headers,
    /// The decoded body.
    pub payload: ResponsePayload,
}

impl HttpResponse {
    /// The envelope returned when a request was rendered instead of sent.
    #[must_use]
    pub const fn dry_run() -> Self {
        Self {
            status: 0,
            headers: Headers::new(),
            payload: ResponsePayload::Empty,
        }
    }

    /// Returns `true` if this envelope stands in for a request that was never sent.
    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.status == 0
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status >= 200 && self.status <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers.get("x-request-id")
    }

    /// Decodes the payload into `T`.
    ///
    /// An empty payload decodes as JSON `null`, and a text payload as a JSON
    /// string, so `()` and `Option<_>` targets accept bodiless responses.
    ///
    /// # Errors
    ///
    /// Returns the deserializer error if the payload does not match `T`.
    pub fn into_typed<T: DeserializeOwned>(self) -> Result<T, serde_json::Error> {
        let value = match self.payload {
            ResponsePayload::Empty => serde_json::Value::Null,
            ResponsePayload::Json(value) => value,
            ResponsePayload::Text(text) => serde_json::Value::String(text),
        };
        serde_json::from_value(value)
    }

    /// Interprets a raw response.
    ///
    /// - non-2xx statuses become [`HttpResponseError`]
    /// - 204 and empty bodies carry no payload
    /// - a `Content-Type` containing `application/json` is parsed as JSON
    /// - anything else is returned as text
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Response`] for non-2xx statuses and
    /// [`HttpError::Serialization`] when a body declared as JSON does not parse.
    pub fn from_raw(raw: RawResponse) -> Result<Self, HttpError> {
        let RawResponse {
            status,
            reason,
            headers,
            body,
        } = raw;

        if !(200..=299).contains(&status) {
            return Err(error_from_body(status, reason.as_deref(), &body).into());
        }

        let payload = if status == 204 || body.is_empty() {
            ResponsePayload::Empty
        } else if is_json(&headers) {
            ResponsePayload::Json(serde_json::from_slice(&body)?)
        } else {
            ResponsePayload::Text(String::from_utf8_lossy(&body).into_owned())
        };

        Ok(Self {
            status,
            headers,
            payload,
        })
    }
}

fn is_json(headers: &Headers) -> bool {
    headers
        .get("content-type")
        .is_some_and(|value| value.contains("application/json"))
}

fn error_from_body(status: u16, reason: Option<&str>, body: &[u8]) -> HttpResponseError {
    let text = String::from_utf8_lossy(body);
    let details = if text.is_empty() {
        None
    } else {
        Some(
            serde_json::from_str::<serde_json::Value>(&text)
                .map_or_else(|_| ErrorDetails::Text(text.to_string()), ErrorDetails::Json),
        )
    };

    let server_message = match &details {
        Some(ErrorDetails::Json(value)) => value
            .get("message")
            .and_then(serde_json::Value::as_str)
            .map(String::from),
        _ => None,
    };

    let message = server_message
        .or_else(|| reason.filter(|r| !r.is_empty()).map(String::from))
        .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string());

    HttpResponseError {
        code: status,
        message,
        details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(status: u16, content_type: Option<&str>, body: &str) -> RawResponse {
        let mut headers = Headers::new();
        if let Some(content_type) = content_type {
            headers.insert("Content-Type", content_type);
        }
        RawResponse {
            status,
            reason: None,
            headers,
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for status in 200..=299 {
            let response = HttpResponse {
                status,
                headers: Headers::new(),
                payload: ResponsePayload::Empty,
            };
            assert!(response.is_ok(), "Expected is_ok() for status {status}");
        }
    }

    #[test]
    fn test_json_body_is_parsed() {
        let response =
            HttpResponse::from_raw(raw(200, Some("application/json; charset=utf-8"), r#"{"id":1}"#))
                .unwrap();
        assert_eq!(response.payload, ResponsePayload::Json(json!({"id": 1})));
    }

    #[test]
    fn test_non_json_body_is_text() {
        let response = HttpResponse::from_raw(raw(200, Some("text/csv"), "a,b\n1,2")).unwrap();
        assert_eq!(response.payload, ResponsePayload::Text("a,b\n1,2".to_string()));

        let response = HttpResponse::from_raw(raw(200, None, "ok")).unwrap();
        assert_eq!(response.payload, ResponsePayload::Text("ok".to_string()));
    }

    #[test]
    fn test_no_content_has_empty_payload() {
        let response = HttpResponse::from_raw(raw(204, Some("application/json"), "")).unwrap();
        assert_eq!(response.payload, ResponsePayload::Empty);
        response.into_typed::<()>().unwrap();
    }

    #[test]
    fn test_malformed_json_is_a_serialization_error() {
        let result = HttpResponse::from_raw(raw(200, Some("application/json"), "{oops"));
        assert!(matches!(result, Err(HttpError::Serialization(_))));
    }

    #[test]
    fn test_error_message_taken_from_json_body() {
        let result = HttpResponse::from_raw(raw(
            404,
            Some("application/json"),
            r#"{"message":"not found","code":"E404"}"#,
        ));
        let Err(HttpError::Response(error)) = result else {
            panic!("expected response error");
        };
        assert_eq!(error.code, 404);
        assert_eq!(error.message, "not found");
        assert_eq!(
            error.details,
            Some(ErrorDetails::Json(json!({"message": "not found", "code": "E404"})))
        );
    }

    #[test]
    fn test_error_message_falls_back_to_reason_then_default() {
        let mut with_reason = raw(502, Some("text/html"), "<html>bad gateway</html>");
        with_reason.reason = Some("Bad Gateway".to_string());
        let Err(HttpError::Response(error)) = HttpResponse::from_raw(with_reason) else {
            panic!("expected response error");
        };
        assert_eq!(error.message, "Bad Gateway");
        assert_eq!(
            error.details,
            Some(ErrorDetails::Text("<html>bad gateway</html>".to_string()))
        );

        let Err(HttpError::Response(error)) =
            HttpResponse::from_raw(raw(500, Some("application/json"), r#"{"message":42}"#))
        else {
            panic!("expected response error");
        };
        assert_eq!(error.message, DEFAULT_ERROR_MESSAGE);

        let Err(HttpError::Response(error)) = HttpResponse::from_raw(raw(500, None, "")) else {
            panic!("expected response error");
        };
        assert!(error.details.is_none());
    }

    #[test]
    fn test_into_typed_decodes_entities() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Task {
            id: u64,
        }

        let response =
            HttpResponse::from_raw(raw(200, Some("application/json"), r#"{"id":7}"#)).unwrap();
        assert_eq!(response.into_typed::<Task>().unwrap(), Task { id: 7 });
    }

    #[test]
    fn test_request_id_extraction() {
        let mut raw = raw(200, None, "");
        raw.headers.insert("X-Request-Id", "req-1");
        let response = HttpResponse::from_raw(raw).unwrap();
        assert_eq!(response.request_id(), Some("req-1"));
        assert!(!response.is_dry_run());
    }
}
