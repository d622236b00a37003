//! Transport collaborator — the capability that actually performs a request.
//!
//! The executor never touches sockets itself. It hands a URL and a merged
//! [`RequestConfig`] to a [`Transport`] and races the returned future against
//! its own timer. [`ReqwestTransport`] is the default implementation.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::{FormErrors, ServerError};
use crate::http::config::{Headers, RequestConfig};

/// Performs a single HTTP exchange.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn perform(
        &self,
        url: &str,
        config: &RequestConfig,
    ) -> Result<RawResponse, TransportFailure>;
}

/// Successful transport outcome, passed through to the caller untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub headers: Headers,
    pub body: String,
}

impl RawResponse {
    /// Look up a response header, ignoring case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// Failed transport outcome, before classification.
///
/// `status` is absent for failures that never produced an HTTP response
/// (connection refused, DNS, TLS, ...).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransportFailure {
    pub status: Option<u16>,
    pub body: Option<String>,
    pub message: String,
}

impl TransportFailure {
    /// A response arrived but its status was not a success.
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            body: Some(body.into()),
            message: format!("HTTP status {status}"),
        }
    }

    /// No response arrived at all.
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            status: None,
            body: None,
            message: message.into(),
        }
    }

    /// Attach the status of a response whose body could not be read.
    pub fn at_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// The structured error document in the body, if it parses as one.
    pub fn server_error(&self) -> Option<ServerError> {
        self.body
            .as_deref()
            .and_then(|body| serde_json::from_str(body).ok())
    }

    /// Field validation errors in the body, if it parses as such.
    pub fn form_errors(&self) -> Option<FormErrors> {
        self.body
            .as_deref()
            .and_then(|body| serde_json::from_str(body).ok())
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for TransportFailure {
    fn from(err: reqwest::Error) -> Self {
        Self {
            status: err.status().map(|s| s.as_u16()),
            body: None,
            message: err.to_string(),
        }
    }
}

// ─── reqwest ─────────────────────────────────────────────────────────────────

/// Default transport backed by `reqwest`.
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

#[cfg(feature = "http")]
impl ReqwestTransport {
    pub fn new() -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: reqwest::Client::builder().build()?,
        })
    }

    /// Wrap an existing, pre-configured client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[cfg(feature = "http")]
#[async_trait]
impl Transport for ReqwestTransport {
    async fn perform(
        &self,
        url: &str,
        config: &RequestConfig,
    ) -> Result<RawResponse, TransportFailure> {
        let mut req = self.client.request(config.method.into(), url);
        for (name, value) in &config.headers {
            req = req.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &config.body {
            req = req.body(body.clone());
        }

        let resp = req.send().await?;
        let status = resp.status();
        let headers: Headers = resp
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = match resp.text().await {
            Ok(body) => body,
            // The status line already arrived; keep it for classification.
            Err(err) => return Err(TransportFailure::from(err).at_status(status.as_u16())),
        };

        if status.is_success() {
            Ok(RawResponse {
                status: status.as_u16(),
                headers,
                body,
            })
        } else {
            Err(TransportFailure::from_status(status.as_u16(), body))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_response_header_case_insensitive() {
        let mut headers = Headers::new();
        headers.insert("authorization".to_string(), "Bearer abc".to_string());
        let resp = RawResponse {
            status: 200,
            headers,
            body: String::new(),
        };
        assert_eq!(resp.header("Authorization"), Some("Bearer abc"));
        assert_eq!(resp.header("X-Missing"), None);
    }

    #[test]
    fn test_raw_response_json() {
        let resp = RawResponse {
            status: 200,
            headers: Headers::new(),
            body: r#"{"status":"ok"}"#.to_string(),
        };
        let value: serde_json::Value = resp.json().unwrap();
        assert_eq!(value["status"], "ok");
    }

    #[test]
    fn test_failure_server_error_document() {
        let failure = TransportFailure::from_status(
            401,
            r#"{"id":"x1","code":"unauthorized","status":"401","detail":"bad token","meta":{}}"#,
        );
        let doc = failure.server_error().unwrap();
        assert_eq!(doc.code, "unauthorized");
        assert_eq!(doc.detail, "bad token");
        assert_eq!(doc.status, "401");
    }

    #[test]
    fn test_failure_form_errors_document() {
        let failure = TransportFailure::from_status(
            400,
            r#"{"fields":[{"field":"name","errors":["is required"]}]}"#,
        );
        let doc = failure.form_errors().unwrap();
        assert_eq!(doc.fields.len(), 1);
        assert_eq!(doc.fields[0].field, "name");
        assert_eq!(doc.fields[0].errors, vec!["is required".to_string()]);
    }

    #[test]
    fn test_network_failure_has_no_status() {
        let failure = TransportFailure::network("connection refused");
        assert_eq!(failure.status, None);
        assert!(failure.server_error().is_none());
    }

    #[test]
    fn test_unreadable_body_keeps_status() {
        let failure = TransportFailure::network("connection reset").at_status(503);
        assert_eq!(failure.status, Some(503));
        let err = crate::http::classify(failure);
        assert_eq!(err.kind, crate::error::ErrorKind::Unavailable);
    }
}
