//! Unified SDK error types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::http::transport::TransportFailure;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[cfg(feature = "http")]
    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Query encoding error: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),
}

impl SdkError {
    /// The normalized error kind, if this error came back from the API.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            SdkError::Api(e) => Some(e.kind),
            _ => None,
        }
    }
}

/// Closed set of failure kinds a request can settle with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    #[serde(rename = "invalid_credentials")]
    Unauthorized,
    #[serde(rename = "timeout_error")]
    Timeout,
    #[serde(rename = "internal_error")]
    Internal,
    #[serde(rename = "service_unavailable_error")]
    Unavailable,
    #[serde(rename = "unknown_error")]
    Unknown,
}

impl ErrorKind {
    /// Map an HTTP status code onto a kind. Anything outside the table is `Unknown`.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            408 => Self::Timeout,
            500 => Self::Internal,
            503 => Self::Unavailable,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthorized => "invalid_credentials",
            Self::Timeout => "timeout_error",
            Self::Internal => "internal_error",
            Self::Unavailable => "service_unavailable_error",
            Self::Unknown => "unknown_error",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Normalized request failure.
///
/// Produced by the error classifier or by the executor's timeout. Every kind
/// except `Unknown` carries the raw failure it was derived from, when one exists.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{kind}{}", message_suffix(.message))]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: Option<String>,
    pub raw_response: Option<TransportFailure>,
}

impl ApiError {
    /// The executor's own timer won the race against the transport.
    pub fn request_timeout() -> Self {
        Self {
            kind: ErrorKind::Timeout,
            message: Some("request_timeout".to_string()),
            raw_response: None,
        }
    }

    pub fn unknown() -> Self {
        Self {
            kind: ErrorKind::Unknown,
            message: None,
            raw_response: None,
        }
    }

    /// HTTP status of the underlying failure, if any.
    pub fn status(&self) -> Option<u16> {
        self.raw_response.as_ref().and_then(|r| r.status)
    }
}

fn message_suffix(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

// ─── Server error documents ──────────────────────────────────────────────────

/// Structured error document returned by the API on failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerError {
    /// Application-specific error code.
    pub code: String,
    /// Human-readable explanation of this occurrence.
    pub detail: String,
    pub id: String,
    pub meta: HashMap<String, serde_json::Value>,
    /// HTTP status code, as a string.
    pub status: String,
}

/// Validation failures returned for a rejected form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormErrors {
    pub fields: Vec<FieldErrors>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldErrors {
    pub field: String,
    pub errors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_from_status_table() {
        assert_eq!(ErrorKind::from_status(401), ErrorKind::Unauthorized);
        assert_eq!(ErrorKind::from_status(408), ErrorKind::Timeout);
        assert_eq!(ErrorKind::from_status(500), ErrorKind::Internal);
        assert_eq!(ErrorKind::from_status(503), ErrorKind::Unavailable);
        assert_eq!(ErrorKind::from_status(404), ErrorKind::Unknown);
        assert_eq!(ErrorKind::from_status(502), ErrorKind::Unknown);
        assert_eq!(ErrorKind::from_status(200), ErrorKind::Unknown);
    }

    #[test]
    fn test_error_kind_wire_codes() {
        assert_eq!(
            serde_json::to_string(&ErrorKind::Unauthorized).unwrap(),
            "\"invalid_credentials\""
        );
        assert_eq!(ErrorKind::Unavailable.to_string(), "service_unavailable_error");
    }

    #[test]
    fn test_request_timeout_display() {
        let err = ApiError::request_timeout();
        assert_eq!(err.to_string(), "timeout_error: request_timeout");
        assert!(err.raw_response.is_none());
    }

    #[test]
    fn test_sdk_error_kind() {
        let err = SdkError::from(ApiError::unknown());
        assert_eq!(err.kind(), Some(ErrorKind::Unknown));
        assert_eq!(SdkError::Validation("x".into()).kind(), None);
    }
}
