//! Per-request configuration and the call-level override merge.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::time::Duration;

/// Header mapping. Write through [`set_header`] so names stay unique
/// regardless of case.
pub type Headers = BTreeMap<String, String>;

/// Insert a header, replacing any existing entry whose name differs only in
/// ASCII case. The new spelling of the name is kept.
pub fn set_header(headers: &mut Headers, name: String, value: String) {
    headers.retain(|existing, _| !existing.eq_ignore_ascii_case(&name));
    headers.insert(name, value);
}

/// Merge `from` into `into` with [`set_header`] semantics.
fn extend_headers(into: &mut Headers, from: Headers) {
    for (name, value) in from {
        set_header(into, name, value);
    }
}

/// HTTP verb for a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(feature = "http")]
impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Fully merged configuration handed to the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestConfig {
    pub method: Method,
    pub headers: Headers,
    /// JSON text of the request payload.
    pub body: Option<String>,
    /// Advisory for the transport; the executor enforces it independently.
    pub timeout: Duration,
    /// Transport-specific keys, passed through untouched.
    pub extra: Map<String, Value>,
}

impl RequestConfig {
    /// Base configuration every request starts from.
    pub fn new(timeout: Duration) -> Self {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        Self {
            method: Method::Get,
            headers,
            body: None,
            timeout,
            extra: Map::new(),
        }
    }

    /// Merge a call-level override onto this configuration.
    ///
    /// Override values win; `headers` and `extra` merge key by key. A `data`
    /// payload is serialized into `body` whatever the method.
    pub fn merge(mut self, options: RequestOptions) -> Self {
        let RequestOptions {
            method,
            headers,
            data,
            timeout,
            extra,
        } = options;

        if let Some(method) = method {
            self.method = method;
        }
        if let Some(timeout) = timeout {
            self.timeout = timeout;
        }
        extend_headers(&mut self.headers, headers);
        merge_map(&mut self.extra, extra);
        // A null payload sends no body.
        if let Some(data) = data.filter(|data| !data.is_null()) {
            self.body = Some(data.to_string());
        }
        self
    }

    /// Overlay headers, replacing any of the same name in any case.
    pub fn overlay_headers(&mut self, headers: &Headers) {
        extend_headers(&mut self.headers, headers.clone());
    }
}

/// Call-level override for a single request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub method: Option<Method>,
    pub headers: Headers,
    /// Payload, serialized to JSON into the request body on merge.
    pub data: Option<Value>,
    pub timeout: Option<Duration>,
    pub extra: Map<String, Value>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        set_header(&mut self.headers, name.into(), value.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Set the payload from any serializable value.
    pub fn json<B: Serialize + ?Sized>(self, body: &B) -> Result<Self, serde_json::Error> {
        Ok(self.data(serde_json::to_value(body)?))
    }

    pub fn extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Layer `other` over `self`; `other` wins on conflicts.
    ///
    /// Used by sub-clients to put a caller's options on top of the
    /// endpoint's own verb and payload.
    pub(crate) fn layer(mut self, other: RequestOptions) -> Self {
        if other.method.is_some() {
            self.method = other.method;
        }
        if other.timeout.is_some() {
            self.timeout = other.timeout;
        }
        if other.data.is_some() {
            self.data = other.data;
        }
        extend_headers(&mut self.headers, other.headers);
        merge_map(&mut self.extra, other.extra);
        self
    }
}

/// Recursively merge `right` into `left`.
///
/// Objects merge key by key; any other pairing replaces `left` with `right`.
pub fn merge_deep(left: &mut Value, right: Value) {
    match (left, right) {
        (Value::Object(left), Value::Object(right)) => merge_map(left, right),
        (left, right) => *left = right,
    }
}

fn merge_map(left: &mut Map<String, Value>, right: Map<String, Value>) {
    for (key, value) in right {
        match left.get_mut(&key) {
            Some(existing) => merge_deep(existing, value),
            None => {
                left.insert(key, value);
            }
        }
    }
}
