//! Low-level HTTP client — `FallkeeperHttp`.
//!
//! Owns the client-wide state (base URL, default timeout, optional auth
//! header) and the single `request` primitive every endpoint goes through.
//! Internal plumbing for the sub-clients, but usable directly for endpoints
//! the SDK does not wrap.

use async_lock::RwLock;
use std::sync::Arc;
use std::time::Duration;

use crate::error::ApiError;
use crate::http::config::{Headers, RequestConfig, RequestOptions};
use crate::http::timeout::race;
use crate::http::transport::{RawResponse, Transport};

/// Request executor for the Fallkeeper REST API.
pub struct FallkeeperHttp {
    scheme: String,
    host: String,
    base_url: String,
    timeout: Duration,
    /// Headers overlaid on every request while set.
    auth_header: Arc<RwLock<Option<Headers>>>,
    transport: Arc<dyn Transport>,
}

impl FallkeeperHttp {
    pub fn new(
        scheme: &str,
        host: &str,
        timeout: Duration,
        auth_header: Option<Headers>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            scheme: scheme.to_string(),
            host: host.to_string(),
            base_url: format!("{}://{}", scheme, host),
            timeout,
            auth_header: Arc::new(RwLock::new(auth_header)),
            transport,
        }
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Replace the auth header wholesale.
    pub async fn set_auth_header(&self, header: Headers) {
        *self.auth_header.write().await = Some(header);
    }

    /// Clear the auth header.
    pub async fn reset_auth_header(&self) {
        *self.auth_header.write().await = None;
    }

    /// Current auth header, if any.
    pub async fn auth_header(&self) -> Option<Headers> {
        self.auth_header.read().await.clone()
    }

    /// Full URL for `path`. Concatenated verbatim, no escaping.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build the effective configuration for one call.
    ///
    /// The auth header is read at this instant and overlaid last, so it wins
    /// over any same-named header supplied by the caller.
    pub async fn prepare(&self, options: Option<RequestOptions>) -> RequestConfig {
        let mut config = RequestConfig::new(self.timeout);
        if let Some(options) = options {
            config = config.merge(options);
        }
        if let Some(auth) = self.auth_header.read().await.as_ref() {
            config.overlay_headers(auth);
        }
        config
    }

    /// Perform a request against `path`.
    ///
    /// Settles exactly once: with the transport's raw response, or with one
    /// normalized [`ApiError`]. A transport still running when the timeout
    /// fires is dropped and its outcome discarded.
    ///
    /// A timed-out call may already have reached the server, fully or in part.
    pub async fn request(
        &self,
        path: &str,
        options: Option<RequestOptions>,
    ) -> Result<RawResponse, ApiError> {
        let config = self.prepare(options).await;
        let url = self.url(path);

        tracing::debug!(
            method = %config.method,
            url = %url,
            timeout_ms = config.timeout.as_millis() as u64,
            "dispatching request"
        );

        let result = race(config.timeout, self.transport.perform(&url, &config)).await;

        match &result {
            Ok(resp) => tracing::debug!(status = resp.status, "request to {} completed", url),
            Err(err) => tracing::debug!(kind = %err.kind, "request to {} failed", url),
        }
        result
    }
}

impl Clone for FallkeeperHttp {
    fn clone(&self) -> Self {
        Self {
            scheme: self.scheme.clone(),
            host: self.host.clone(),
            base_url: self.base_url.clone(),
            timeout: self.timeout,
            auth_header: self.auth_header.clone(),
            transport: self.transport.clone(),
        }
    }
}
