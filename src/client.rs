//! High-level client — `FallkeeperClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the shared send/decode helpers, and the
//! accessor methods.

use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

use crate::auth::client::Auth;
use crate::domain::aircraft::client::Aircrafts;
use crate::domain::dropzone::client::Dropzones;
use crate::domain::gear::client::Gears;
use crate::domain::jump::client::Jumps;
use crate::domain::jump_group::client::JumpGroups;
use crate::domain::location::client::Locations;
use crate::domain::manufacturer::client::Manufacturers;
use crate::domain::status::client::Status;
use crate::domain::user::client::Users;
use crate::domain::user_gear::client::UserGear;
use crate::error::{ApiError, SdkError};
use crate::http::{FallkeeperHttp, Headers, RawResponse, RequestOptions, Transport};

// Re-export sub-client types for convenience.
pub use crate::auth::client::Auth as AuthClient;
pub use crate::domain::aircraft::client::Aircrafts as AircraftsClient;
pub use crate::domain::dropzone::client::Dropzones as DropzonesClient;
pub use crate::domain::gear::client::Gears as GearsClient;
pub use crate::domain::jump::client::Jumps as JumpsClient;
pub use crate::domain::jump_group::client::JumpGroups as JumpGroupsClient;
pub use crate::domain::location::client::Locations as LocationsClient;
pub use crate::domain::manufacturer::client::Manufacturers as ManufacturersClient;
pub use crate::domain::status::client::Status as StatusClient;
pub use crate::domain::user::client::Users as UsersClient;
pub use crate::domain::user_gear::client::UserGear as UserGearClient;

/// The primary entry point for the Fallkeeper SDK.
///
/// Provides nested sub-client accessors for each resource:
/// `client.jumps(user_id)`, `client.dropzones()`, etc.
///
/// Clones share the auth header; build a second client for an independent session.
pub struct FallkeeperClient {
    pub(crate) http: FallkeeperHttp,
}

impl FallkeeperClient {
    pub fn builder() -> FallkeeperClientBuilder {
        FallkeeperClientBuilder::default()
    }

    /// The underlying request executor.
    pub fn http(&self) -> &FallkeeperHttp {
        &self.http
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn aircrafts(&self) -> Aircrafts<'_> {
        Aircrafts::new(self)
    }

    pub fn dropzones(&self) -> Dropzones<'_> {
        Dropzones::new(self)
    }

    pub fn gears(&self) -> Gears<'_> {
        Gears::new(self)
    }

    pub fn jumps(&self, user_id: impl std::fmt::Display) -> Jumps<'_> {
        Jumps::new(self, user_id.to_string())
    }

    pub fn jump_groups(&self) -> JumpGroups<'_> {
        JumpGroups::new(self)
    }

    pub fn locations(&self) -> Locations<'_> {
        Locations::new(self)
    }

    pub fn manufacturers(&self) -> Manufacturers<'_> {
        Manufacturers::new(self)
    }

    pub fn users(&self) -> Users<'_> {
        Users::new(self)
    }

    pub fn user_gear(&self, user_id: impl std::fmt::Display) -> UserGear<'_> {
        UserGear::new(self, user_id.to_string())
    }

    pub fn auth(&self) -> Auth<'_> {
        Auth::new(self)
    }

    pub fn status(&self) -> Status<'_> {
        Status::new(self)
    }

    // ── Auth header ──────────────────────────────────────────────────────

    /// Replace the auth header overlaid on every request.
    pub async fn set_auth_header(&self, header: Headers) {
        self.http.set_auth_header(header).await;
    }

    /// Stop sending an auth header.
    pub async fn reset_auth_header(&self) {
        self.http.reset_auth_header().await;
    }

    // ── Raw access ───────────────────────────────────────────────────────

    /// Perform a request against any path, bypassing the sub-clients.
    pub async fn request(
        &self,
        path: &str,
        options: Option<RequestOptions>,
    ) -> Result<RawResponse, ApiError> {
        self.http.request(path, options).await
    }

    /// Send an endpoint's own options with the caller's options layered on top.
    pub(crate) async fn send(
        &self,
        path: &str,
        endpoint: RequestOptions,
        caller: &RequestOptions,
    ) -> Result<RawResponse, SdkError> {
        let options = endpoint.layer(caller.clone());
        Ok(self.http.request(path, Some(options)).await?)
    }

    /// Like [`send`](Self::send), decoding the JSON body into `T`.
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        endpoint: RequestOptions,
        caller: &RequestOptions,
    ) -> Result<T, SdkError> {
        let resp = self.send(path, endpoint, caller).await?;
        Ok(resp.json()?)
    }
}

impl Clone for FallkeeperClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct FallkeeperClientBuilder {
    scheme: String,
    host: String,
    timeout: Duration,
    auth_header: Option<Headers>,
    transport: Option<Arc<dyn Transport>>,
}

impl Default for FallkeeperClientBuilder {
    fn default() -> Self {
        Self {
            scheme: crate::network::DEFAULT_SCHEME.to_string(),
            host: crate::network::DEFAULT_HOST.to_string(),
            timeout: crate::network::DEFAULT_TIMEOUT,
            auth_header: None,
            transport: None,
        }
    }
}

impl FallkeeperClientBuilder {
    pub fn scheme(mut self, scheme: &str) -> Self {
        self.scheme = scheme.to_string();
        self
    }

    pub fn host(mut self, host: &str) -> Self {
        self.host = host.to_string();
        self
    }

    /// Default timeout for every request; individual calls may override it.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Pre-set the auth header on construction.
    pub fn auth_header(mut self, header: Headers) -> Self {
        self.auth_header = Some(header);
        self
    }

    /// Use a custom transport instead of the default reqwest one.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<FallkeeperClient, SdkError> {
        if self.scheme.is_empty() {
            return Err(SdkError::Validation("scheme must not be empty".into()));
        }
        if self.host.is_empty() {
            return Err(SdkError::Validation("host must not be empty".into()));
        }
        if self.timeout.is_zero() {
            return Err(SdkError::Validation("timeout must be non-zero".into()));
        }

        let transport = match self.transport {
            Some(transport) => transport,
            None => default_transport()?,
        };

        Ok(FallkeeperClient {
            http: FallkeeperHttp::new(
                &self.scheme,
                &self.host,
                self.timeout,
                self.auth_header,
                transport,
            ),
        })
    }
}

#[cfg(feature = "http")]
fn default_transport() -> Result<Arc<dyn Transport>, SdkError> {
    Ok(Arc::new(crate::http::ReqwestTransport::new()?))
}

#[cfg(not(feature = "http"))]
fn default_transport() -> Result<Arc<dyn Transport>, SdkError> {
    Err(SdkError::Validation(
        "no transport configured; enable the `http` feature or call `transport()`".into(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = FallkeeperClient::builder().build().unwrap();
        assert_eq!(client.http().base_url(), "http://localhost:9099");
        assert_eq!(client.http().timeout(), Duration::from_secs(20));
    }

    #[test]
    fn test_builder_composes_base_url() {
        let client = FallkeeperClient::builder()
            .scheme("https")
            .host("api.fallkeeper.test")
            .build()
            .unwrap();
        assert_eq!(client.http().scheme(), "https");
        assert_eq!(client.http().host(), "api.fallkeeper.test");
        assert_eq!(client.http().base_url(), "https://api.fallkeeper.test");
    }

    #[test]
    fn test_builder_rejects_empty_host() {
        let result = FallkeeperClient::builder().host("").build();
        assert!(matches!(result, Err(SdkError::Validation(_))));
    }

    #[test]
    fn test_builder_rejects_zero_timeout() {
        let result = FallkeeperClient::builder().timeout(Duration::ZERO).build();
        assert!(matches!(result, Err(SdkError::Validation(_))));
    }

    #[tokio::test]
    async fn test_builder_auth_header_preset() {
        let mut header = Headers::new();
        header.insert("Authorization".to_string(), "Bearer t".to_string());
        let client = FallkeeperClient::builder()
            .auth_header(header.clone())
            .build()
            .unwrap();
        assert_eq!(client.http().auth_header().await, Some(header));

        client.reset_auth_header().await;
        assert!(client.http().auth_header().await.is_none());
    }
}
