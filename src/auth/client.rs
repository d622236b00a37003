//! Auth sub-client — login, registration, logout.

use crate::auth::{login_path, register_path, RegisterPayload, AUTHORIZATION};
use crate::client::FallkeeperClient;
use crate::error::SdkError;
use crate::http::{Headers, Method, RawResponse, RequestOptions};

/// Sub-client for authentication operations.
pub struct Auth<'a> {
    pub(crate) client: &'a FallkeeperClient,
    pub(crate) options: RequestOptions,
}

impl<'a> Auth<'a> {
    pub(crate) fn new(client: &'a FallkeeperClient) -> Self {
        Self {
            client,
            options: RequestOptions::default(),
        }
    }

    /// Layer extra request options over every call made through this handle.
    ///
    /// Login credentials go here, e.g. a basic-auth header.
    pub fn with(mut self, options: RequestOptions) -> Self {
        self.options = self.options.layer(options);
        self
    }

    /// Create a session.
    ///
    /// On success the returned `Authorization` header, if any, becomes the
    /// client's auth header.
    pub async fn login(&self) -> Result<RawResponse, SdkError> {
        let endpoint = RequestOptions::new().method(Method::Post);
        let resp = self
            .client
            .send(&login_path(), endpoint, &self.options)
            .await?;
        self.store_token(&resp).await;
        Ok(resp)
    }

    /// Register a new user and create a session for them.
    pub async fn register(&self, payload: &RegisterPayload) -> Result<RawResponse, SdkError> {
        let endpoint = RequestOptions::new().method(Method::Post).json(payload)?;
        let resp = self
            .client
            .send(&register_path(), endpoint, &self.options)
            .await?;
        self.store_token(&resp).await;
        Ok(resp)
    }

    /// Forget the session locally. The API keeps no server-side session to end.
    pub async fn logout(&self) {
        self.client.reset_auth_header().await;
    }

    /// Whether an auth header is currently set.
    pub async fn is_authenticated(&self) -> bool {
        self.client.http.auth_header().await.is_some()
    }

    async fn store_token(&self, resp: &RawResponse) {
        match resp.header(AUTHORIZATION) {
            Some(token) => {
                let mut header = Headers::new();
                header.insert(AUTHORIZATION.to_string(), token.to_string());
                self.client.set_auth_header(header).await;
            }
            None => tracing::debug!("auth response carried no {} header", AUTHORIZATION),
        }
    }
}
