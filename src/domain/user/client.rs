//! Users sub-client — profiles and the current user.

use crate::client::FallkeeperClient;
use crate::domain::user::wire::{UserMedia, UserMediaPrivate, UserUpdatePayload};
use crate::domain::user::{collection_path, item_path, me_path};
use crate::error::SdkError;
use crate::http::{Method, RawResponse, RequestOptions};
use crate::shared::ListQuery;

pub struct Users<'a> {
    pub(crate) client: &'a FallkeeperClient,
    pub(crate) options: RequestOptions,
}

impl<'a> Users<'a> {
    pub(crate) fn new(client: &'a FallkeeperClient) -> Self {
        Self {
            client,
            options: RequestOptions::default(),
        }
    }

    /// Layer extra request options over every call made through this handle.
    pub fn with(mut self, options: RequestOptions) -> Self {
        self.options = self.options.layer(options);
        self
    }

    /// List users. Honours `country`, `licence`, `name`, `limit`, `offset` and `view`.
    pub async fn list(&self, query: &ListQuery) -> Result<Vec<UserMedia>, SdkError> {
        let path = query.apply(collection_path())?;
        self.client
            .fetch(&path, RequestOptions::new(), &self.options)
            .await
    }

    pub async fn show(&self, user_id: impl std::fmt::Display) -> Result<UserMedia, SdkError> {
        self.client
            .fetch(&item_path(user_id), RequestOptions::new(), &self.options)
            .await
    }

    /// Profile of the user the current auth header belongs to.
    ///
    /// Fails with `ErrorKind::Unauthorized` when no valid auth header is set.
    pub async fn me(&self) -> Result<UserMediaPrivate, SdkError> {
        self.client
            .fetch(&me_path(), RequestOptions::new(), &self.options)
            .await
    }

    pub async fn update(
        &self,
        user_id: impl std::fmt::Display,
        payload: &UserUpdatePayload,
    ) -> Result<RawResponse, SdkError> {
        let endpoint = RequestOptions::new().method(Method::Patch).json(payload)?;
        self.client
            .send(&item_path(user_id), endpoint, &self.options)
            .await
    }
}
