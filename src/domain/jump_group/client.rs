//! Jump groups sub-client.

use crate::client::FallkeeperClient;
use crate::domain::jump_group::wire::{JumpGroupForm, JumpGroupMedia};
use crate::domain::jump_group::{collection_path, item_path};
use crate::error::SdkError;
use crate::http::{Method, RawResponse, RequestOptions};
use crate::shared::ListQuery;

pub struct JumpGroups<'a> {
    pub(crate) client: &'a FallkeeperClient,
    pub(crate) options: RequestOptions,
}

impl<'a> JumpGroups<'a> {
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

    /// Create a jump group.
    pub async fn create(&self, form: &JumpGroupForm) -> Result<RawResponse, SdkError> {
        let endpoint = RequestOptions::new().method(Method::Post).json(form)?;
        self.client
            .send(&collection_path(), endpoint, &self.options)
            .await
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Vec<JumpGroupMedia>, SdkError> {
        let path = query.apply(collection_path())?;
        self.client
            .fetch(&path, RequestOptions::new(), &self.options)
            .await
    }

    pub async fn show(
        &self,
        jump_group_id: impl std::fmt::Display,
    ) -> Result<JumpGroupMedia, SdkError> {
        self.client
            .fetch(&item_path(jump_group_id), RequestOptions::new(), &self.options)
            .await
    }

    /// Update a jump group.
    pub async fn update(
        &self,
        jump_group_id: impl std::fmt::Display,
        form: &JumpGroupForm,
    ) -> Result<RawResponse, SdkError> {
        let endpoint = RequestOptions::new().method(Method::Patch).json(form)?;
        self.client
            .send(&item_path(jump_group_id), endpoint, &self.options)
            .await
    }
}
