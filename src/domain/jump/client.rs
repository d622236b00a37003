//! Jumps sub-client — scoped to one user's logbook.

use crate::client::FallkeeperClient;
use crate::domain::jump::wire::{JumpForm, JumpMedia, JumpUpdateForm};
use crate::domain::jump::{collection_path, item_path};
use crate::error::SdkError;
use crate::http::{Method, RawResponse, RequestOptions};
use crate::shared::ListQuery;

pub struct Jumps<'a> {
    pub(crate) client: &'a FallkeeperClient,
    pub(crate) user_id: String,
    pub(crate) options: RequestOptions,
}

impl<'a> Jumps<'a> {
    pub(crate) fn new(client: &'a FallkeeperClient, user_id: String) -> Self {
        Self {
            client,
            user_id,
            options: RequestOptions::default(),
        }
    }

    /// Layer extra request options over every call made through this handle.
    pub fn with(mut self, options: RequestOptions) -> Self {
        self.options = self.options.layer(options);
        self
    }

    /// Log a jump.
    pub async fn create(&self, form: &JumpForm) -> Result<RawResponse, SdkError> {
        let endpoint = RequestOptions::new().method(Method::Post).json(form)?;
        self.client
            .send(&collection_path(&self.user_id), endpoint, &self.options)
            .await
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Vec<JumpMedia>, SdkError> {
        let path = query.apply(collection_path(&self.user_id))?;
        self.client
            .fetch(&path, RequestOptions::new(), &self.options)
            .await
    }

    pub async fn show(&self, jump_id: impl std::fmt::Display) -> Result<JumpMedia, SdkError> {
        self.client
            .fetch(
                &item_path(&self.user_id, jump_id),
                RequestOptions::new(),
                &self.options,
            )
            .await
    }

    pub async fn update(
        &self,
        jump_id: impl std::fmt::Display,
        form: &JumpUpdateForm,
    ) -> Result<RawResponse, SdkError> {
        let endpoint = RequestOptions::new().method(Method::Patch).json(form)?;
        self.client
            .send(&item_path(&self.user_id, jump_id), endpoint, &self.options)
            .await
    }
}
