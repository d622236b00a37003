//! Dropzones sub-client.

use crate::client::FallkeeperClient;
use crate::domain::dropzone::wire::{DropzoneForm, DropzoneMedia, DropzoneUpdateForm};
use crate::domain::dropzone::{collection_path, item_path};
use crate::error::SdkError;
use crate::http::{Method, RawResponse, RequestOptions};
use crate::shared::ListQuery;

pub struct Dropzones<'a> {
    pub(crate) client: &'a FallkeeperClient,
    pub(crate) options: RequestOptions,
}

impl<'a> Dropzones<'a> {
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

    /// Create a dropzone.
    pub async fn create(&self, form: &DropzoneForm) -> Result<RawResponse, SdkError> {
        let endpoint = RequestOptions::new().method(Method::Post).json(form)?;
        self.client
            .send(&collection_path(), endpoint, &self.options)
            .await
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Vec<DropzoneMedia>, SdkError> {
        let path = query.apply(collection_path())?;
        self.client
            .fetch(&path, RequestOptions::new(), &self.options)
            .await
    }

    /// Fetch a dropzone with its aircraft and location embedded.
    pub async fn show(
        &self,
        dropzone_id: impl std::fmt::Display,
    ) -> Result<DropzoneMedia, SdkError> {
        self.client
            .fetch(&item_path(dropzone_id), RequestOptions::new(), &self.options)
            .await
    }

    /// Partially update a dropzone.
    pub async fn update(
        &self,
        dropzone_id: impl std::fmt::Display,
        form: &DropzoneUpdateForm,
    ) -> Result<RawResponse, SdkError> {
        let endpoint = RequestOptions::new().method(Method::Patch).json(form)?;
        self.client
            .send(&item_path(dropzone_id), endpoint, &self.options)
            .await
    }
}
