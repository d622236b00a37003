//! Manufacturers sub-client.

use crate::client::FallkeeperClient;
use crate::domain::manufacturer::wire::{ManufacturerForm, ManufacturerMedia, ManufacturerUpdateForm};
use crate::domain::manufacturer::{collection_path, item_path};
use crate::error::SdkError;
use crate::http::{Method, RawResponse, RequestOptions};
use crate::shared::ListQuery;

pub struct Manufacturers<'a> {
    pub(crate) client: &'a FallkeeperClient,
    pub(crate) options: RequestOptions,
}

impl<'a> Manufacturers<'a> {
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

    /// Create a manufacturer.
    pub async fn create(&self, form: &ManufacturerForm) -> Result<RawResponse, SdkError> {
        let endpoint = RequestOptions::new().method(Method::Post).json(form)?;
        self.client
            .send(&collection_path(), endpoint, &self.options)
            .await
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Vec<ManufacturerMedia>, SdkError> {
        let path = query.apply(collection_path())?;
        self.client
            .fetch(&path, RequestOptions::new(), &self.options)
            .await
    }

    pub async fn show(
        &self,
        manufacturer_id: impl std::fmt::Display,
    ) -> Result<ManufacturerMedia, SdkError> {
        self.client
            .fetch(&item_path(manufacturer_id), RequestOptions::new(), &self.options)
            .await
    }

    /// Partially update a manufacturer.
    pub async fn update(
        &self,
        manufacturer_id: impl std::fmt::Display,
        form: &ManufacturerUpdateForm,
    ) -> Result<RawResponse, SdkError> {
        let endpoint = RequestOptions::new().method(Method::Patch).json(form)?;
        self.client
            .send(&item_path(manufacturer_id), endpoint, &self.options)
            .await
    }
}
