//! Gears sub-client.

use crate::client::FallkeeperClient;
use crate::domain::gear::wire::{GearForm, GearMedia, GearUpdateForm};
use crate::domain::gear::{collection_path, item_path};
use crate::error::SdkError;
use crate::http::{Method, RawResponse, RequestOptions};
use crate::shared::ListQuery;

pub struct Gears<'a> {
    pub(crate) client: &'a FallkeeperClient,
    pub(crate) options: RequestOptions,
}

impl<'a> Gears<'a> {
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

    /// Submit a new gear model. New entries are unverified until an admin reviews them.
    pub async fn create(&self, form: &GearForm) -> Result<RawResponse, SdkError> {
        let endpoint = RequestOptions::new().method(Method::Post).json(form)?;
        self.client
            .send(&collection_path(), endpoint, &self.options)
            .await
    }

    /// List the gear catalog, optionally narrowed to one `manufacturer_id`.
    pub async fn list(&self, query: &ListQuery) -> Result<Vec<GearMedia>, SdkError> {
        let path = query.apply(collection_path())?;
        self.client
            .fetch(&path, RequestOptions::new(), &self.options)
            .await
    }

    pub async fn show(
        &self,
        gear_id: impl std::fmt::Display,
    ) -> Result<GearMedia, SdkError> {
        self.client
            .fetch(&item_path(gear_id), RequestOptions::new(), &self.options)
            .await
    }

    /// Partially update a gear model.
    pub async fn update(
        &self,
        gear_id: impl std::fmt::Display,
        form: &GearUpdateForm,
    ) -> Result<RawResponse, SdkError> {
        let endpoint = RequestOptions::new().method(Method::Patch).json(form)?;
        self.client
            .send(&item_path(gear_id), endpoint, &self.options)
            .await
    }
}
