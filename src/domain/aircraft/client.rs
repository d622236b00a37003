//! Aircrafts sub-client.

use crate::client::FallkeeperClient;
use crate::domain::aircraft::wire::{AircraftForm, AircraftMedia, AircraftUpdateForm};
use crate::domain::aircraft::{collection_path, item_path};
use crate::error::SdkError;
use crate::http::{Method, RawResponse, RequestOptions};
use crate::shared::ListQuery;

pub struct Aircrafts<'a> {
    pub(crate) client: &'a FallkeeperClient,
    pub(crate) options: RequestOptions,
}

impl<'a> Aircrafts<'a> {
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

    /// Create an aircraft.
    pub async fn create(&self, form: &AircraftForm) -> Result<RawResponse, SdkError> {
        let endpoint = RequestOptions::new().method(Method::Post).json(form)?;
        self.client
            .send(&collection_path(), endpoint, &self.options)
            .await
    }

    /// List aircraft. Honours `limit`, `offset`, `name` and `view`.
    pub async fn list(&self, query: &ListQuery) -> Result<Vec<AircraftMedia>, SdkError> {
        let path = query.apply(collection_path())?;
        self.client
            .fetch(&path, RequestOptions::new(), &self.options)
            .await
    }

    pub async fn show(
        &self,
        aircraft_id: impl std::fmt::Display,
    ) -> Result<AircraftMedia, SdkError> {
        self.client
            .fetch(&item_path(aircraft_id), RequestOptions::new(), &self.options)
            .await
    }

    /// Partially update an aircraft.
    pub async fn update(
        &self,
        aircraft_id: impl std::fmt::Display,
        form: &AircraftUpdateForm,
    ) -> Result<RawResponse, SdkError> {
        let endpoint = RequestOptions::new().method(Method::Patch).json(form)?;
        self.client
            .send(&item_path(aircraft_id), endpoint, &self.options)
            .await
    }
}
