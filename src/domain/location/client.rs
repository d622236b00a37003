//! Locations sub-client.

use crate::client::FallkeeperClient;
use crate::domain::location::wire::LocationMedia;
use crate::domain::location::{collection_path, item_path};
use crate::error::SdkError;
use crate::http::RequestOptions;
use crate::shared::ListQuery;

pub struct Locations<'a> {
    pub(crate) client: &'a FallkeeperClient,
    pub(crate) options: RequestOptions,
}

impl<'a> Locations<'a> {
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

    pub async fn list(&self, query: &ListQuery) -> Result<Vec<LocationMedia>, SdkError> {
        let path = query.apply(collection_path())?;
        self.client
            .fetch(&path, RequestOptions::new(), &self.options)
            .await
    }

    pub async fn show(
        &self,
        location_id: impl std::fmt::Display,
    ) -> Result<LocationMedia, SdkError> {
        self.client
            .fetch(&item_path(location_id), RequestOptions::new(), &self.options)
            .await
    }
}
