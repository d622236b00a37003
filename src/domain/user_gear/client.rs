//! User gear sub-client.

use crate::client::FallkeeperClient;
use crate::domain::gear::wire::GearUpdateForm;
use crate::domain::user_gear::wire::{UserGearForm, UserGearMedia};
use crate::domain::user_gear::{collection_path, item_path};
use crate::error::SdkError;
use crate::http::{Method, RawResponse, RequestOptions};
use crate::shared::ListQuery;

pub struct UserGear<'a> {
    pub(crate) client: &'a FallkeeperClient,
    pub(crate) user_id: String,
    pub(crate) options: RequestOptions,
}

impl<'a> UserGear<'a> {
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

    /// Add a piece of catalog gear to the user's rig.
    pub async fn create(&self, form: &UserGearForm) -> Result<RawResponse, SdkError> {
        let endpoint = RequestOptions::new().method(Method::Post).json(form)?;
        self.client
            .send(&collection_path(&self.user_id), endpoint, &self.options)
            .await
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Vec<UserGearMedia>, SdkError> {
        let path = query.apply(collection_path(&self.user_id))?;
        self.client
            .fetch(&path, RequestOptions::new(), &self.options)
            .await
    }

    pub async fn show(&self, gear_id: impl std::fmt::Display) -> Result<UserGearMedia, SdkError> {
        self.client
            .fetch(
                &item_path(&self.user_id, gear_id),
                RequestOptions::new(),
                &self.options,
            )
            .await
    }

    /// The server takes the catalog gear update form here.
    pub async fn update(
        &self,
        gear_id: impl std::fmt::Display,
        form: &GearUpdateForm,
    ) -> Result<RawResponse, SdkError> {
        let endpoint = RequestOptions::new().method(Method::Patch).json(form)?;
        self.client
            .send(&item_path(&self.user_id, gear_id), endpoint, &self.options)
            .await
    }
}
