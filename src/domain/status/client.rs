//! Status sub-client.

use crate::client::FallkeeperClient;
use crate::domain::status::status_path;
use crate::domain::status::wire::ApiStatus;
use crate::error::SdkError;
use crate::http::RequestOptions;

pub struct Status<'a> {
    pub(crate) client: &'a FallkeeperClient,
    pub(crate) options: RequestOptions,
}

impl<'a> Status<'a> {
    pub(crate) fn new(client: &'a FallkeeperClient) -> Self {
        Self {
            client,
            options: RequestOptions::default(),
        }
    }

    pub fn with(mut self, options: RequestOptions) -> Self {
        self.options = self.options.layer(options);
        self
    }

    /// Health of the API.
    pub async fn get(&self) -> Result<ApiStatus, SdkError> {
        self.client
            .fetch(&status_path(), RequestOptions::new(), &self.options)
            .await
    }
}
