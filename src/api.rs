//! Client for the channel and preview endpoints of the backend.
mod http;

use crate::{
    objects::{
        channel::ChannelsEnvelope, ApiConfig, ApiError, Channel, ChannelUpdate, NewChannel,
        Preview,
    },
    view_models::fetch::Cancellation,
};
use http::HttpMethod;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn channel_url(&self, id: &str) -> String {
        self.config.endpoint(&format!("/api/channels/{}", id))
    }

    pub async fn list_channels(
        &self,
        cancellation: &Cancellation,
    ) -> Result<Vec<Channel>, ApiError> {
        let envelope: ChannelsEnvelope = http::fetch_deserializable(
            &self.config.endpoint("/api/channels"),
            HttpMethod::Get,
            cancellation.signal().as_ref(),
        )
        .await?;

        Ok(envelope.channels)
    }

    pub async fn create_channel(
        &self,
        channel: &NewChannel,
        cancellation: &Cancellation,
    ) -> Result<Channel, ApiError> {
        http::send_json(
            &self.config.endpoint("/api/channels"),
            HttpMethod::Post,
            channel,
            cancellation.signal().as_ref(),
        )
        .await
    }

    pub async fn update_channel(
        &self,
        id: &str,
        update: &ChannelUpdate,
        cancellation: &Cancellation,
    ) -> Result<Channel, ApiError> {
        http::send_json(
            &self.channel_url(id),
            HttpMethod::Put,
            update,
            cancellation.signal().as_ref(),
        )
        .await
    }

    /// A 404 is reported as [`ApiError::NotFound`], not treated as success.
    pub async fn delete_channel(
        &self,
        id: &str,
        cancellation: &Cancellation,
    ) -> Result<(), ApiError> {
        http::send_empty(
            &self.channel_url(id),
            HttpMethod::Delete,
            cancellation.signal().as_ref(),
        )
        .await
    }

    pub async fn get_preview(
        &self,
        feed_id: &str,
        cancellation: &Cancellation,
    ) -> Result<Preview, ApiError> {
        http::fetch_deserializable(
            &self.config.endpoint(&format!("/preview/{}", feed_id)),
            HttpMethod::Get,
            cancellation.signal().as_ref(),
        )
        .await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(ApiConfig::from_build_env())
    }
}
