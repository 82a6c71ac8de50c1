//! # HTTP Provider Service
//!
//! reqwest-backed implementation of [`ProviderApi`]. All paths are resolved
//! against one fixed base URL, and any non-2xx status is reported as
//! [`ApiError::Status`] regardless of what the body says.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use telehealth_core::models::{
    provider::{Provider, ProviderId, ProviderPayload},
    schedule::{Schedule, ScheduleResponse},
};
use tracing::debug;
use url::Url;

use crate::{
    api::ProviderApi,
    config::ClientConfig,
    error::{ApiError, ApiResult},
};

#[derive(Debug, Clone)]
pub struct HttpProviderApi {
    client: Client,
    base_url: Url,
}

impl HttpProviderApi {
    /// Builds the HTTP client from configuration.
    ///
    /// A timeout is only applied when one is configured; otherwise requests use
    /// reqwest's defaults.
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: with_trailing_slash(config.api_url.clone()),
        })
    }

    /// Talks to `base_url` with no timeout configured.
    pub fn with_url(base_url: Url) -> ApiResult<Self> {
        Ok(Self {
            client: Client::builder().build()?,
            base_url: with_trailing_slash(base_url),
        })
    }

    fn endpoint(&self, path: &str) -> ApiResult<Url> {
        Ok(self.base_url.join(path)?)
    }

    async fn send(&self, request: RequestBuilder) -> ApiResult<Response> {
        let response = request.send().await?;
        let status = response.status();
        debug!("{} {}", status, response.url());

        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        Ok(response)
    }
}

#[async_trait]
impl ProviderApi for HttpProviderApi {
    async fn list_providers(&self) -> ApiResult<Vec<Provider>> {
        let url = self.endpoint("providers")?;
        let response = self.send(self.client.get(url)).await?;
        Ok(response.json().await?)
    }

    async fn create_provider(&self, payload: ProviderPayload) -> ApiResult<()> {
        let url = self.endpoint("providers")?;
        self.send(self.client.post(url).json(&payload)).await?;
        Ok(())
    }

    async fn update_provider(&self, id: ProviderId, payload: ProviderPayload) -> ApiResult<()> {
        let url = self.endpoint(&format!("providers/{}", id))?;
        self.send(self.client.put(url).json(&payload)).await?;
        Ok(())
    }

    async fn delete_provider(&self, id: ProviderId) -> ApiResult<()> {
        let url = self.endpoint(&format!("providers/{}", id))?;
        self.send(self.client.delete(url)).await?;
        Ok(())
    }

    async fn get_schedule(&self) -> ApiResult<Schedule> {
        let url = self.endpoint("schedule")?;
        let response = self.send(self.client.get(url)).await?;
        let body: ScheduleResponse = response.json().await?;
        Ok(body.schedule)
    }
}

/// `Url::join` replaces the last path segment unless the base ends in `/`.
pub(crate) fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
