use async_trait::async_trait;
use telehealth_core::models::{
    provider::{Provider, ProviderId, ProviderPayload},
    schedule::Schedule,
};

use crate::error::ApiResult;

/// The REST contract of the provider service.
///
/// Every method maps to exactly one request. Success means a 2xx status; the
/// bodies of create and update responses are not inspected.
#[async_trait]
pub trait ProviderApi: Send + Sync {
    /// `GET /providers`
    async fn list_providers(&self) -> ApiResult<Vec<Provider>>;

    /// `POST /providers`
    async fn create_provider(&self, payload: ProviderPayload) -> ApiResult<()>;

    /// `PUT /providers/{id}`
    async fn update_provider(&self, id: ProviderId, payload: ProviderPayload) -> ApiResult<()>;

    /// `DELETE /providers/{id}`
    async fn delete_provider(&self, id: ProviderId) -> ApiResult<()>;

    /// `GET /schedule`, unwrapped from its `{schedule: ...}` envelope
    async fn get_schedule(&self) -> ApiResult<Schedule>;
}
