use async_trait::async_trait;
use mockall::mock;
use telehealth_core::models::{
    provider::{Provider, ProviderId, ProviderPayload},
    schedule::Schedule,
};

use crate::{api::ProviderApi, error::ApiResult};

// Mock provider service for testing
mock! {
    pub ProviderApi {}

    #[async_trait]
    impl ProviderApi for ProviderApi {
        async fn list_providers(&self) -> ApiResult<Vec<Provider>>;

        async fn create_provider(&self, payload: ProviderPayload) -> ApiResult<()>;

        async fn update_provider(
            &self,
            id: ProviderId,
            payload: ProviderPayload,
        ) -> ApiResult<()>;

        async fn delete_provider(&self, id: ProviderId) -> ApiResult<()>;

        async fn get_schedule(&self) -> ApiResult<Schedule>;
    }
}
