use serde::{Deserialize, Serialize};

/// Server-assigned provider identity.
pub type ProviderId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    pub id: ProviderId,
    pub name: String,
    pub availability_start: String,
    pub availability_end: String,
}

/// Body of both the create and the update request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderPayload {
    pub name: String,
    pub availability_start: String,
    pub availability_end: String,
}

impl From<&Provider> for ProviderPayload {
    fn from(provider: &Provider) -> Self {
        Self {
            name: provider.name.clone(),
            availability_start: provider.availability_start.clone(),
            availability_end: provider.availability_end.clone(),
        }
    }
}
