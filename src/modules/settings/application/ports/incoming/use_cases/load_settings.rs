use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::document_store::application::domain::entities::Fields;
use crate::modules::settings::application::domain::SettingsDocId;

/// A complete settings object. Loading never fails: a document that was never
/// saved yields its defaults, and a backend failure yields its defaults plus
/// a `warning` for the operator.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct LoadedSettings {
    pub id: SettingsDocId,
    #[schema(value_type = Object)]
    pub fields: Fields,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

#[async_trait]
pub trait LoadSettingsUseCase: Send + Sync {
    async fn execute(&self, id: SettingsDocId) -> LoadedSettings;
}
