use async_trait::async_trait;
use tracing::info;

use crate::modules::document_store::application::domain::entities::{
    collections, Fields, WriteMode,
};
use crate::modules::document_store::application::ports::outgoing::DocumentStore;
use crate::modules::settings::application::domain::SettingsDocId;
use crate::modules::settings::application::ports::incoming::use_cases::{
    SaveSettingsError, SaveSettingsUseCase,
};

pub struct SaveSettingsService<S>
where
    S: DocumentStore,
{
    store: S,
}

impl<S> SaveSettingsService<S>
where
    S: DocumentStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> SaveSettingsUseCase for SaveSettingsService<S>
where
    S: DocumentStore + Send + Sync,
{
    async fn execute(&self, id: SettingsDocId, partial: Fields) -> Result<(), SaveSettingsError> {
        id.validate_partial(&partial)
            .map_err(SaveSettingsError::Validation)?;

        let field_count = partial.len();

        self.store
            .set(collections::SETTINGS, id.as_str(), partial, WriteMode::Merge)
            .await
            .map_err(|e| SaveSettingsError::RepositoryError(e.to_string()))?;

        info!(document = %id, fields = field_count, "settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    use crate::modules::document_store::adapter::outgoing::InMemoryDocumentStore;
    use crate::tests::support::fixtures::fields;
    use crate::tests::support::stubs::FailingDocumentStore;

    #[tokio::test]
    async fn test_merge_write_keeps_fields_missing_from_payload() {
        let store = std::sync::Arc::new(InMemoryDocumentStore::new());
        store
            .set(
                collections::SETTINGS,
                "generalSettings",
                fields(json!({ "email": "a@b.com", "maintenanceMode": false })),
                WriteMode::Overwrite,
            )
            .await
            .unwrap();
        let service = SaveSettingsService::new(store.clone());

        service
            .execute(
                SettingsDocId::General,
                fields(json!({ "maintenanceMode": true })),
            )
            .await
            .unwrap();

        let stored = store
            .get(collections::SETTINGS, "generalSettings")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            Value::Object(stored.fields),
            json!({ "email": "a@b.com", "maintenanceMode": true })
        );
    }

    #[tokio::test]
    async fn test_first_save_creates_document() {
        let store = std::sync::Arc::new(InMemoryDocumentStore::new());
        let service = SaveSettingsService::new(store.clone());

        service
            .execute(
                SettingsDocId::Theme,
                fields(json!({ "primaryColor": "#ff0000" })),
            )
            .await
            .unwrap();

        assert!(store
            .get(collections::SETTINGS, "themeSettings")
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn test_invalid_value_is_rejected_before_write() {
        let service = SaveSettingsService::new(FailingDocumentStore);

        let result = service
            .execute(
                SettingsDocId::General,
                fields(json!({ "defaultLang": "fr" })),
            )
            .await;

        assert!(matches!(result, Err(SaveSettingsError::Validation(_))));
    }

    #[tokio::test]
    async fn test_backend_failure_is_reported() {
        let service = SaveSettingsService::new(FailingDocumentStore);

        let result = service
            .execute(SettingsDocId::Seo, fields(json!({ "meta_author": "Sam" })))
            .await;

        assert!(matches!(result, Err(SaveSettingsError::RepositoryError(_))));
    }
}
