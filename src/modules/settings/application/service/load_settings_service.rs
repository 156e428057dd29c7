use async_trait::async_trait;
use tracing::{debug, error};

use crate::modules::document_store::application::domain::entities::collections;
use crate::modules::document_store::application::ports::outgoing::DocumentStore;
use crate::modules::settings::application::domain::SettingsDocId;
use crate::modules::settings::application::ports::incoming::use_cases::{
    LoadSettingsUseCase, LoadedSettings,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct LoadSettingsService<S>
where
    S: DocumentStore,
{
    store: S,
}

impl<S> LoadSettingsService<S>
where
    S: DocumentStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> LoadSettingsUseCase for LoadSettingsService<S>
where
    S: DocumentStore + Send + Sync,
{
    async fn execute(&self, id: SettingsDocId) -> LoadedSettings {
        match self.store.get(collections::SETTINGS, id.as_str()).await {
            Ok(Some(document)) => LoadedSettings {
                id,
                fields: id.normalize(&document.fields),
                warning: None,
            },
            Ok(None) => {
                debug!(document = %id, "settings document not saved yet, using defaults");
                LoadedSettings {
                    id,
                    fields: id.defaults(),
                    warning: None,
                }
            }
            Err(e) => {
                error!(document = %id, error = %e, "failed to load settings document");
                LoadedSettings {
                    id,
                    fields: id.defaults(),
                    warning: Some(format!("Could not load {id}; showing defaults.")),
                }
            }
        }
    }
}
