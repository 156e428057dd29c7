use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::modules::document_store::application::domain::entities::{
    collections, Document, Fields,
};
use crate::modules::document_store::application::ports::outgoing::{
    DocumentStore, DocumentStoreError,
};
use crate::modules::settings::application::domain::{SettingsDocId, SettingsDocument};

/// Every settings document as of one read of the `settings` collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsSnapshot {
    documents: HashMap<SettingsDocId, Fields>,
}

impl SettingsSnapshot {
    /// Documents with unrecognized ids are ignored.
    pub fn from_documents(documents: Vec<Document>) -> Self {
        Self {
            documents: documents
                .into_iter()
                .filter_map(|d| SettingsDocId::parse(&d.id).map(|id| (id, d.fields)))
                .collect(),
        }
    }

    pub fn get<T: SettingsDocument>(&self) -> T {
        match self.documents.get(&T::ID) {
            Some(fields) => T::from_fields(fields),
            None => T::default(),
        }
    }

    pub fn contains(&self, id: SettingsDocId) -> bool {
        self.documents.contains_key(&id)
    }
}

/// Process-wide cache of the settings documents, shared by every reader.
///
/// While a [`SettingsStore::watch`] subscription is live the cache is served
/// as is and replaced on every change. Without one, each snapshot re-reads
/// the collection. A failed read falls back to the last good snapshot, or to
/// defaults when there is none, and never replaces the cache.
pub struct SettingsStore {
    store: Arc<dyn DocumentStore>,
    cache: RwLock<Option<Arc<SettingsSnapshot>>>,
    watcher: Mutex<Option<JoinHandle<()>>>,
}

impl SettingsStore {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            cache: RwLock::new(None),
            watcher: Mutex::new(None),
        }
    }

    fn cached(&self) -> Option<Arc<SettingsSnapshot>> {
        self.cache
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn replace(&self, snapshot: Arc<SettingsSnapshot>) {
        *self
            .cache
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(snapshot);
    }

    fn watching(&self) -> bool {
        self.watcher
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    pub async fn snapshot(&self) -> Arc<SettingsSnapshot> {
        let cached = self.cached();
        if let Some(snapshot) = &cached {
            if self.watching() {
                return snapshot.clone();
            }
        }

        match self.store.list(collections::SETTINGS).await {
            Ok(documents) => {
                let snapshot = Arc::new(SettingsSnapshot::from_documents(documents));
                self.replace(snapshot.clone());
                snapshot
            }
            Err(e) => match cached {
                Some(snapshot) => {
                    warn!(error = %e, "settings unavailable, serving last snapshot");
                    snapshot
                }
                None => {
                    warn!(error = %e, "settings unavailable, serving defaults");
                    Arc::new(SettingsSnapshot::default())
                }
            },
        }
    }

    /// Subscribes to the `settings` collection and replaces the cache on
    /// every change. Calling it again restarts the subscription.
    pub async fn watch(self: &Arc<Self>) -> Result<(), DocumentStoreError> {
        let mut subscription = self.store.subscribe(collections::SETTINGS).await?;
        let cache = Arc::downgrade(self);

        let handle = tokio::spawn(async move {
            while let Some(snapshot) = subscription.next().await {
                let Some(this) = cache.upgrade() else {
                    break;
                };
                this.replace(Arc::new(SettingsSnapshot::from_documents(
                    snapshot.documents,
                )));
                debug!("settings cache refreshed");
            }
        });

        let previous = self
            .watcher
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .replace(handle);
        if let Some(previous) = previous {
            previous.abort();
        }

        Ok(())
    }
}

impl Drop for SettingsStore {
    fn drop(&mut self) {
        let watcher = self
            .watcher
            .get_mut()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();
        if let Some(handle) = watcher {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use serde_json::json;

    use crate::modules::document_store::adapter::outgoing::InMemoryDocumentStore;
    use crate::modules::document_store::application::change_feed::ChangeFeed;
    use crate::modules::document_store::application::domain::entities::WriteMode;
    use crate::modules::settings::application::domain::{
        GeneralSettings, NavSection, NavbarContent,
    };
    use crate::modules::settings::application::ports::incoming::use_cases::SaveSettingsUseCase;
    use crate::modules::settings::application::service::SaveSettingsService;
    use crate::tests::support::fixtures::fields;
    use crate::tests::support::stubs::{FailingDocumentStore, MockDocumentStore};

    fn general(maintenance: bool) -> Vec<Document> {
        vec![Document::new(
            "generalSettings",
            fields(json!({ "maintenanceMode": maintenance })),
        )]
    }

    #[tokio::test]
    async fn test_watched_snapshot_is_served_from_cache() {
        let feed = ChangeFeed::new();
        let mut store = MockDocumentStore::new();
        store.expect_list().times(0);
        store
            .expect_subscribe()
            .withf(|collection| collection == "settings")
            .times(1)
            .returning(move |collection| {
                Ok(feed.subscription(feed.open(collection), collection, general(true)))
            });
        let settings = Arc::new(SettingsStore::new(Arc::new(store)));
        settings.watch().await.unwrap();

        let filled = tokio::time::timeout(Duration::from_secs(1), async {
            while settings.cached().is_none() {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await;
        assert!(filled.is_ok());

        let first = settings.snapshot().await;
        let second = settings.snapshot().await;

        assert!(first.get::<GeneralSettings>().maintenance_mode);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn test_unwatched_snapshot_rereads_collection() {
        let mut store = MockDocumentStore::new();
        store
            .expect_list()
            .withf(|collection| collection == "settings")
            .times(2)
            .returning(|_| Ok(general(true)));
        let settings = SettingsStore::new(Arc::new(store));

        let first = settings.snapshot().await;
        let second = settings.snapshot().await;

        assert!(first.get::<GeneralSettings>().maintenance_mode);
        assert!(!Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn test_snapshot_without_watch_sees_later_writes() {
        let store: Arc<dyn DocumentStore> = Arc::new(InMemoryDocumentStore::new());
        let settings = SettingsStore::new(store.clone());
        assert!(!settings.snapshot().await.get::<GeneralSettings>().maintenance_mode);

        let saved = SaveSettingsService::new(store.clone())
            .execute(SettingsDocId::General, fields(json!({ "maintenanceMode": true })))
            .await;
        assert!(saved.is_ok());

        assert!(settings.snapshot().await.get::<GeneralSettings>().maintenance_mode);
    }

    #[tokio::test]
    async fn test_failed_reread_keeps_last_snapshot() {
        let mut store = MockDocumentStore::new();
        let mut calls = 0;
        store.expect_list().times(2).returning(move |_| {
            calls += 1;
            if calls == 1 {
                Ok(general(true))
            } else {
                Err(DocumentStoreError::DatabaseError("connection reset".to_string()))
            }
        });
        let settings = SettingsStore::new(Arc::new(store));

        let first = settings.snapshot().await;
        let second = settings.snapshot().await;

        assert!(second.get::<GeneralSettings>().maintenance_mode);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn test_failed_read_serves_defaults_and_is_not_cached() {
        let settings = SettingsStore::new(Arc::new(FailingDocumentStore));

        let snapshot = settings.snapshot().await;

        assert!(!snapshot.contains(SettingsDocId::General));
        assert!(settings.cached().is_none());
    }

    #[tokio::test]
    async fn test_unknown_document_ids_are_ignored() {
        let snapshot = SettingsSnapshot::from_documents(vec![
            Document::new("heroContent", Fields::new()),
            Document::new("navbarContent", fields(json!({ "showPlanner": false }))),
        ]);

        assert!(snapshot.contains(SettingsDocId::Navbar));
        assert!(!snapshot.get::<NavbarContent>().is_visible(NavSection::Planner));
    }

    #[tokio::test]
    async fn test_watch_refreshes_cache_after_write() {
        let store: Arc<dyn DocumentStore> = Arc::new(InMemoryDocumentStore::new());
        let settings = Arc::new(SettingsStore::new(store.clone()));
        settings.watch().await.unwrap();

        store
            .set(
                collections::SETTINGS,
                "generalSettings",
                fields(json!({ "maintenanceMode": true })),
                WriteMode::Merge,
            )
            .await
            .unwrap();

        let refreshed = tokio::time::timeout(Duration::from_secs(1), async {
            loop {
                if settings.snapshot().await.get::<GeneralSettings>().maintenance_mode {
                    break;
                }
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await;

        assert!(refreshed.is_ok());
    }
}
