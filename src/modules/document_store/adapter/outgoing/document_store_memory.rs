use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::modules::document_store::application::change_feed::ChangeFeed;
use crate::modules::document_store::application::domain::entities::{
    Document, Fields, Snapshot, WriteMode,
};
use crate::modules::document_store::application::ports::outgoing::{
    DocumentStore, DocumentStoreError,
};
use crate::modules::document_store::application::subscription::Subscription;

#[derive(Default)]
struct CollectionData {
    order: Vec<String>,
    documents: HashMap<String, Fields>,
}

impl CollectionData {
    fn snapshot(&self) -> Vec<Document> {
        self.order
            .iter()
            .filter_map(|id| {
                self.documents
                    .get(id)
                    .map(|fields| Document::new(id.clone(), fields.clone()))
            })
            .collect()
    }
}

/// Process-local store used for local development and tests.
#[derive(Default)]
pub struct InMemoryDocumentStore {
    collections: RwLock<HashMap<String, CollectionData>>,
    feed: ChangeFeed,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_feed(feed: ChangeFeed) -> Self {
        Self {
            collections: RwLock::new(HashMap::new()),
            feed,
        }
    }

    fn publish(&self, collection: &str, data: &CollectionData) {
        if self.feed.has_subscribers(collection) {
            self.feed
                .publish(Snapshot::new(collection, data.snapshot()));
        }
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, DocumentStoreError> {
        let collections = self.collections.read().await;

        Ok(collections
            .get(collection)
            .and_then(|data| data.documents.get(id))
            .map(|fields| Document::new(id, fields.clone())))
    }

    async fn set(
        &self,
        collection: &str,
        id: &str,
        fields: Fields,
        mode: WriteMode,
    ) -> Result<(), DocumentStoreError> {
        let mut collections = self.collections.write().await;
        let data = collections.entry(collection.to_string()).or_default();

        match data.documents.get_mut(id) {
            Some(existing) => match mode {
                WriteMode::Merge => existing.extend(fields),
                WriteMode::Overwrite => *existing = fields,
            },
            None => {
                data.order.push(id.to_string());
                data.documents.insert(id.to_string(), fields);
            }
        }

        self.publish(collection, data);
        Ok(())
    }

    async fn add(&self, collection: &str, fields: Fields) -> Result<String, DocumentStoreError> {
        let id = Uuid::new_v4().simple().to_string();

        let mut collections = self.collections.write().await;
        let data = collections.entry(collection.to_string()).or_default();
        data.order.push(id.clone());
        data.documents.insert(id.clone(), fields);

        self.publish(collection, data);
        Ok(id)
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), DocumentStoreError> {
        let mut collections = self.collections.write().await;

        if let Some(data) = collections.get_mut(collection) {
            if data.documents.remove(id).is_some() {
                data.order.retain(|existing| existing != id);
                self.publish(collection, data);
            }
        }

        Ok(())
    }

    async fn list(&self, collection: &str) -> Result<Vec<Document>, DocumentStoreError> {
        let collections = self.collections.read().await;

        Ok(collections
            .get(collection)
            .map(CollectionData::snapshot)
            .unwrap_or_default())
    }

    async fn subscribe(&self, collection: &str) -> Result<Subscription, DocumentStoreError> {
        let receiver = self.feed.open(collection);
        let initial = self.list(collection).await?;

        Ok(self.feed.subscription(receiver, collection, initial))
    }

    async fn ping(&self) -> Result<(), DocumentStoreError> {
        Ok(())
    }
}
