use async_trait::async_trait;

use crate::modules::document_store::application::domain::entities::{
    Document, Fields, WriteMode,
};
use crate::modules::document_store::application::subscription::Subscription;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DocumentStoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (schemaless documents addressed by (collection, id))
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Point read. `Ok(None)` when the document was never written.
    async fn get(&self, collection: &str, id: &str)
        -> Result<Option<Document>, DocumentStoreError>;

    /// Point write at a caller-chosen id. Creates the document if missing.
    async fn set(
        &self,
        collection: &str,
        id: &str,
        fields: Fields,
        mode: WriteMode,
    ) -> Result<(), DocumentStoreError>;

    /// Insert with a store-generated id.
    async fn add(&self, collection: &str, fields: Fields) -> Result<String, DocumentStoreError>;

    /// Deleting a missing id is not an error.
    async fn delete(&self, collection: &str, id: &str) -> Result<(), DocumentStoreError>;

    /// Every document of the collection, in insertion order.
    async fn list(&self, collection: &str) -> Result<Vec<Document>, DocumentStoreError>;

    /// Live query: current snapshot first, then one snapshot per change.
    async fn subscribe(&self, collection: &str) -> Result<Subscription, DocumentStoreError>;

    async fn ping(&self) -> Result<(), DocumentStoreError>;
}

#[async_trait]
impl<T> DocumentStore for std::sync::Arc<T>
where
    T: DocumentStore + ?Sized,
{
    async fn get(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, DocumentStoreError> {
        (**self).get(collection, id).await
    }

    async fn set(
        &self,
        collection: &str,
        id: &str,
        fields: Fields,
        mode: WriteMode,
    ) -> Result<(), DocumentStoreError> {
        (**self).set(collection, id, fields, mode).await
    }

    async fn add(&self, collection: &str, fields: Fields) -> Result<String, DocumentStoreError> {
        (**self).add(collection, fields).await
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), DocumentStoreError> {
        (**self).delete(collection, id).await
    }

    async fn list(&self, collection: &str) -> Result<Vec<Document>, DocumentStoreError> {
        (**self).list(collection).await
    }

    async fn subscribe(&self, collection: &str) -> Result<Subscription, DocumentStoreError> {
        (**self).subscribe(collection).await
    }

    async fn ping(&self) -> Result<(), DocumentStoreError> {
        (**self).ping().await
    }
}
