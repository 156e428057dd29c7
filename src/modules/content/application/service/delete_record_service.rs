use std::marker::PhantomData;

use async_trait::async_trait;
use tracing::info;

use crate::modules::content::application::domain::CollectionRecord;
use crate::modules::content::application::ports::incoming::use_cases::{
    DeleteRecordUseCase, RecordError,
};
use crate::modules::document_store::application::ports::outgoing::DocumentStore;

pub struct DeleteRecordService<S, R>
where
    S: DocumentStore,
{
    store: S,
    _record: PhantomData<fn() -> R>,
}

impl<S, R> DeleteRecordService<S, R>
where
    S: DocumentStore,
{
    pub fn new(store: S) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }
}

#[async_trait]
impl<S, R> DeleteRecordUseCase<R> for DeleteRecordService<S, R>
where
    S: DocumentStore + Send + Sync,
    R: CollectionRecord,
{
    async fn execute(&self, id: &str) -> Result<(), RecordError> {
        self.store.delete(R::COLLECTION, id).await?;

        info!(collection = R::COLLECTION, id = %id, "record deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::modules::content::application::domain::Skill;
    use crate::modules::document_store::adapter::outgoing::InMemoryDocumentStore;
    use crate::tests::support::fixtures::fields;

    #[tokio::test]
    async fn test_delete_removes_record() {
        let store = std::sync::Arc::new(InMemoryDocumentStore::new());
        let id = store
            .add("skills", fields(json!({ "name": "Go" })))
            .await
            .unwrap();
        let service = DeleteRecordService::<_, Skill>::new(store.clone());

        service.execute(&id).await.unwrap();

        assert!(store.get("skills", &id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_deleting_missing_record_succeeds() {
        let store = std::sync::Arc::new(InMemoryDocumentStore::new());
        let service = DeleteRecordService::<_, Skill>::new(store);

        assert!(service.execute("never-existed").await.is_ok());
    }
}
