use std::marker::PhantomData;

use async_trait::async_trait;

use crate::modules::content::application::domain::{CollectionRecord, StoredRecord};
use crate::modules::content::application::ports::incoming::use_cases::{
    ListRecordsUseCase, RecordError,
};
use crate::modules::document_store::application::ports::outgoing::DocumentStore;

pub struct ListRecordsService<S, R>
where
    S: DocumentStore,
{
    store: S,
    _record: PhantomData<fn() -> R>,
}

impl<S, R> ListRecordsService<S, R>
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
impl<S, R> ListRecordsUseCase<R> for ListRecordsService<S, R>
where
    S: DocumentStore + Send + Sync,
    R: CollectionRecord,
{
    async fn execute(&self) -> Result<Vec<StoredRecord<R>>, RecordError> {
        let documents = self.store.list(R::COLLECTION).await?;
        Ok(StoredRecord::from_snapshot(&documents))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::modules::content::application::domain::{Experience, Project};
    use crate::modules::document_store::application::domain::entities::Document;
    use crate::tests::support::fixtures::{document, fields};
    use crate::tests::support::stubs::MockDocumentStore;

    #[tokio::test]
    async fn test_experiences_come_back_in_display_order() {
        let mut store = MockDocumentStore::new();
        store
            .expect_list()
            .withf(|collection| collection == "experiences")
            .times(1)
            .returning(|_| {
                Ok(vec![
                    document("old", json!({ "company": "A", "startDate": "2015" })),
                    document(
                        "now",
                        json!({ "company": "B", "startDate": "2010", "isCurrent": true }),
                    ),
                    document("mid", json!({ "company": "C", "startDate": "2019-04" })),
                ])
            });
        let service = ListRecordsService::<_, Experience>::new(store);

        let records = service.execute().await.unwrap();

        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["now", "mid", "old"]);
    }

    #[tokio::test]
    async fn test_projects_keep_snapshot_order() {
        let mut store = MockDocumentStore::new();
        store.expect_list().returning(|_| {
            Ok(vec![
                Document::new("z", fields(json!({ "title_en": "Z" }))),
                Document::new("a", fields(json!({ "title_en": "A" }))),
            ])
        });
        let service = ListRecordsService::<_, Project>::new(store);

        let records = service.execute().await.unwrap();

        assert_eq!(records[0].id, "z");
        assert_eq!(records[1].id, "a");
    }
}
