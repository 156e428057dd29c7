use std::marker::PhantomData;

use async_trait::async_trait;
use tracing::info;

use crate::modules::content::application::domain::{CollectionRecord, StoredRecord};
use crate::modules::content::application::ports::incoming::use_cases::{
    CreateRecordUseCase, RecordError,
};
use crate::modules::document_store::application::ports::outgoing::DocumentStore;

pub struct CreateRecordService<S, R>
where
    S: DocumentStore,
{
    store: S,
    _record: PhantomData<fn() -> R>,
}

impl<S, R> CreateRecordService<S, R>
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
impl<S, R> CreateRecordUseCase<R> for CreateRecordService<S, R>
where
    S: DocumentStore + Send + Sync,
    R: CollectionRecord,
{
    async fn execute(&self, draft: R::Draft) -> Result<StoredRecord<R>, RecordError> {
        let record = R::from_draft(draft)?;

        let id = self.store.add(R::COLLECTION, record.to_fields()).await?;

        info!(collection = R::COLLECTION, id = %id, "record created");
        Ok(StoredRecord::new(id, record))
    }
}
