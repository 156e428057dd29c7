use std::marker::PhantomData;

use async_trait::async_trait;
use tracing::info;

use crate::modules::content::application::domain::{CollectionRecord, StoredRecord};
use crate::modules::content::application::ports::incoming::use_cases::{
    RecordError, UpdateRecordUseCase,
};
use crate::modules::document_store::application::domain::entities::WriteMode;
use crate::modules::document_store::application::ports::outgoing::DocumentStore;

pub struct UpdateRecordService<S, R>
where
    S: DocumentStore,
{
    store: S,
    _record: PhantomData<fn() -> R>,
}

impl<S, R> UpdateRecordService<S, R>
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
impl<S, R> UpdateRecordUseCase<R> for UpdateRecordService<S, R>
where
    S: DocumentStore + Send + Sync,
    R: CollectionRecord,
{
    async fn execute(&self, id: &str, draft: R::Draft) -> Result<StoredRecord<R>, RecordError> {
        let record = R::from_draft(draft)?;

        if self.store.get(R::COLLECTION, id).await?.is_none() {
            return Err(RecordError::NotFound(id.to_string()));
        }

        self.store
            .set(R::COLLECTION, id, record.to_fields(), WriteMode::Overwrite)
            .await?;

        info!(collection = R::COLLECTION, id = %id, "record overwritten");
        Ok(StoredRecord::new(id, record))
    }
}
