use async_trait::async_trait;

use crate::modules::content::application::domain::{CollectionRecord, StoredRecord};
use crate::modules::content::application::ports::incoming::use_cases::RecordError;

/// Validates the draft and inserts it under a store-assigned id.
#[async_trait]
pub trait CreateRecordUseCase<R: CollectionRecord>: Send + Sync {
    async fn execute(&self, draft: R::Draft) -> Result<StoredRecord<R>, RecordError>;
}
