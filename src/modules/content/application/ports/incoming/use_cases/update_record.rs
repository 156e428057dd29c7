use async_trait::async_trait;

use crate::modules::content::application::domain::{CollectionRecord, StoredRecord};
use crate::modules::content::application::ports::incoming::use_cases::RecordError;

/// Full overwrite of an existing record. Fields left out of the draft are
/// not retained.
#[async_trait]
pub trait UpdateRecordUseCase<R: CollectionRecord>: Send + Sync {
    async fn execute(&self, id: &str, draft: R::Draft) -> Result<StoredRecord<R>, RecordError>;
}
