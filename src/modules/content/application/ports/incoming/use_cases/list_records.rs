use async_trait::async_trait;

use crate::modules::content::application::domain::{CollectionRecord, StoredRecord};
use crate::modules::content::application::ports::incoming::use_cases::RecordError;

/// The whole collection in presentation order.
#[async_trait]
pub trait ListRecordsUseCase<R: CollectionRecord>: Send + Sync {
    async fn execute(&self) -> Result<Vec<StoredRecord<R>>, RecordError>;
}
