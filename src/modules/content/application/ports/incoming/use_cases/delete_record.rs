use async_trait::async_trait;

use crate::modules::content::application::domain::CollectionRecord;
use crate::modules::content::application::ports::incoming::use_cases::RecordError;

#[async_trait]
pub trait DeleteRecordUseCase<R: CollectionRecord>: Send + Sync {
    /// Irreversible. Deleting an id that does not exist succeeds.
    async fn execute(&self, id: &str) -> Result<(), RecordError>;
}
