mod create_record;
mod delete_record;
mod list_records;
mod record_error;
mod update_record;

pub use create_record::CreateRecordUseCase;
pub use delete_record::DeleteRecordUseCase;
pub use list_records::ListRecordsUseCase;
pub use record_error::RecordError;
pub use update_record::UpdateRecordUseCase;
