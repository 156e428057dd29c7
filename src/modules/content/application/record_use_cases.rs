use std::sync::Arc;

use crate::modules::content::application::domain::CollectionRecord;
use crate::modules::content::application::ports::incoming::use_cases::{
    CreateRecordUseCase, DeleteRecordUseCase, ListRecordsUseCase, UpdateRecordUseCase,
};
use crate::modules::content::application::service::{
    CreateRecordService, DeleteRecordService, ListRecordsService, UpdateRecordService,
};
use crate::modules::document_store::application::ports::outgoing::DocumentStore;

pub struct RecordUseCases<R: CollectionRecord> {
    pub create: Arc<dyn CreateRecordUseCase<R> + Send + Sync>,
    pub update: Arc<dyn UpdateRecordUseCase<R> + Send + Sync>,
    pub delete: Arc<dyn DeleteRecordUseCase<R> + Send + Sync>,
    pub list: Arc<dyn ListRecordsUseCase<R> + Send + Sync>,
}

impl<R: CollectionRecord> Clone for RecordUseCases<R> {
    fn clone(&self) -> Self {
        Self {
            create: self.create.clone(),
            update: self.update.clone(),
            delete: self.delete.clone(),
            list: self.list.clone(),
        }
    }
}

impl<R: CollectionRecord> RecordUseCases<R> {
    /// Every record use case over one shared store.
    pub fn backed_by(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            create: Arc::new(CreateRecordService::<_, R>::new(store.clone())),
            update: Arc::new(UpdateRecordService::<_, R>::new(store.clone())),
            delete: Arc::new(DeleteRecordService::<_, R>::new(store.clone())),
            list: Arc::new(ListRecordsService::<_, R>::new(store)),
        }
    }
}
