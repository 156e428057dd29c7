use async_trait::async_trait;
use mockall::mock;

use crate::modules::document_store::application::domain::entities::{
    Document, Fields, WriteMode,
};
use crate::modules::document_store::application::ports::outgoing::{
    DocumentStore, DocumentStoreError,
};
use crate::modules::document_store::application::subscription::Subscription;
use crate::modules::localization::Lang;
use crate::modules::outreach::application::domain::ContactMessage;
use crate::modules::outreach::application::ports::incoming::use_cases::{
    GeneratePlanError, GeneratePlanUseCase, SendContactError, SendContactUseCase,
};

mock! {
    pub DocumentStore {}

    #[async_trait]
    impl DocumentStore for DocumentStore {
        async fn get(
            &self,
            collection: &str,
            id: &str,
        ) -> Result<Option<Document>, DocumentStoreError>;
        async fn set(
            &self,
            collection: &str,
            id: &str,
            fields: Fields,
            mode: WriteMode,
        ) -> Result<(), DocumentStoreError>;
        async fn add(&self, collection: &str, fields: Fields) -> Result<String, DocumentStoreError>;
        async fn delete(&self, collection: &str, id: &str) -> Result<(), DocumentStoreError>;
        async fn list(&self, collection: &str) -> Result<Vec<Document>, DocumentStoreError>;
        async fn subscribe(&self, collection: &str) -> Result<Subscription, DocumentStoreError>;
        async fn ping(&self) -> Result<(), DocumentStoreError>;
    }
}

/// Every call fails as if the backend were unreachable.
#[derive(Default, Clone, Copy)]
pub struct FailingDocumentStore;

fn unreachable_backend() -> DocumentStoreError {
    DocumentStoreError::DatabaseError("connection refused".to_string())
}

#[async_trait]
impl DocumentStore for FailingDocumentStore {
    async fn get(
        &self,
        _collection: &str,
        _id: &str,
    ) -> Result<Option<Document>, DocumentStoreError> {
        Err(unreachable_backend())
    }

    async fn set(
        &self,
        _collection: &str,
        _id: &str,
        _fields: Fields,
        _mode: WriteMode,
    ) -> Result<(), DocumentStoreError> {
        Err(unreachable_backend())
    }

    async fn add(&self, _collection: &str, _fields: Fields) -> Result<String, DocumentStoreError> {
        Err(unreachable_backend())
    }

    async fn delete(&self, _collection: &str, _id: &str) -> Result<(), DocumentStoreError> {
        Err(unreachable_backend())
    }

    async fn list(&self, _collection: &str) -> Result<Vec<Document>, DocumentStoreError> {
        Err(unreachable_backend())
    }

    async fn subscribe(&self, _collection: &str) -> Result<Subscription, DocumentStoreError> {
        Err(unreachable_backend())
    }

    async fn ping(&self) -> Result<(), DocumentStoreError> {
        Err(unreachable_backend())
    }
}

/// Contact use case with no relay behind it.
pub struct StubSendContact;

#[async_trait]
impl SendContactUseCase for StubSendContact {
    async fn execute(&self, _message: ContactMessage) -> Result<(), SendContactError> {
        Err(SendContactError::NotConfigured)
    }
}

/// Echoes the idea back as its plan.
pub struct StubGeneratePlan;

#[async_trait]
impl GeneratePlanUseCase for StubGeneratePlan {
    async fn execute(&self, idea: &str, _lang: Lang) -> Result<String, GeneratePlanError> {
        Ok(format!("Plan for: {idea}"))
    }
}
