use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    Set,
};
use serde_json::Value;
use tracing::error;
use uuid::Uuid;

use crate::modules::document_store::application::change_feed::ChangeFeed;
use crate::modules::document_store::application::domain::entities::{
    Document, Fields, Snapshot, WriteMode,
};
use crate::modules::document_store::application::ports::outgoing::{
    DocumentStore, DocumentStoreError,
};
use crate::modules::document_store::application::subscription::Subscription;

use super::sea_orm_entity::{
    ActiveModel as DocumentActiveModel, Column as DocumentColumn, Entity as DocumentEntity,
    Model as DocumentModel,
};

/// Documents persisted as JSONB rows keyed by `(collection, id)`.
///
/// Change notifications go through an in-process [`ChangeFeed`], so
/// subscribers only observe writes made through this server.
#[derive(Clone)]
pub struct PostgresDocumentStore {
    db: Arc<DatabaseConnection>,
    feed: ChangeFeed,
}

impl PostgresDocumentStore {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            db,
            feed: ChangeFeed::new(),
        }
    }

    fn active_model(collection: &str, id: &str, fields: Fields) -> DocumentActiveModel {
        let now = Utc::now().fixed_offset();

        DocumentActiveModel {
            collection: Set(collection.to_string()),
            id: Set(id.to_string()),
            data: Set(Value::Object(fields)),
            position: NotSet,
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    async fn notify(&self, collection: &str) {
        if !self.feed.has_subscribers(collection) {
            return;
        }

        // Concurrent writes race their reads; the feed drops whichever
        // snapshot was read under an older ticket.
        let ticket = self.feed.ticket(collection);
        match self.list(collection).await {
            Ok(documents) => self
                .feed
                .publish_ticketed(ticket, Snapshot::new(collection, documents)),
            Err(e) => {
                error!(
                    collection = %collection,
                    error = %e,
                    "failed to load snapshot for subscribers"
                );
            }
        }
    }
}

#[async_trait]
impl DocumentStore for PostgresDocumentStore {
    async fn get(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, DocumentStoreError> {
        let model = DocumentEntity::find_by_id((collection.to_string(), id.to_string()))
            .one(&*self.db)
            .await
            .map_err(|e| DocumentStoreError::DatabaseError(e.to_string()))?;

        model.map(|m| m.to_document()).transpose()
    }

    async fn set(
        &self,
        collection: &str,
        id: &str,
        fields: Fields,
        mode: WriteMode,
    ) -> Result<(), DocumentStoreError> {
        let key = [DocumentColumn::Collection, DocumentColumn::Id];
        let on_conflict = match mode {
            WriteMode::Merge => OnConflict::columns(key)
                .value(
                    DocumentColumn::Data,
                    Expr::cust(r#""documents"."data" || "excluded"."data""#),
                )
                .update_column(DocumentColumn::UpdatedAt)
                .to_owned(),
            WriteMode::Overwrite => OnConflict::columns(key)
                .update_columns([DocumentColumn::Data, DocumentColumn::UpdatedAt])
                .to_owned(),
        };

        DocumentEntity::insert(Self::active_model(collection, id, fields))
            .on_conflict(on_conflict)
            .exec_without_returning(&*self.db)
            .await
            .map_err(|e| DocumentStoreError::DatabaseError(e.to_string()))?;

        self.notify(collection).await;
        Ok(())
    }

    async fn add(&self, collection: &str, fields: Fields) -> Result<String, DocumentStoreError> {
        let id = Uuid::new_v4().simple().to_string();

        DocumentEntity::insert(Self::active_model(collection, &id, fields))
            .exec_without_returning(&*self.db)
            .await
            .map_err(|e| DocumentStoreError::DatabaseError(e.to_string()))?;

        self.notify(collection).await;
        Ok(id)
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), DocumentStoreError> {
        let result = DocumentEntity::delete_many()
            .filter(DocumentColumn::Collection.eq(collection))
            .filter(DocumentColumn::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(|e| DocumentStoreError::DatabaseError(e.to_string()))?;

        if result.rows_affected > 0 {
            self.notify(collection).await;
        }

        Ok(())
    }

    async fn list(&self, collection: &str) -> Result<Vec<Document>, DocumentStoreError> {
        let models: Vec<DocumentModel> = DocumentEntity::find()
            .filter(DocumentColumn::Collection.eq(collection))
            .order_by_asc(DocumentColumn::Position)
            .all(&*self.db)
            .await
            .map_err(|e| DocumentStoreError::DatabaseError(e.to_string()))?;

        models.iter().map(DocumentModel::to_document).collect()
    }

    async fn subscribe(&self, collection: &str) -> Result<Subscription, DocumentStoreError> {
        let receiver = self.feed.open(collection);
        let initial = self.list(collection).await?;

        Ok(self.feed.subscription(receiver, collection, initial))
    }

    async fn ping(&self) -> Result<(), DocumentStoreError> {
        self.db
            .ping()
            .await
            .map_err(|e| DocumentStoreError::DatabaseError(e.to_string()))
    }
}
