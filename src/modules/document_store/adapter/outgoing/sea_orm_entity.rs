use sea_orm::entity::prelude::*;

use crate::modules::document_store::application::domain::entities::Document;
use crate::modules::document_store::application::ports::outgoing::DocumentStoreError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "documents")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub collection: String,

    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    #[sea_orm(column_type = "JsonBinary")]
    pub data: Json,

    /// Insertion counter; listing order.
    pub position: i64,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_document(&self) -> Result<Document, DocumentStoreError> {
        match &self.data {
            Json::Object(fields) => Ok(Document::new(self.id.clone(), fields.clone())),
            other => Err(DocumentStoreError::SerializationError(format!(
                "document {}/{} holds {} instead of an object",
                self.collection,
                self.id,
                json_kind(other)
            ))),
        }
    }
}

fn json_kind(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "a boolean",
        Json::Number(_) => "a number",
        Json::String(_) => "a string",
        Json::Array(_) => "an array",
        Json::Object(_) => "an object",
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
