use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::modules::document_store::application::domain::entities::{Document, Fields};

/// A client-side validation failure. Nothing is written when one occurs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    pub fn required(field: &str) -> Self {
        Self(format!("{} is required", field))
    }
}

/// A kind of record kept in one of the open-ended collections.
///
/// Reading is tolerant of every shape ever stored; writing emits exactly one
/// shape, produced by `to_fields`.
pub trait CollectionRecord: Clone + Send + Sync + Sized + 'static {
    const COLLECTION: &'static str;

    /// What the admin editor submits on create and update. Any `id` in the
    /// payload is ignored.
    type Draft: DeserializeOwned + Send + 'static;

    fn from_draft(draft: Self::Draft) -> Result<Self, ValidationError>;

    fn from_fields(fields: &Fields) -> Self;

    fn to_fields(&self) -> Fields;

    /// Presentation order of a full snapshot. Defaults to snapshot order.
    fn order(_records: &mut Vec<StoredRecord<Self>>) {}
}

/// A record together with its store-assigned id.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredRecord<R> {
    pub id: String,
    pub record: R,
}

impl<R: CollectionRecord> StoredRecord<R> {
    pub fn new(id: impl Into<String>, record: R) -> Self {
        Self {
            id: id.into(),
            record,
        }
    }

    pub fn from_document(document: &Document) -> Self {
        Self::new(document.id.clone(), R::from_fields(&document.fields))
    }

    /// Reads and orders a whole collection snapshot.
    pub fn from_snapshot(documents: &[Document]) -> Vec<Self> {
        let mut records: Vec<Self> = documents.iter().map(Self::from_document).collect();
        R::order(&mut records);
        records
    }
}

impl<R: CollectionRecord> Serialize for StoredRecord<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut fields = self.record.to_fields();
        fields.insert("id".to_string(), Value::String(self.id.clone()));
        fields.serialize(serializer)
    }
}

/// Trimmed string, `""` for absent or non-string values.
pub(crate) fn trimmed(fields: &Fields, key: &str) -> String {
    fields
        .get(key)
        .and_then(Value::as_str)
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}
