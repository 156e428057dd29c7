use serde_json::Value;

use crate::modules::document_store::application::domain::entities::{Document, Fields};

/// Field map from a `json!` object literal.
pub fn fields(value: Value) -> Fields {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture must be a JSON object, got {other}"),
    }
}

pub fn document(id: &str, value: Value) -> Document {
    Document::new(id, fields(value))
}
