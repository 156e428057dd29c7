use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Raw field map of a stored document. The store enforces no schema.
pub type Fields = Map<String, Value>;

/// Collection names shared by the admin editor and the public site.
pub mod collections {
    pub const SETTINGS: &str = "settings";
    pub const PROJECTS: &str = "projects";
    pub const SKILLS: &str = "skills";
    pub const EXPERIENCES: &str = "experiences";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub fields: Fields,
}

impl Document {
    pub fn new(id: impl Into<String>, fields: Fields) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// String field, or `""` when absent or not a string.
    pub fn text(&self, key: &str) -> &str {
        text(&self.fields, key)
    }

    pub fn flag(&self, key: &str) -> Option<bool> {
        flag(&self.fields, key)
    }
}

pub fn text<'a>(fields: &'a Fields, key: &str) -> &'a str {
    fields.get(key).and_then(Value::as_str).unwrap_or("")
}

pub fn flag(fields: &Fields, key: &str) -> Option<bool> {
    fields.get(key).and_then(Value::as_bool)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Only the given fields are replaced; every other stored field survives.
    Merge,
    /// The stored document becomes exactly the given fields.
    Overwrite,
}

/// Full contents of one collection at a point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub collection: String,
    pub documents: Vec<Document>,
}

impl Snapshot {
    pub fn new(collection: impl Into<String>, documents: Vec<Document>) -> Self {
        Self {
            collection: collection.into(),
            documents,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        match value {
            Value::Object(fields) => Document::new("d1", fields),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_text_tolerates_missing_and_wrong_types() {
        let d = doc(json!({ "name": "Rust", "count": 3 }));

        assert_eq!(d.text("name"), "Rust");
        assert_eq!(d.text("count"), "");
        assert_eq!(d.text("missing"), "");
    }

    #[test]
    fn test_flag_reads_only_booleans() {
        let d = doc(json!({ "isCurrent": true, "showHome": "yes" }));

        assert_eq!(d.flag("isCurrent"), Some(true));
        assert_eq!(d.flag("showHome"), None);
    }
}
