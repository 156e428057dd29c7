use std::fmt;

use crate::modules::content::application::domain::ValidationError;
use crate::modules::document_store::application::ports::outgoing::DocumentStoreError;

#[derive(Debug, Clone, PartialEq)]
pub enum RecordError {
    Validation(String),
    NotFound(String),
    RepositoryError(String),
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::Validation(msg) => write!(f, "{}", msg),
            RecordError::NotFound(id) => write!(f, "record '{}' not found", id),
            RecordError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

impl From<ValidationError> for RecordError {
    fn from(err: ValidationError) -> Self {
        RecordError::Validation(err.0)
    }
}

impl From<DocumentStoreError> for RecordError {
    fn from(err: DocumentStoreError) -> Self {
        RecordError::RepositoryError(err.to_string())
    }
}
