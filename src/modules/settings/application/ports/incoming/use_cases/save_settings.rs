use async_trait::async_trait;
use std::fmt;

use crate::modules::document_store::application::domain::entities::Fields;
use crate::modules::settings::application::domain::SettingsDocId;

#[derive(Debug, Clone, PartialEq)]
pub enum SaveSettingsError {
    Validation(String),
    RepositoryError(String),
}

impl fmt::Display for SaveSettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveSettingsError::Validation(msg) => write!(f, "invalid settings: {}", msg),
            SaveSettingsError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

/// Merge-write: fields absent from the payload keep their stored value.
#[async_trait]
pub trait SaveSettingsUseCase: Send + Sync {
    async fn execute(&self, id: SettingsDocId, partial: Fields) -> Result<(), SaveSettingsError>;
}
