use async_trait::async_trait;
use std::fmt;

use crate::modules::localization::Lang;

/// Both variants carry a message already localized for the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratePlanError {
    EmptyIdea(String),
    Failed(String),
}

impl fmt::Display for GeneratePlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratePlanError::EmptyIdea(msg) | GeneratePlanError::Failed(msg) => {
                write!(f, "{}", msg)
            }
        }
    }
}

#[async_trait]
pub trait GeneratePlanUseCase: Send + Sync {
    /// The generated plan, verbatim.
    async fn execute(&self, idea: &str, lang: Lang) -> Result<String, GeneratePlanError>;
}
