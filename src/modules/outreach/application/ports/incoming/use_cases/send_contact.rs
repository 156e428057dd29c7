use async_trait::async_trait;
use std::fmt;

use crate::modules::outreach::application::domain::ContactMessage;

#[derive(Debug, Clone, PartialEq)]
pub enum SendContactError {
    Validation(String),
    /// Neither the settings nor the environment name a relay endpoint.
    NotConfigured,
    RelayFailed(String),
}

impl fmt::Display for SendContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SendContactError::Validation(msg) => write!(f, "{}", msg),
            SendContactError::NotConfigured => write!(f, "no contact relay endpoint configured"),
            SendContactError::RelayFailed(msg) => write!(f, "relay failed: {}", msg),
        }
    }
}

#[async_trait]
pub trait SendContactUseCase: Send + Sync {
    async fn execute(&self, message: ContactMessage) -> Result<(), SendContactError>;
}
