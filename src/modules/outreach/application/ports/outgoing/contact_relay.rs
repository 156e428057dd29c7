use async_trait::async_trait;

use crate::modules::outreach::application::domain::ContactMessage;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RelayError {
    #[error("relay answered with status {0}")]
    Rejected(u16),

    #[error("relay unreachable: {0}")]
    Transport(String),
}

/// Third-party form endpoint. One attempt, no retry.
#[async_trait]
pub trait ContactRelay: Send + Sync {
    async fn relay(&self, endpoint: &str, message: &ContactMessage) -> Result<(), RelayError>;
}
