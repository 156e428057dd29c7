use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    #[error("text generator answered with status {0}")]
    Rejected(u16),

    #[error("text generator unreachable: {0}")]
    Transport(String),

    #[error("text generator returned no text")]
    EmptyReply,
}

/// Hosted generative text service. One attempt, no retry.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, system_prompt: &str, input: &str) -> Result<String, GenerationError>;
}
