use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum HashError {
    #[error("Invalid hashing parameters: {0}")]
    InvalidParams(String),

    #[error("Stored hash is not a PHC string")]
    MalformedHash,

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Hashing worker failed")]
    Worker,
}

/// Verifies the admin password against the configured hash. `hash_password`
/// backs the `hash-password` command that produces that hash.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    /// `Ok(false)` on a wrong password; `Err` only when the hash is unusable.
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
