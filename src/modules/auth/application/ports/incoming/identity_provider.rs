use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::watch;
use utoipa::ToSchema;

use crate::modules::auth::application::domain::entities::SessionInfo;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IdentityError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token has expired")]
    TokenExpired,

    #[error("Session has been signed out")]
    Revoked,

    #[error("Identity provider failure: {0}")]
    Internal(String),
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignedIn {
    pub access_token: String,
    pub session: SessionInfo,
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<SignedIn, IdentityError>;

    /// Revokes the session of `access_token`. Signing out an already
    /// expired session is not an error.
    fn sign_out(&self, access_token: &str) -> Result<(), IdentityError>;

    /// Session behind a bearer token, if it is still valid.
    fn authorize(&self, access_token: &str) -> Result<SessionInfo, IdentityError>;

    /// Most recent live session; `None` after it signs out.
    fn sessions(&self) -> watch::Receiver<Option<SessionInfo>>;
}
