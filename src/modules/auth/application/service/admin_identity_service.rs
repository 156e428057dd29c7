use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::watch;

use crate::modules::auth::application::domain::entities::{AdminAccount, SessionInfo};
use crate::modules::auth::application::ports::incoming::{
    IdentityError, IdentityProvider, SignedIn,
};
use crate::modules::auth::application::ports::outgoing::{
    PasswordHasher, TokenBlacklist, TokenClaims, TokenError, TokenProvider,
};

/// Email/password identity for the single configured admin.
pub struct AdminIdentityService<T, H, B>
where
    T: TokenProvider,
    H: PasswordHasher,
    B: TokenBlacklist,
{
    admin: AdminAccount,
    tokens: T,
    hasher: H,
    blacklist: B,
    current: watch::Sender<Option<SessionInfo>>,
}

impl<T, H, B> AdminIdentityService<T, H, B>
where
    T: TokenProvider,
    H: PasswordHasher,
    B: TokenBlacklist,
{
    pub fn new(admin: AdminAccount, tokens: T, hasher: H, blacklist: B) -> Self {
        let (current, _) = watch::channel(None);
        Self {
            admin,
            tokens,
            hasher,
            blacklist,
            current,
        }
    }

    fn session_from(claims: &TokenClaims) -> Result<SessionInfo, IdentityError> {
        let expires_at = DateTime::<Utc>::from_timestamp(claims.exp, 0)
            .ok_or_else(|| IdentityError::Internal("token expiry out of range".to_string()))?;

        Ok(SessionInfo {
            session_id: claims.jti,
            email: claims.sub.clone(),
            expires_at,
        })
    }
}

impl From<TokenError> for IdentityError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::TokenExpired => IdentityError::TokenExpired,
            TokenError::EncodingError(msg) => IdentityError::Internal(msg),
            _ => IdentityError::InvalidToken,
        }
    }
}

#[async_trait]
impl<T, H, B> IdentityProvider for AdminIdentityService<T, H, B>
where
    T: TokenProvider,
    H: PasswordHasher,
    B: TokenBlacklist,
{
    async fn sign_in(&self, email: &str, password: &str) -> Result<SignedIn, IdentityError> {
        if !self.admin.matches_email(email) {
            tracing::warn!("Sign-in rejected for unknown email");
            return Err(IdentityError::InvalidCredentials);
        }

        let valid = self
            .hasher
            .verify_password(password, &self.admin.password_hash)
            .await
            .map_err(|e| {
                tracing::error!("Admin password verification failed: {}", e);
                IdentityError::Internal(e.to_string())
            })?;

        if !valid {
            tracing::warn!("Sign-in rejected: wrong password");
            return Err(IdentityError::InvalidCredentials);
        }

        let issued = self.tokens.generate_access_token(&self.admin.email)?;
        let session = Self::session_from(&issued.claims)?;

        self.current.send_replace(Some(session.clone()));
        tracing::info!(session_id = %session.session_id, "Admin signed in");

        Ok(SignedIn {
            access_token: issued.token,
            session,
        })
    }

    fn sign_out(&self, access_token: &str) -> Result<(), IdentityError> {
        let claims = match self.tokens.verify_token(access_token) {
            Ok(claims) => claims,
            Err(TokenError::TokenExpired) => return Ok(()),
            Err(e) => return Err(e.into()),
        };

        self.blacklist.revoke(claims.jti, claims.exp);

        self.current.send_if_modified(|current| {
            if current.as_ref().is_some_and(|s| s.session_id == claims.jti) {
                *current = None;
                true
            } else {
                false
            }
        });

        tracing::info!(session_id = %claims.jti, "Admin signed out");
        Ok(())
    }

    fn authorize(&self, access_token: &str) -> Result<SessionInfo, IdentityError> {
        let claims = self.tokens.verify_token(access_token)?;

        if self.blacklist.is_revoked(claims.jti) {
            return Err(IdentityError::Revoked);
        }

        Self::session_from(&claims)
    }

    fn sessions(&self) -> watch::Receiver<Option<SessionInfo>> {
        self.current.subscribe()
    }
}
