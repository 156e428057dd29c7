use uuid::Uuid;

/// Revoked token ids, kept until the token would have expired anyway.
pub trait TokenBlacklist: Send + Sync {
    fn revoke(&self, token_id: Uuid, expires_at: i64);
    fn is_revoked(&self, token_id: Uuid) -> bool;
}
