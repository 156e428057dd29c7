use chrono::Utc;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::token_blacklist::TokenBlacklist;

/// Revoked session ids, kept until the token would have expired anyway.
#[derive(Debug, Default)]
pub struct InMemoryTokenBlacklist {
    revoked: Mutex<HashMap<Uuid, i64>>,
}

impl InMemoryTokenBlacklist {
    pub fn new() -> Self {
        Self::default()
    }

    fn prune(entries: &mut HashMap<Uuid, i64>, now: i64) {
        entries.retain(|_, expires_at| *expires_at > now);
    }
}

impl TokenBlacklist for InMemoryTokenBlacklist {
    fn revoke(&self, token_id: Uuid, expires_at: i64) {
        let now = Utc::now().timestamp();
        let mut entries = match self.revoked.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        Self::prune(&mut entries, now);
        if expires_at > now {
            entries.insert(token_id, expires_at);
        }
    }

    fn is_revoked(&self, token_id: Uuid) -> bool {
        let entries = match self.revoked.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        entries
            .get(&token_id)
            .is_some_and(|expires_at| *expires_at > Utc::now().timestamp())
    }
}
