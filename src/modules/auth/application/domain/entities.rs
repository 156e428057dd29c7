use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;

/// The single operator allowed into the admin panel.
#[derive(Clone)]
pub struct AdminAccount {
    pub email: String,
    /// Argon2 PHC string.
    pub password_hash: String,
}

impl AdminAccount {
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password_hash: password_hash.into(),
        }
    }

    pub fn matches_email(&self, email: &str) -> bool {
        self.email.trim().eq_ignore_ascii_case(email.trim())
    }
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for AdminAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminAccount")
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

/// An authenticated admin session, one per issued access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub session_id: Uuid,
    pub email: String,
    pub expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_match_ignores_case_and_whitespace() {
        let admin = AdminAccount::new("Admin@Example.com", "hash");

        assert!(admin.matches_email(" admin@example.com "));
        assert!(!admin.matches_email("other@example.com"));
    }

    #[test]
    fn test_debug_redacts_password_hash() {
        let admin = AdminAccount::new("admin@example.com", "$argon2id$secret");

        assert!(!format!("{:?}", admin).contains("secret"));
    }
}
