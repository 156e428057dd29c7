use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::auth::adapter::outgoing::InMemoryTokenBlacklist;
use crate::modules::auth::application::domain::entities::AdminAccount;
use crate::modules::auth::application::ports::incoming::IdentityProvider;
use crate::modules::auth::application::ports::outgoing::{HashError, PasswordHasher};
use crate::modules::auth::application::service::AdminIdentityService;

pub const TEST_ADMIN_EMAIL: &str = "admin@example.com";
pub const TEST_ADMIN_PASSWORD: &str = "correct-horse";

/// Treats the stored "hash" as the plain password, keeping tests off argon2.
#[derive(Clone, Copy, Default)]
pub struct StubPasswordHasher;

#[async_trait]
impl PasswordHasher for StubPasswordHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(password.to_string())
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        Ok(password == hash)
    }
}

pub type TestIdentity =
    AdminIdentityService<JwtTokenService, StubPasswordHasher, InMemoryTokenBlacklist>;

pub fn create_test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: "test_secret_key_for_testing_only_32b".to_string(),
        issuer: "portfolio-test".to_string(),
        access_token_expiry: 3600,
    })
}

pub fn test_identity() -> Arc<TestIdentity> {
    Arc::new(AdminIdentityService::new(
        AdminAccount::new(TEST_ADMIN_EMAIL, TEST_ADMIN_PASSWORD),
        create_test_jwt_service(),
        StubPasswordHasher,
        InMemoryTokenBlacklist::new(),
    ))
}

/// Signs the test admin in and returns the bearer token.
pub async fn admin_token(identity: &Arc<TestIdentity>) -> String {
    identity
        .sign_in(TEST_ADMIN_EMAIL, TEST_ADMIN_PASSWORD)
        .await
        .expect("test admin sign-in")
        .access_token
}
