pub mod password_hasher;
pub mod token_blacklist;
pub mod token_provider;

pub use password_hasher::{HashError, PasswordHasher};
pub use token_blacklist::TokenBlacklist;
pub use token_provider::{IssuedToken, TokenClaims, TokenError, TokenProvider};
