use std::env;

use crate::modules::auth::adapter::outgoing::jwt::JwtConfig;
use crate::modules::auth::application::domain::entities::AdminAccount;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },
}

pub const DEFAULT_IDEA_GENERATOR_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent";

#[derive(Debug, Clone)]
pub struct IdeaGeneratorConfig {
    pub url: String,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` runs against the in-memory document store.
    pub database_url: Option<String>,
    pub jwt: JwtConfig,
    pub admin: AdminAccount,
    /// Used when `generalSettings.formspreeUrl` is empty.
    pub contact_relay_url: Option<String>,
    pub idea_generator: IdeaGeneratorConfig,
}

/// Loads `.env.{RUST_ENV}` first, then falls back to `.env`.
#[cfg(not(tarpaulin_include))]
pub fn load_env_files() {
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}

/// Non-empty value of `key`.
pub(crate) fn lookup_non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup_non_empty(&lookup, "HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let port = match lookup_non_empty(&lookup, "PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::Invalid {
                key: "PORT",
                reason: e.to_string(),
            })?,
            None => 8080,
        };

        let admin_email =
            lookup_non_empty(&lookup, "ADMIN_EMAIL").ok_or(ConfigError::Missing("ADMIN_EMAIL"))?;
        if !email_address::EmailAddress::is_valid(&admin_email) {
            return Err(ConfigError::Invalid {
                key: "ADMIN_EMAIL",
                reason: "not an email address".to_string(),
            });
        }

        let password_hash = lookup_non_empty(&lookup, "ADMIN_PASSWORD_HASH")
            .ok_or(ConfigError::Missing("ADMIN_PASSWORD_HASH"))?;
        argon2::password_hash::PasswordHash::new(&password_hash).map_err(|e| {
            ConfigError::Invalid {
                key: "ADMIN_PASSWORD_HASH",
                reason: e.to_string(),
            }
        })?;

        Ok(Self {
            host,
            port,
            database_url: lookup_non_empty(&lookup, "DATABASE_URL"),
            jwt: JwtConfig::from_lookup(&lookup)?,
            admin: AdminAccount::new(admin_email, password_hash),
            contact_relay_url: lookup_non_empty(&lookup, "CONTACT_RELAY_URL"),
            idea_generator: IdeaGeneratorConfig {
                url: lookup_non_empty(&lookup, "IDEA_GENERATOR_URL")
                    .unwrap_or_else(|| DEFAULT_IDEA_GENERATOR_URL.to_string()),
                api_key: lookup_non_empty(&lookup, "IDEA_GENERATOR_API_KEY"),
            },
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
