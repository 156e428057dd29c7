use crate::config::{lookup_non_empty, ConfigError};

#[derive(Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64, // Expiration in seconds
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("issuer", &self.issuer)
            .field("access_token_expiry", &self.access_token_expiry)
            .finish_non_exhaustive()
    }
}

impl JwtConfig {
    /// Reads `JWT_SECRET`, `JWT_ISSUER` and `JWT_ACCESS_EXPIRY`.
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key =
            lookup_non_empty(lookup, "JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;

        // HS256 requires at least 32 bytes
        if secret_key.len() < 32 {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                reason: "must be at least 32 characters long for HS256".to_string(),
            });
        }

        let access_token_expiry = match lookup_non_empty(lookup, "JWT_ACCESS_EXPIRY") {
            Some(raw) => raw.parse::<i64>().map_err(|e| ConfigError::Invalid {
                key: "JWT_ACCESS_EXPIRY",
                reason: e.to_string(),
            })?,
            None => 3600,
        };

        if access_token_expiry <= 0 || access_token_expiry > 86400 {
            return Err(ConfigError::Invalid {
                key: "JWT_ACCESS_EXPIRY",
                reason: "must be between 1 and 86400 seconds (24 hours)".to_string(),
            });
        }

        let issuer =
            lookup_non_empty(lookup, "JWT_ISSUER").unwrap_or_else(|| "portfolio".to_string());

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_with(expiry: &'static str) -> impl Fn(&str) -> Option<String> {
        move |key| match key {
            "JWT_SECRET" => Some("0123456789abcdef0123456789abcdef".to_string()),
            "JWT_ACCESS_EXPIRY" => Some(expiry.to_string()),
            _ => None,
        }
    }

    #[test]
    fn test_short_secret_is_rejected() {
        let lookup = |key: &str| (key == "JWT_SECRET").then(|| "short".to_string());

        let err = JwtConfig::from_lookup(&lookup).unwrap_err();

        assert!(matches!(err, ConfigError::Invalid { key: "JWT_SECRET", .. }));
    }

    #[test]
    fn test_expiry_out_of_range_is_rejected() {
        assert!(JwtConfig::from_lookup(&lookup_with("0")).is_err());
        assert!(JwtConfig::from_lookup(&lookup_with("90000")).is_err());
        assert!(JwtConfig::from_lookup(&lookup_with("soon")).is_err());
    }

    #[test]
    fn test_defaults_apply() {
        let config = JwtConfig::from_lookup(&lookup_with("1800")).unwrap();

        assert_eq!(config.issuer, "portfolio");
        assert_eq!(config.access_token_expiry, 1800);
    }

    #[test]
    fn test_debug_hides_secret() {
        let config = JwtConfig::from_lookup(&lookup_with("1800")).unwrap();

        assert!(!format!("{:?}", config).contains("0123456789abcdef"));
    }
}
