use std::env;

pub const DEFAULT_TOKEN_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;
const MIN_SECRET_LENGTH: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JwtConfigError {
    #[error("JWT_SECRET must be set")]
    MissingSecret,

    #[error("JWT_SECRET must be at least 32 characters long for HS256")]
    SecretTooShort,

    #[error("Invalid JWT_EXPIRY_SECONDS value: {0}")]
    InvalidExpiry(String),
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub token_expiry: i64, // seconds
}

impl JwtConfig {
    /// Reads `JWT_SECRET` and `JWT_EXPIRY_SECONDS` (default seven days).
    pub fn from_env() -> Result<Self, JwtConfigError> {
        let secret_key = env::var("JWT_SECRET").map_err(|_| JwtConfigError::MissingSecret)?;
        let expiry = env::var("JWT_EXPIRY_SECONDS").ok();
        Self::build(secret_key, expiry.as_deref())
    }

    fn build(secret_key: String, expiry: Option<&str>) -> Result<Self, JwtConfigError> {
        if secret_key.len() < MIN_SECRET_LENGTH {
            return Err(JwtConfigError::SecretTooShort);
        }

        let token_expiry = match expiry {
            None => DEFAULT_TOKEN_EXPIRY_SECONDS,
            Some(raw) => raw
                .parse::<i64>()
                .ok()
                .filter(|v| *v > 0)
                .ok_or_else(|| JwtConfigError::InvalidExpiry(raw.to_string()))?,
        };

        Ok(Self {
            secret_key,
            token_expiry,
        })
    }
}
