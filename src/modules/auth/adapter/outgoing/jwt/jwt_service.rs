use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::fmt;
use tracing::{debug, error, warn};
use uuid::Uuid;

use crate::auth::application::{
    domain::entities::Role,
    ports::outgoing::token_provider::{TokenClaims, TokenError, TokenProvider},
};

use super::jwt_config::JwtConfig;

const LEEWAY_SECONDS: u64 = 30;

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("token_expiry", &self.config.token_expiry)
            .finish_non_exhaustive()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let secret = config.secret_key.as_bytes();
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            config,
        }
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = LEEWAY_SECONDS;
        validation.validate_nbf = true;
        validation
    }
}

fn classify(err: jsonwebtoken::errors::Error) -> TokenError {
    match err.kind() {
        ErrorKind::ExpiredSignature => {
            debug!("Rejected expired token");
            TokenError::TokenExpired
        }
        ErrorKind::ImmatureSignature => {
            warn!("Rejected token used before nbf");
            TokenError::TokenNotYetValid
        }
        ErrorKind::InvalidSignature => {
            error!("Rejected token with a bad signature");
            TokenError::InvalidSignature
        }
        kind => {
            warn!(?kind, "Rejected malformed token");
            TokenError::MalformedToken
        }
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_access_token(&self, user_id: Uuid, role: Role) -> Result<String, TokenError> {
        let issued_at = Utc::now();
        let claims = TokenClaims {
            sub: user_id,
            role,
            exp: (issued_at + Duration::seconds(self.config.token_expiry)).timestamp(),
            iat: issued_at.timestamp(),
            nbf: issued_at.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        decode::<TokenClaims>(token, &self.decoding_key, &Self::validation())
            .map(|data| data.claims)
            .map_err(classify)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test_secret_key_for_testing_purposes_only";

    fn service_with_expiry(token_expiry: i64) -> JwtTokenService {
        JwtTokenService::new(JwtConfig {
            secret_key: SECRET.to_string(),
            token_expiry,
        })
    }

    #[test]
    fn round_trip_keeps_subject_and_role() {
        let service = service_with_expiry(3600);
        let user_id = Uuid::new_v4();

        let token = service.generate_access_token(user_id, Role::Artisan).unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.role, Role::Artisan);
        assert!(claims.exp > Utc::now().timestamp());
        assert!(claims.nbf <= Utc::now().timestamp());
    }

    #[test]
    fn expired_token_beyond_leeway_is_rejected() {
        let service = service_with_expiry(-35);

        let token = service
            .generate_access_token(Uuid::new_v4(), Role::Customer)
            .unwrap();

        assert_eq!(service.verify_token(&token), Err(TokenError::TokenExpired));
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = service_with_expiry(3600)
            .generate_access_token(Uuid::new_v4(), Role::Admin)
            .unwrap();

        let other = JwtTokenService::new(JwtConfig {
            secret_key: format!("{SECRET}_DIFFERENT"),
            token_expiry: 3600,
        });

        assert_eq!(other.verify_token(&token), Err(TokenError::InvalidSignature));
    }

    #[test]
    fn garbage_token_is_malformed() {
        let service = service_with_expiry(3600);
        assert_eq!(
            service.verify_token("invalid.jwt.token"),
            Err(TokenError::MalformedToken)
        );
    }

    #[test]
    fn payload_with_unknown_role_is_malformed() {
        use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};

        let service = service_with_expiry(3600);
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(r#"{"sub":"x","role":"root"}"#);

        let result = service.verify_token(&format!("{header}.{payload}.sig"));
        assert!(result.is_err());
    }

    #[test]
    fn debug_hides_secret() {
        let debug = format!("{:?}", service_with_expiry(3600));
        assert!(debug.contains("JwtTokenService"));
        assert!(!debug.contains(SECRET));
    }
}
