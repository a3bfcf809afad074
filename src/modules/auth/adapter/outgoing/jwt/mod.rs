mod jwt_config;
mod jwt_service;

pub use jwt_config::{JwtConfig, JwtConfigError, DEFAULT_TOKEN_EXPIRY_SECONDS};
pub use jwt_service::JwtTokenService;
