use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::domain::entities::Role;
use crate::auth::application::ports::outgoing::TokenProvider;

const TEST_SECRET: &str = "test_secret_key_for_testing_only_0123456789";

/// Real HS256 provider, registered as app data in route tests.
pub fn token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(JwtTokenService::new(JwtConfig {
        secret_key: TEST_SECRET.to_string(),
        token_expiry: 3600,
    }))
}

/// `Authorization` header carrying a freshly signed token.
pub fn bearer(user_id: Uuid, role: Role) -> (&'static str, String) {
    let token = token_provider()
        .generate_access_token(user_id, role)
        .expect("test token");
    ("Authorization", format!("Bearer {token}"))
}
