use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::auth::application::ports::{
    incoming::use_cases::{LoginCommand, LoginError, LoginResult, LoginUserUseCase},
    outgoing::{PasswordHasher, TokenProvider, UserRepository},
};

/// Well-formed Argon2id hash (default cost) that matches no password.
/// Checked on unknown emails so both failure paths cost one hash.
const UNKNOWN_USER_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$ZmlraGlkbWF0aWstc2FsdA$AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8";

pub struct LoginUserService<R>
where
    R: UserRepository,
{
    users: R,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenProvider>,
}

impl<R> LoginUserService<R>
where
    R: UserRepository,
{
    pub fn new(users: R, hasher: Arc<dyn PasswordHasher>, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl<R> LoginUserUseCase for LoginUserService<R>
where
    R: UserRepository,
{
    async fn execute(&self, command: LoginCommand) -> Result<LoginResult, LoginError> {
        let credentials = self
            .users
            .find_credentials_by_email(command.email())
            .await
            .map_err(|e| LoginError::RepositoryError(e.to_string()))?;

        let Some(credentials) = credentials else {
            let _ = self
                .hasher
                .verify_password(command.password(), UNKNOWN_USER_HASH)
                .await;
            warn!("Login attempt for unknown email");
            return Err(LoginError::InvalidCredentials);
        };

        let valid = self
            .hasher
            .verify_password(command.password(), &credentials.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !valid {
            warn!(user_id = %credentials.user.id, "Login attempt with wrong password");
            return Err(LoginError::InvalidCredentials);
        }

        let user = credentials.user;
        let token = self
            .tokens
            .generate_access_token(user.id, user.role)
            .map_err(|e| {
                error!(user_id = %user.id, error = %e, "Token generation failed");
                LoginError::TokenGenerationFailed(e.to_string())
            })?;

        info!(user_id = %user.id, "User logged in");
        Ok(LoginResult { user, token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
    use crate::auth::application::domain::entities::Role;
    use crate::auth::application::ports::outgoing::password_hasher::HashError;
    use crate::tests::support::fakes::{
        sample_user, InMemoryUserRepository, PlainTextHasher, StaticTokenProvider,
    };

    fn service(users: InMemoryUserRepository) -> LoginUserService<InMemoryUserRepository> {
        LoginUserService::new(users, Arc::new(PlainTextHasher), Arc::new(StaticTokenProvider))
    }

    fn seeded() -> InMemoryUserRepository {
        let users = InMemoryUserRepository::default();
        users.insert(
            sample_user("omar@example.ma", Role::Customer, true),
            "hashed:correct-horse".to_string(),
        );
        users
    }

    #[tokio::test]
    async fn login_success_returns_token() {
        let result = service(seeded())
            .execute(LoginCommand::new("OMAR@example.ma".into(), "correct-horse".into()).unwrap())
            .await
            .unwrap();

        assert_eq!(result.user.email, "omar@example.ma");
        assert!(!result.token.is_empty());
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_are_indistinguishable() {
        let svc = service(seeded());

        let wrong_password = svc
            .execute(LoginCommand::new("omar@example.ma".into(), "nope".into()).unwrap())
            .await
            .unwrap_err();
        let unknown_email = svc
            .execute(LoginCommand::new("ghost@example.ma".into(), "nope".into()).unwrap())
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, LoginError::InvalidCredentials));
        assert!(matches!(unknown_email, LoginError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }

    /// Counts verifications and rejects every password.
    #[derive(Clone, Default)]
    struct CountingHasher {
        verified: Arc<std::sync::atomic::AtomicUsize>,
    }

    #[async_trait]
    impl PasswordHasher for CountingHasher {
        async fn hash_password(&self, password: &str) -> Result<String, HashError> {
            Ok(password.to_string())
        }

        async fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
            self.verified.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            Ok(false)
        }
    }

    #[tokio::test]
    async fn unknown_email_still_runs_one_verification() {
        let hasher = CountingHasher::default();
        let svc = LoginUserService::new(
            seeded(),
            Arc::new(hasher.clone()),
            Arc::new(StaticTokenProvider),
        );

        let result = svc
            .execute(LoginCommand::new("ghost@example.ma".into(), "nope".into()).unwrap())
            .await;

        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
        assert_eq!(hasher.verified.load(std::sync::atomic::Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn unknown_user_hash_is_valid_argon2_that_never_matches() {
        let argon2 = Argon2Hasher::default();

        assert!(!argon2.verify_password("", UNKNOWN_USER_HASH).await.unwrap());
        assert!(!argon2
            .verify_password("correct-horse", UNKNOWN_USER_HASH)
            .await
            .unwrap());
    }
}
