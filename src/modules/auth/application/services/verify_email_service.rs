use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::application::{
    domain::entities::VerificationKind,
    ports::{
        incoming::use_cases::{VerifyEmailCommand, VerifyEmailError, VerifyEmailUseCase},
        outgoing::{UserRepository, UserRepositoryError, VerificationCodeRepository},
    },
};

pub struct VerifyEmailService<R>
where
    R: UserRepository,
{
    users: R,
    codes: Arc<dyn VerificationCodeRepository>,
}

impl<R> VerifyEmailService<R>
where
    R: UserRepository,
{
    pub fn new(users: R, codes: Arc<dyn VerificationCodeRepository>) -> Self {
        Self { users, codes }
    }
}

#[async_trait]
impl<R> VerifyEmailUseCase for VerifyEmailService<R>
where
    R: UserRepository,
{
    async fn execute(&self, command: VerifyEmailCommand) -> Result<(), VerifyEmailError> {
        let record = self
            .codes
            .find_unused(
                command.email(),
                command.code(),
                VerificationKind::EmailVerification,
            )
            .await
            .map_err(|e| VerifyEmailError::RepositoryError(e.to_string()))?
            .ok_or_else(|| {
                warn!(email = %command.email(), "Invalid verification code submitted");
                VerifyEmailError::InvalidCode
            })?;

        if record.is_expired_at(Utc::now()) {
            return Err(VerifyEmailError::CodeExpired);
        }

        let user = self
            .users
            .find_by_email(command.email())
            .await
            .map_err(|e| VerifyEmailError::RepositoryError(e.to_string()))?
            .ok_or(VerifyEmailError::UserNotFound)?;

        self.codes
            .mark_used(record.id)
            .await
            .map_err(|e| VerifyEmailError::RepositoryError(e.to_string()))?;

        self.users
            .mark_verified(&user.email)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => VerifyEmailError::UserNotFound,
                other => VerifyEmailError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %user.id, "Email verified");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::Role;
    use crate::tests::support::fakes::{
        code_record, sample_user, InMemoryUserRepository, InMemoryVerificationCodes,
    };
    use chrono::Duration;

    const EMAIL: &str = "nadia@example.ma";

    fn command(code: &str) -> VerifyEmailCommand {
        VerifyEmailCommand::new(Some(EMAIL.to_string()), Some(code.to_string())).unwrap()
    }

    #[tokio::test]
    async fn valid_code_verifies_user_and_consumes_code() {
        // Arrange
        let users = InMemoryUserRepository::default();
        users.insert(sample_user(EMAIL, Role::Customer, false), "x".to_string());
        let codes = InMemoryVerificationCodes::default();
        codes.insert(code_record(EMAIL, "123456", Utc::now() + Duration::minutes(10)));
        let service = VerifyEmailService::new(users.clone(), Arc::new(codes.clone()));

        // Act
        let result = service.execute(command("123456")).await;

        // Assert
        assert!(result.is_ok());
        assert!(users.is_verified(EMAIL));
        assert!(codes.all()[0].used);
    }

    #[tokio::test]
    async fn unknown_code_is_invalid() {
        let codes = InMemoryVerificationCodes::default();
        codes.insert(code_record(EMAIL, "123456", Utc::now() + Duration::minutes(10)));
        let service =
            VerifyEmailService::new(InMemoryUserRepository::default(), Arc::new(codes));

        let result = service.execute(command("654321")).await;
        assert!(matches!(result, Err(VerifyEmailError::InvalidCode)));
    }

    #[tokio::test]
    async fn expired_code_is_rejected() {
        let users = InMemoryUserRepository::default();
        users.insert(sample_user(EMAIL, Role::Customer, false), "x".to_string());
        let codes = InMemoryVerificationCodes::default();
        codes.insert(code_record(EMAIL, "123456", Utc::now() - Duration::minutes(1)));
        let service = VerifyEmailService::new(users.clone(), Arc::new(codes));

        let result = service.execute(command("123456")).await;

        assert!(matches!(result, Err(VerifyEmailError::CodeExpired)));
        assert!(!users.is_verified(EMAIL));
    }

    #[tokio::test]
    async fn missing_user_is_not_found() {
        let codes = InMemoryVerificationCodes::default();
        codes.insert(code_record(EMAIL, "123456", Utc::now() + Duration::minutes(10)));
        let service =
            VerifyEmailService::new(InMemoryUserRepository::default(), Arc::new(codes));

        let result = service.execute(command("123456")).await;
        assert!(matches!(result, Err(VerifyEmailError::UserNotFound)));
    }
}
