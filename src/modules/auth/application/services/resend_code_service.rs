use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::warn;

use crate::auth::application::{
    domain::entities::{VerificationKind, RESEND_COOLDOWN_SECONDS},
    ports::{
        incoming::use_cases::{ResendCodeCommand, ResendCodeError, ResendCodeUseCase},
        outgoing::{UserRepository, VerificationCodeRepository},
    },
    services::{IssueCodeError, VerificationCodeIssuer},
};

pub struct ResendCodeService<R>
where
    R: UserRepository,
{
    users: R,
    codes: Arc<dyn VerificationCodeRepository>,
    issuer: VerificationCodeIssuer,
    clock: fn() -> DateTime<Utc>,
}

impl<R> ResendCodeService<R>
where
    R: UserRepository,
{
    pub fn new(
        users: R,
        codes: Arc<dyn VerificationCodeRepository>,
        issuer: VerificationCodeIssuer,
    ) -> Self {
        Self {
            users,
            codes,
            issuer,
            clock: Utc::now,
        }
    }

    #[cfg(test)]
    fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }
}

#[async_trait]
impl<R> ResendCodeUseCase for ResendCodeService<R>
where
    R: UserRepository,
{
    async fn execute(&self, command: ResendCodeCommand) -> Result<(), ResendCodeError> {
        let user = self
            .users
            .find_by_email(command.email())
            .await
            .map_err(|e| ResendCodeError::RepositoryError(e.to_string()))?
            .ok_or(ResendCodeError::UserNotFound)?;

        if user.is_verified {
            return Err(ResendCodeError::AlreadyVerified);
        }

        let latest = self
            .codes
            .latest_created_at(&user.email, VerificationKind::EmailVerification)
            .await
            .map_err(|e| ResendCodeError::RepositoryError(e.to_string()))?;

        if let Some(created_at) = latest {
            let elapsed = ((self.clock)() - created_at).num_seconds();
            if elapsed < RESEND_COOLDOWN_SECONDS {
                warn!(user_id = %user.id, elapsed, "Verification code resend throttled");
                return Err(ResendCodeError::TooManyRequests {
                    retry_after_seconds: RESEND_COOLDOWN_SECONDS - elapsed,
                });
            }
        }

        self.issuer
            .issue(&user.email, &user.full_name)
            .await
            .map_err(|e| match e {
                IssueCodeError::EmailSendFailed(msg) => ResendCodeError::EmailSendFailed(msg),
                IssueCodeError::RepositoryError(msg) => ResendCodeError::RepositoryError(msg),
            })
    }
}
