use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::info;

use crate::auth::application::{
    domain::entities::{
        generate_verification_code, VerificationKind, VERIFICATION_CODE_TTL_MINUTES,
    },
    ports::outgoing::{NewVerificationCode, VerificationCodeRepository},
};
use crate::email::application::ports::outgoing::UserEmailNotifier;

#[derive(Debug, Clone, thiserror::Error)]
pub enum IssueCodeError {
    #[error("Repository error: {0}")]
    RepositoryError(String),

    #[error("Email sending failed: {0}")]
    EmailSendFailed(String),
}

/// Replaces any pending email-verification code and mails a fresh one.
#[derive(Clone)]
pub struct VerificationCodeIssuer {
    codes: Arc<dyn VerificationCodeRepository>,
    notifier: Arc<dyn UserEmailNotifier + Send + Sync>,
}

impl VerificationCodeIssuer {
    pub fn new(
        codes: Arc<dyn VerificationCodeRepository>,
        notifier: Arc<dyn UserEmailNotifier + Send + Sync>,
    ) -> Self {
        Self { codes, notifier }
    }

    pub async fn issue(&self, email: &str, full_name: &str) -> Result<(), IssueCodeError> {
        let kind = VerificationKind::EmailVerification;

        self.codes
            .delete_for_email(email, kind)
            .await
            .map_err(|e| IssueCodeError::RepositoryError(e.to_string()))?;

        let code = generate_verification_code();
        self.codes
            .create(NewVerificationCode {
                email: email.to_string(),
                code: code.clone(),
                kind,
                expires_at: Utc::now() + Duration::minutes(VERIFICATION_CODE_TTL_MINUTES),
            })
            .await
            .map_err(|e| IssueCodeError::RepositoryError(e.to_string()))?;

        self.notifier
            .send_verification_code(email, full_name, &code)
            .await
            .map_err(|e| IssueCodeError::EmailSendFailed(e.to_string()))?;

        info!(email = %email, "Verification code issued");
        Ok(())
    }
}
