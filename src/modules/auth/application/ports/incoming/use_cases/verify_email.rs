use async_trait::async_trait;

use crate::auth::application::domain::entities::normalize_email;

//
// ──────────────────────────────────────────────────────────
// Verify Email Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct VerifyEmailCommand {
    email: String,
    code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifyEmailCommandError {
    #[error("Email and code are required")]
    MissingFields,
}

impl VerifyEmailCommand {
    pub fn new(
        email: Option<String>,
        code: Option<String>,
    ) -> Result<Self, VerifyEmailCommandError> {
        let email = email.map(|e| normalize_email(&e)).unwrap_or_default();
        let code = code.map(|c| c.trim().to_string()).unwrap_or_default();

        if email.is_empty() || code.is_empty() {
            return Err(VerifyEmailCommandError::MissingFields);
        }

        Ok(Self { email, code })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum VerifyEmailError {
    #[error("Invalid verification code")]
    InvalidCode,

    #[error("Verification code expired")]
    CodeExpired,

    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait VerifyEmailUseCase: Send + Sync {
    async fn execute(&self, command: VerifyEmailCommand) -> Result<(), VerifyEmailError>;
}
