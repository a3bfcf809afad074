use async_trait::async_trait;

use crate::auth::application::domain::entities::normalize_email;

#[derive(Debug, Clone)]
pub struct ResendCodeCommand {
    email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResendCodeCommandError {
    #[error("Email is required")]
    MissingEmail,
}

impl ResendCodeCommand {
    pub fn new(email: Option<String>) -> Result<Self, ResendCodeCommandError> {
        let email = email.map(|e| normalize_email(&e)).unwrap_or_default();
        if email.is_empty() {
            return Err(ResendCodeCommandError::MissingEmail);
        }
        Ok(Self { email })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResendCodeError {
    #[error("User not found")]
    UserNotFound,

    #[error("Email already verified")]
    AlreadyVerified,

    /// A code was issued inside the cooldown window.
    #[error("Please wait {retry_after_seconds}s before requesting a new code")]
    TooManyRequests { retry_after_seconds: i64 },

    #[error("Email sending failed: {0}")]
    EmailSendFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ResendCodeUseCase: Send + Sync {
    async fn execute(&self, command: ResendCodeCommand) -> Result<(), ResendCodeError>;
}
