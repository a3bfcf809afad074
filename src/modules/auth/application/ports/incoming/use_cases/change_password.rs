use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::MIN_PASSWORD_LENGTH;

#[derive(Debug, Clone)]
pub struct ChangePasswordCommand {
    user_id: Uuid,
    current_password: String,
    new_password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChangePasswordCommandError {
    #[error("Current and new password are required")]
    MissingFields,

    #[error("New password must be at least 6 characters")]
    PasswordTooShort,
}

impl ChangePasswordCommand {
    pub fn new(
        user_id: Uuid,
        current_password: Option<String>,
        new_password: Option<String>,
    ) -> Result<Self, ChangePasswordCommandError> {
        let (Some(current_password), Some(new_password)) = (current_password, new_password) else {
            return Err(ChangePasswordCommandError::MissingFields);
        };
        if current_password.is_empty() || new_password.is_empty() {
            return Err(ChangePasswordCommandError::MissingFields);
        }
        if new_password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ChangePasswordCommandError::PasswordTooShort);
        }

        Ok(Self {
            user_id,
            current_password,
            new_password,
        })
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn current_password(&self) -> &str {
        &self.current_password
    }

    pub fn new_password(&self) -> &str {
        &self.new_password
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ChangePasswordError {
    #[error("Current password is incorrect")]
    InvalidPassword,

    #[error("User not found")]
    UserNotFound,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ChangePasswordUseCase: Send + Sync {
    async fn execute(&self, command: ChangePasswordCommand) -> Result<(), ChangePasswordError>;
}
