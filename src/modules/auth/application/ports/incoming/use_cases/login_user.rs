use async_trait::async_trait;
use serde::Serialize;

use crate::auth::application::{
    domain::entities::normalize_email, ports::outgoing::UserResult,
};

//
// ──────────────────────────────────────────────────────────
// Login Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct LoginCommand {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginCommandError {
    #[error("Email is required")]
    MissingEmail,

    #[error("Password is required")]
    MissingPassword,
}

impl LoginCommand {
    pub fn new(email: String, password: String) -> Result<Self, LoginCommandError> {
        let email = normalize_email(&email);
        if email.is_empty() {
            return Err(LoginCommandError::MissingEmail);
        }
        if password.is_empty() {
            return Err(LoginCommandError::MissingPassword);
        }

        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

//
// ──────────────────────────────────────────────────────────
// Result & Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize)]
pub struct LoginResult {
    pub user: UserResult,
    pub token: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    /// Unknown email and wrong password collapse into this variant.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait LoginUserUseCase: Send + Sync {
    async fn execute(&self, command: LoginCommand) -> Result<LoginResult, LoginError>;
}
