use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::{
    domain::entities::is_valid_moroccan_phone,
    ports::outgoing::{UpdateUserData, UserResult},
};

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct UpdateProfileCommand {
    user_id: Uuid,
    data: UpdateUserData,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateProfileCommandError {
    #[error("Full name cannot be empty")]
    EmptyFullName,

    #[error("Invalid Moroccan phone number")]
    InvalidPhone,
}

impl UpdateProfileCommand {
    pub fn new(user_id: Uuid, data: UpdateUserData) -> Result<Self, UpdateProfileCommandError> {
        let full_name = match data.full_name {
            Some(name) => {
                let name = name.trim().to_string();
                if name.is_empty() {
                    return Err(UpdateProfileCommandError::EmptyFullName);
                }
                Some(name)
            }
            None => None,
        };

        if let Some(phone) = data.phone.as_deref() {
            if !phone.trim().is_empty() && !is_valid_moroccan_phone(phone) {
                return Err(UpdateProfileCommandError::InvalidPhone);
            }
        }

        Ok(Self {
            user_id,
            data: UpdateUserData { full_name, ..data },
        })
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn data(&self) -> &UpdateUserData {
        &self.data
    }

    pub fn into_data(self) -> UpdateUserData {
        self.data
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProfileError {
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
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(&self, command: UpdateProfileCommand)
        -> Result<UserResult, UpdateProfileError>;
}
