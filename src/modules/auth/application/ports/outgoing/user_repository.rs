use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::Role;

// Input DTO for creating a user
#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub role: Role,
}

/// Public view of a user. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResult {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub role: Role,
    pub avatar: Option<String>,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: UserResult,
    pub password_hash: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateUserData {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub avatar: Option<String>,
}

impl UpdateUserData {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.phone.is_none()
            && self.city.is_none()
            && self.avatar.is_none()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("User not found")]
    UserNotFound,

    #[error("Email already exists")]
    EmailAlreadyExists,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<UserResult, UserRepositoryError>;

    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserResult>, UserRepositoryError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<UserResult>, UserRepositoryError>;

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, UserRepositoryError>;

    async fn find_credentials_by_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<UserCredentials>, UserRepositoryError>;

    async fn update_profile(
        &self,
        user_id: Uuid,
        data: UpdateUserData,
    ) -> Result<UserResult, UserRepositoryError>;

    async fn update_password(
        &self,
        user_id: Uuid,
        password_hash: String,
    ) -> Result<(), UserRepositoryError>;

    async fn mark_verified(&self, email: &str) -> Result<(), UserRepositoryError>;

    /// Removes a user row; used to undo a registration that failed halfway.
    async fn delete_user(&self, user_id: Uuid) -> Result<(), UserRepositoryError>;
}
