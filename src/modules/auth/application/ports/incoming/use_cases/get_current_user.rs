use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::{
    artisan::application::ports::outgoing::ArtisanResult,
    auth::application::ports::outgoing::UserResult,
};

#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResult {
    pub user: UserResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artisan: Option<ArtisanResult>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCurrentUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetCurrentUserUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<CurrentUserResult, GetCurrentUserError>;
}
