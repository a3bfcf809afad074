use async_trait::async_trait;
use tracing::info;

use crate::auth::application::ports::{
    incoming::use_cases::{UpdateProfileCommand, UpdateProfileError, UpdateProfileUseCase},
    outgoing::{UserRepository, UserRepositoryError, UserResult},
};

#[derive(Debug, Clone)]
pub struct UpdateProfileService<R>
where
    R: UserRepository,
{
    users: R,
}

impl<R> UpdateProfileService<R>
where
    R: UserRepository,
{
    pub fn new(users: R) -> Self {
        Self { users }
    }
}

#[async_trait]
impl<R> UpdateProfileUseCase for UpdateProfileService<R>
where
    R: UserRepository,
{
    async fn execute(
        &self,
        command: UpdateProfileCommand,
    ) -> Result<UserResult, UpdateProfileError> {
        let user_id = command.user_id();

        // Nothing to write; hand back the current record
        if command.data().is_empty() {
            return self
                .users
                .find_by_id(user_id)
                .await
                .map_err(|e| UpdateProfileError::RepositoryError(e.to_string()))?
                .ok_or(UpdateProfileError::UserNotFound);
        }

        let user = self
            .users
            .update_profile(user_id, command.into_data())
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => UpdateProfileError::UserNotFound,
                other => UpdateProfileError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %user_id, "Profile updated");
        Ok(user)
    }
}
