use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::artisan::application::ports::outgoing::ArtisanRepository;
use crate::auth::application::{
    domain::entities::Role,
    ports::{
        incoming::use_cases::{CurrentUserResult, GetCurrentUserError, GetCurrentUserUseCase},
        outgoing::UserRepository,
    },
};

pub struct GetCurrentUserService<R>
where
    R: UserRepository,
{
    users: R,
    artisans: Arc<dyn ArtisanRepository>,
}

impl<R> GetCurrentUserService<R>
where
    R: UserRepository,
{
    pub fn new(users: R, artisans: Arc<dyn ArtisanRepository>) -> Self {
        Self { users, artisans }
    }
}

#[async_trait]
impl<R> GetCurrentUserUseCase for GetCurrentUserService<R>
where
    R: UserRepository,
{
    async fn execute(&self, user_id: Uuid) -> Result<CurrentUserResult, GetCurrentUserError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await
            .map_err(|e| GetCurrentUserError::RepositoryError(e.to_string()))?
            .ok_or(GetCurrentUserError::UserNotFound)?;

        let artisan = if user.role == Role::Artisan {
            self.artisans
                .find_by_user_id(user.id)
                .await
                .map_err(|e| GetCurrentUserError::RepositoryError(e.to_string()))?
        } else {
            None
        };

        Ok(CurrentUserResult { user, artisan })
    }
}
