use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::artisan::application::ports::{
    incoming::use_cases::{
        ArtisanProfileResult, UpdateArtisanProfileCommand, UpdateArtisanProfileError,
        UpdateArtisanProfileUseCase,
    },
    outgoing::{ArtisanRepository, ArtisanRepositoryError},
};
use crate::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};

pub struct UpdateArtisanProfileService<R>
where
    R: ArtisanRepository,
{
    artisans: R,
    users: Arc<dyn UserRepository>,
}

impl<R> UpdateArtisanProfileService<R>
where
    R: ArtisanRepository,
{
    pub fn new(artisans: R, users: Arc<dyn UserRepository>) -> Self {
        Self { artisans, users }
    }
}

fn artisan_error(e: ArtisanRepositoryError) -> UpdateArtisanProfileError {
    match e {
        ArtisanRepositoryError::ArtisanNotFound => UpdateArtisanProfileError::ArtisanNotFound,
        other => UpdateArtisanProfileError::RepositoryError(other.to_string()),
    }
}

fn user_error(e: UserRepositoryError) -> UpdateArtisanProfileError {
    match e {
        UserRepositoryError::UserNotFound => UpdateArtisanProfileError::UserNotFound,
        other => UpdateArtisanProfileError::RepositoryError(other.to_string()),
    }
}

#[async_trait]
impl<R> UpdateArtisanProfileUseCase for UpdateArtisanProfileService<R>
where
    R: ArtisanRepository,
{
    async fn execute(
        &self,
        command: UpdateArtisanProfileCommand,
    ) -> Result<ArtisanProfileResult, UpdateArtisanProfileError> {
        let user_id = command.user_id();
        let profile = self
            .artisans
            .find_by_user_id(user_id)
            .await
            .map_err(artisan_error)?
            .ok_or(UpdateArtisanProfileError::ArtisanNotFound)?;

        let (user_update, artisan_update) = command.into_parts();

        let user = if user_update.is_empty() {
            self.users
                .find_by_id(user_id)
                .await
                .map_err(user_error)?
                .ok_or(UpdateArtisanProfileError::UserNotFound)?
        } else {
            self.users
                .update_profile(user_id, user_update)
                .await
                .map_err(user_error)?
        };

        let artisan = self
            .artisans
            .update_profile(profile.id, artisan_update)
            .await
            .map_err(artisan_error)?;

        info!(user_id = %user_id, artisan_id = %artisan.id, "Artisan profile updated");

        Ok(ArtisanProfileResult { user, artisan })
    }
}
