use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::artisan::application::domain::entities::{Availability, ServiceOffering};
use crate::artisan::application::ports::outgoing::{ArtisanResult, UpdateArtisanData};
use crate::auth::application::ports::incoming::use_cases::{
    UpdateProfileCommand, UpdateProfileCommandError,
};
use crate::auth::application::ports::outgoing::{UpdateUserData, UserResult};

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

/// Changes an artisan makes to their own account and profile in one call.
#[derive(Debug, Clone)]
pub struct UpdateArtisanProfileCommand {
    user_id: Uuid,
    user: UpdateUserData,
    artisan: UpdateArtisanData,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateArtisanProfileCommandError {
    #[error(transparent)]
    User(#[from] UpdateProfileCommandError),

    #[error("Experience cannot be negative")]
    NegativeExperience,
}

impl UpdateArtisanProfileCommand {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_id: Uuid,
        full_name: Option<String>,
        phone: Option<String>,
        city: Option<String>,
        bio: Option<String>,
        experience: Option<i32>,
        is_available: Option<bool>,
        services: Option<Vec<ServiceOffering>>,
        availability: Option<Availability>,
        response_time: Option<String>,
    ) -> Result<Self, UpdateArtisanProfileCommandError> {
        let user = UpdateProfileCommand::new(
            user_id,
            UpdateUserData {
                full_name,
                phone,
                city,
                avatar: None,
            },
        )?
        .into_data();

        if experience.is_some_and(|years| years < 0) {
            return Err(UpdateArtisanProfileCommandError::NegativeExperience);
        }

        Ok(Self {
            user_id,
            user,
            artisan: UpdateArtisanData {
                bio,
                experience,
                is_available,
                services,
                availability,
                response_time,
                approval_status: None,
            },
        })
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn user(&self) -> &UpdateUserData {
        &self.user
    }

    pub fn artisan(&self) -> &UpdateArtisanData {
        &self.artisan
    }

    pub fn into_parts(self) -> (UpdateUserData, UpdateArtisanData) {
        (self.user, self.artisan)
    }
}

//
// ──────────────────────────────────────────────────────────
// Result & Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize)]
pub struct ArtisanProfileResult {
    pub user: UserResult,
    pub artisan: ArtisanResult,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateArtisanProfileError {
    #[error("Artisan profile not found")]
    ArtisanNotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateArtisanProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UpdateArtisanProfileCommand,
    ) -> Result<ArtisanProfileResult, UpdateArtisanProfileError>;
}
