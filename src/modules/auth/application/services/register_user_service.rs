use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::artisan::application::ports::outgoing::{ArtisanRepository, CreateArtisanData};
use crate::auth::application::{
    domain::entities::Role,
    ports::{
        incoming::use_cases::{
            RegisterUserCommand, RegisterUserError, RegisterUserResult, RegisterUserUseCase,
        },
        outgoing::{
            CreateUserData, PasswordHasher, TokenProvider, UserRepository, UserRepositoryError,
        },
    },
    services::VerificationCodeIssuer,
};

pub struct RegisterUserService<R>
where
    R: UserRepository,
{
    users: R,
    artisans: Arc<dyn ArtisanRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenProvider>,
    codes: VerificationCodeIssuer,
}

impl<R> RegisterUserService<R>
where
    R: UserRepository,
{
    pub fn new(
        users: R,
        artisans: Arc<dyn ArtisanRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenProvider>,
        codes: VerificationCodeIssuer,
    ) -> Self {
        Self {
            users,
            artisans,
            hasher,
            tokens,
            codes,
        }
    }
}

#[async_trait]
impl<R> RegisterUserUseCase for RegisterUserService<R>
where
    R: UserRepository,
{
    async fn execute(
        &self,
        command: RegisterUserCommand,
    ) -> Result<RegisterUserResult, RegisterUserError> {
        let existing = self
            .users
            .find_by_email(command.email())
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?;
        if existing.is_some() {
            return Err(RegisterUserError::EmailAlreadyExists);
        }

        let password_hash = self
            .hasher
            .hash_password(command.password())
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        let user = self
            .users
            .create_user(CreateUserData {
                full_name: command.full_name().to_string(),
                email: command.email().to_string(),
                password_hash,
                phone: command.phone().cloned(),
                city: command.city().cloned(),
                role: command.role(),
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::EmailAlreadyExists => RegisterUserError::EmailAlreadyExists,
                other => RegisterUserError::RepositoryError(other.to_string()),
            })?;

        if user.role == Role::Artisan {
            let profile = self
                .artisans
                .create_profile(CreateArtisanData {
                    user_id: user.id,
                    bio: command.bio().to_string(),
                    experience: command.experience(),
                    services: command.services().to_vec(),
                })
                .await;

            if let Err(e) = profile {
                // An artisan account without a profile would block the email for good.
                error!(user_id = %user.id, error = %e, "Artisan profile failed, removing user");
                if let Err(cleanup) = self.users.delete_user(user.id).await {
                    error!(user_id = %user.id, error = %cleanup, "Could not remove orphan user");
                }
                return Err(RegisterUserError::RepositoryError(e.to_string()));
            }
            info!(user_id = %user.id, "Artisan profile created");
        }

        if let Err(e) = self.codes.issue(&user.email, &user.full_name).await {
            warn!(user_id = %user.id, error = %e, "Verification code could not be delivered");
        }

        let token = self
            .tokens
            .generate_access_token(user.id, user.role)
            .map_err(|e| {
                error!(user_id = %user.id, error = %e, "Token generation failed");
                RegisterUserError::TokenGenerationFailed(e.to_string())
            })?;

        info!(user_id = %user.id, role = %user.role, "User registered");

        Ok(RegisterUserResult {
            user,
            token,
            requires_verification: true,
        })
    }
}
