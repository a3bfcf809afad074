use actix_web::{patch, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::artisan::application::domain::entities::{Availability, ServiceOffering};
use crate::artisan::application::ports::incoming::use_cases::{
    UpdateArtisanProfileCommand, UpdateArtisanProfileCommandError, UpdateArtisanProfileError,
};
use crate::artisan::application::ports::outgoing::ArtisanResult;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::adapter::incoming::web::routes::{map_profile_command_error, UserResponse};
use crate::auth::application::domain::entities::Role;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArtisanProfileRequest {
    pub full_name: Option<String>,
    #[schema(example = "0661234567")]
    pub phone: Option<String>,
    pub city: Option<String>,
    pub bio: Option<String>,
    #[schema(example = 8)]
    pub experience: Option<i32>,
    pub is_available: Option<bool>,
    #[schema(value_type = Option<Vec<Object>>)]
    pub services: Option<Vec<ServiceOffering>>,
    #[schema(value_type = Option<Object>)]
    pub availability: Option<Availability>,
    #[schema(example = "< 2 heures")]
    pub response_time: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct ArtisanProfileResponse {
    pub user: UserResponse,
    #[schema(value_type = Object)]
    pub artisan: ArtisanResult,
}

/// Update the caller's own artisan profile and account fields
#[utoipa::path(
    patch,
    path = "/api/artisans/profile",
    tag = "artisans",
    security(("bearer_auth" = [])),
    request_body = UpdateArtisanProfileRequest,
    responses(
        (status = 200, description = "Updated profile", body = inline(SuccessResponse<ArtisanProfileResponse>)),
        (status = 400, description = "Invalid field", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an artisan", body = ErrorResponse),
        (status = 404, description = "No artisan profile", body = ErrorResponse),
    )
)]
#[patch("/api/artisans/profile")]
pub async fn update_artisan_profile_handler(
    user: AuthenticatedUser,
    payload: web::Json<UpdateArtisanProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    if user.role != Role::Artisan {
        return ApiResponse::forbidden("FORBIDDEN", "Réservé aux artisans");
    }

    let req = payload.into_inner();
    let command = match UpdateArtisanProfileCommand::new(
        user.user_id,
        req.full_name,
        req.phone,
        req.city,
        req.bio,
        req.experience,
        req.is_available,
        req.services,
        req.availability,
        req.response_time,
    ) {
        Ok(cmd) => cmd,
        Err(UpdateArtisanProfileCommandError::User(e)) => return map_profile_command_error(e),
        Err(UpdateArtisanProfileCommandError::NegativeExperience) => {
            return ApiResponse::bad_request(
                "INVALID_EXPERIENCE",
                "L'expérience ne peut pas être négative",
            )
        }
    };

    match data.artisan.update_profile.execute(command).await {
        Ok(result) => ApiResponse::success(ArtisanProfileResponse {
            user: result.user.into(),
            artisan: result.artisan,
        }),
        Err(UpdateArtisanProfileError::ArtisanNotFound) => {
            ApiResponse::not_found("ARTISAN_NOT_FOUND", "Profil artisan non trouvé")
        }
        Err(UpdateArtisanProfileError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "Utilisateur non trouvé")
        }
        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Artisan profile update failed");
            ApiResponse::internal_error()
        }
    }
}
