use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::artisan::application::ports::outgoing::ArtisanResult;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::ports::incoming::use_cases::GetCurrentUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::user_dto::UserResponse;

#[derive(Serialize, ToSchema)]
pub struct CurrentUserResponse {
    pub user: UserResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub artisan: Option<ArtisanResult>,
}

/// Current user, with the artisan profile for artisans
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user", body = inline(SuccessResponse<CurrentUserResponse>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "User no longer exists", body = ErrorResponse),
    )
)]
#[get("/api/auth/me")]
pub async fn get_current_user_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.current_user.execute(user.user_id).await {
        Ok(result) => ApiResponse::success(CurrentUserResponse {
            user: result.user.into(),
            artisan: result.artisan,
        }),
        Err(GetCurrentUserError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "Utilisateur non trouvé")
        }
        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Failed to load current user");
            ApiResponse::internal_error()
        }
    }
}
