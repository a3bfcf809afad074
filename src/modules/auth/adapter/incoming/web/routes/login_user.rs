use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::{LoginCommand, LoginError};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::user_dto::UserResponse;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "youssef@example.ma")]
    #[serde(default)]
    pub email: String,
    #[schema(example = "motdepasse")]
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    pub user: UserResponse,
    pub token: String,
}

/// Login with email and password
///
/// Unknown emails and wrong passwords produce the same response.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<LoginResponse>)),
        (status = 400, description = "Missing email or password", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_CREDENTIALS", "message": "Email ou mot de passe incorrect" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    payload: web::Json<LoginRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = payload.into_inner();

    let command = match LoginCommand::new(req.email, req.password) {
        Ok(cmd) => cmd,
        Err(e) => {
            warn!("Login rejected: {}", e);
            return ApiResponse::bad_request("VALIDATION_ERROR", "Email et mot de passe requis");
        }
    };

    match data.auth.login.execute(command).await {
        Ok(result) => {
            info!(user_id = %result.user.id, "User logged in");
            ApiResponse::success(LoginResponse {
                user: result.user.into(),
                token: result.token,
            })
        }
        Err(e) => map_login_error(e),
    }
}

fn map_login_error(err: LoginError) -> HttpResponse {
    match err {
        LoginError::InvalidCredentials => {
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Email ou mot de passe incorrect")
        }
        other => {
            error!(error = %other, "Login failed");
            ApiResponse::internal_error()
        }
    }
}
