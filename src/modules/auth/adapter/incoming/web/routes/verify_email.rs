use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::{VerifyEmailCommand, VerifyEmailError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct VerifyEmailRequest {
    #[schema(example = "youssef@example.ma")]
    pub email: Option<String>,
    #[schema(example = "482913")]
    pub code: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct VerifyEmailResponse {
    #[schema(example = true)]
    pub verified: bool,
}

/// Confirm an email address with the six-digit code
#[utoipa::path(
    post,
    path = "/api/auth/verify-email",
    tag = "auth",
    request_body = VerifyEmailRequest,
    responses(
        (status = 200, description = "Email verified", body = inline(SuccessResponse<VerifyEmailResponse>)),
        (status = 400, description = "Missing fields, invalid or expired code", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
#[post("/api/auth/verify-email")]
pub async fn verify_email_handler(
    payload: web::Json<VerifyEmailRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = payload.into_inner();

    let command = match VerifyEmailCommand::new(req.email, req.code) {
        Ok(cmd) => cmd,
        Err(_) => {
            return ApiResponse::bad_request("VALIDATION_ERROR", "Email et code requis");
        }
    };

    let email = command.email().to_string();

    match data.auth.verify_email.execute(command).await {
        Ok(()) => {
            info!(email = %email, "Email verified");
            ApiResponse::success(json!({ "verified": true }))
        }
        Err(e) => map_verify_error(e),
    }
}

fn map_verify_error(err: VerifyEmailError) -> HttpResponse {
    match err {
        VerifyEmailError::InvalidCode => {
            ApiResponse::bad_request("INVALID_CODE", "Code de vérification invalide")
        }
        VerifyEmailError::CodeExpired => ApiResponse::bad_request(
            "CODE_EXPIRED",
            "Le code a expiré. Veuillez en demander un nouveau",
        ),
        VerifyEmailError::UserNotFound => {
            ApiResponse::not_found("USER_NOT_FOUND", "Utilisateur non trouvé")
        }
        VerifyEmailError::RepositoryError(e) => {
            error!("Email verification failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
