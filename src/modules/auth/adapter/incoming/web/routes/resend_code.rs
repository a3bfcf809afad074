use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::application::ports::incoming::use_cases::{ResendCodeCommand, ResendCodeError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ResendCodeRequest {
    #[schema(example = "youssef@example.ma")]
    pub email: Option<String>,
}

/// Send a fresh verification code
///
/// Limited to one request per minute and per email.
#[utoipa::path(
    post,
    path = "/api/auth/resend-code",
    tag = "auth",
    request_body = ResendCodeRequest,
    responses(
        (status = 200, description = "A new code was mailed"),
        (status = 400, description = "Missing email or already verified", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 429, description = "Previous code sent less than a minute ago", body = ErrorResponse),
        (status = 500, description = "Mail delivery failed", body = ErrorResponse),
    )
)]
#[post("/api/auth/resend-code")]
pub async fn resend_code_handler(
    payload: web::Json<ResendCodeRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match ResendCodeCommand::new(payload.into_inner().email) {
        Ok(cmd) => cmd,
        Err(_) => return ApiResponse::bad_request("VALIDATION_ERROR", "Email requis"),
    };

    let email = command.email().to_string();

    match data.auth.resend_code.execute(command).await {
        Ok(()) => {
            info!(email = %email, "Verification code resent");
            ApiResponse::success(json!({ "message": "Nouveau code envoyé" }))
        }
        Err(e) => map_resend_error(e, &email),
    }
}

fn map_resend_error(err: ResendCodeError, email: &str) -> HttpResponse {
    match err {
        ResendCodeError::UserNotFound => {
            ApiResponse::not_found("USER_NOT_FOUND", "Utilisateur non trouvé")
        }
        ResendCodeError::AlreadyVerified => {
            ApiResponse::bad_request("ALREADY_VERIFIED", "Email déjà vérifié")
        }
        ResendCodeError::TooManyRequests {
            retry_after_seconds,
        } => {
            warn!(email = %email, retry_after_seconds, "Resend throttled");
            ApiResponse::too_many_requests(
                "TOO_MANY_REQUESTS",
                "Veuillez attendre 1 minute avant de demander un nouveau code",
            )
        }
        ResendCodeError::EmailSendFailed(e) => {
            error!(email = %email, error = %e, "Verification mail failed");
            ApiResponse::server_error(
                "EMAIL_SEND_FAILED",
                "Erreur lors de l'envoi de l'email",
            )
        }
        ResendCodeError::RepositoryError(e) => {
            error!(email = %email, error = %e, "Resend failed");
            ApiResponse::internal_error()
        }
    }
}
