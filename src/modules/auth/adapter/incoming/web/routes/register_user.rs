use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::{
    RegisterUserCommand, RegisterUserCommandError, RegisterUserError, ServiceSelection,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::user_dto::UserResponse;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    #[schema(example = "Youssef El Amrani")]
    pub full_name: String,
    #[schema(example = "youssef@example.ma")]
    pub email: String,
    #[schema(example = "motdepasse")]
    pub password: String,
    #[schema(example = "0612345678")]
    pub phone: Option<String>,
    #[schema(example = "Casablanca")]
    pub city: Option<String>,
    /// customer (default) or artisan
    #[schema(example = "artisan")]
    pub role: Option<String>,
    pub bio: Option<String>,
    pub experience: Option<i32>,
    /// Category keys such as `"plumbing"` or `{category, name?, price?}` objects.
    #[schema(value_type = Option<Vec<Object>>)]
    pub services: Option<Vec<ServiceSelection>>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserResponse {
    pub user: UserResponse,
    pub token: String,
    #[schema(example = true)]
    pub requires_verification: bool,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Register a new customer or artisan
///
/// Creates the account, the artisan profile when relevant, and mails a
/// six-digit verification code.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User created", body = inline(SuccessResponse<RegisterUserResponse>)),
        (status = 400, description = "Validation error or email already used", body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "EMAIL_ALREADY_EXISTS", "message": "Cet email est déjà utilisé" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    payload: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = payload.into_inner();

    let command = match RegisterUserCommand::new(
        req.full_name,
        req.email,
        req.password,
        req.phone,
        req.city,
        req.role,
        req.bio,
        req.experience,
        req.services,
    ) {
        Ok(cmd) => cmd,
        Err(e) => return map_command_error(e),
    };

    let email = command.email().to_string();

    match data.auth.register.execute(command).await {
        Ok(result) => {
            info!(user_id = %result.user.id, "Registration completed");
            ApiResponse::created(RegisterUserResponse {
                user: result.user.into(),
                token: result.token,
                requires_verification: result.requires_verification,
            })
        }
        Err(e) => map_register_error(e, &email),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: RegisterUserCommandError) -> HttpResponse {
    let (code, message) = match err {
        RegisterUserCommandError::EmptyFullName => ("INVALID_FULL_NAME", "Le nom complet est requis"),
        RegisterUserCommandError::InvalidEmail => ("INVALID_EMAIL", "Adresse email invalide"),
        RegisterUserCommandError::PasswordTooShort => (
            "INVALID_PASSWORD",
            "Le mot de passe doit contenir au moins 6 caractères",
        ),
        RegisterUserCommandError::InvalidPhone => {
            ("INVALID_PHONE", "Numéro de téléphone marocain invalide")
        }
        RegisterUserCommandError::InvalidRole => ("INVALID_ROLE", "Rôle invalide"),
    };
    ApiResponse::bad_request(code, message)
}

fn map_register_error(err: RegisterUserError, email: &str) -> HttpResponse {
    match err {
        RegisterUserError::EmailAlreadyExists => {
            warn!(email = %email, "Registration with an existing email");
            ApiResponse::bad_request("EMAIL_ALREADY_EXISTS", "Cet email est déjà utilisé")
        }
        other => {
            error!(email = %email, error = %other, "Registration failed");
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//
