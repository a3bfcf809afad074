use actix_web::{patch, web, Responder};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::ports::incoming::use_cases::{
    ChangePasswordCommand, ChangePasswordCommandError, ChangePasswordError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}

/// Change the caller's password
#[utoipa::path(
    patch,
    path = "/api/users/profile",
    tag = "users",
    security(("bearer_auth" = [])),
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed"),
        (status = 400, description = "Missing field or new password too short", body = ErrorResponse),
        (status = 401, description = "Current password is wrong", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
#[patch("/api/users/profile")]
pub async fn change_password_handler(
    user: AuthenticatedUser,
    payload: web::Json<ChangePasswordRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = payload.into_inner();

    let command =
        match ChangePasswordCommand::new(user.user_id, req.current_password, req.new_password) {
            Ok(cmd) => cmd,
            Err(ChangePasswordCommandError::MissingFields) => {
                return ApiResponse::bad_request(
                    "VALIDATION_ERROR",
                    "Mot de passe actuel et nouveau mot de passe requis",
                );
            }
            Err(ChangePasswordCommandError::PasswordTooShort) => {
                return ApiResponse::bad_request(
                    "VALIDATION_ERROR",
                    "Le nouveau mot de passe doit contenir au moins 6 caractères",
                );
            }
        };

    match data.auth.change_password.execute(command).await {
        Ok(()) => {
            info!(user_id = %user.user_id, "Password changed");
            ApiResponse::success(json!({ "message": "Mot de passe modifié avec succès" }))
        }
        Err(ChangePasswordError::InvalidPassword) => {
            ApiResponse::unauthorized("INVALID_PASSWORD", "Mot de passe actuel incorrect")
        }
        Err(ChangePasswordError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "Utilisateur non trouvé")
        }
        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Password change failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::Role;
    use crate::auth::application::services::ChangePasswordService;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_provider};
    use crate::tests::support::fakes::{sample_user, InMemoryUserRepository, PlainTextHasher};
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;
    use std::sync::Arc;

    async fn patch_password(users: InMemoryUserRepository, user_id: uuid::Uuid, body: Value) -> (StatusCode, Value) {
        let service = ChangePasswordService::new(users, Arc::new(PlainTextHasher));
        let state = TestAppStateBuilder::default()
            .with_change_password(service)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(token_provider()))
                .service(change_password_handler),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri("/api/users/profile")
            .insert_header(bearer(user_id, Role::Customer))
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    fn seeded() -> (InMemoryUserRepository, uuid::Uuid) {
        let users = InMemoryUserRepository::default();
        let user = sample_user("amina@example.ma", Role::Customer, true);
        users.insert(user.clone(), "hashed:ancien1".to_string());
        (users, user.id)
    }

    #[actix_web::test]
    async fn correct_current_password_updates_hash() {
        let (users, id) = seeded();

        let (status, _) = patch_password(
            users.clone(),
            id,
            json!({ "currentPassword": "ancien1", "newPassword": "nouveau1" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            users.password_hash("amina@example.ma").as_deref(),
            Some("hashed:nouveau1")
        );
    }

    #[actix_web::test]
    async fn wrong_current_password_is_unauthorized() {
        let (users, id) = seeded();

        let (status, body) = patch_password(
            users,
            id,
            json!({ "currentPassword": "faux", "newPassword": "nouveau1" }),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "INVALID_PASSWORD");
    }

    #[actix_web::test]
    async fn short_new_password_is_rejected() {
        let (users, id) = seeded();

        let (status, _) = patch_password(
            users,
            id,
            json!({ "currentPassword": "ancien1", "newPassword": "123" }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
