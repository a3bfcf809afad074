use actix_web::{put, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::ports::incoming::use_cases::{
    UpdateProfileCommand, UpdateProfileCommandError, UpdateProfileError,
};
use crate::auth::application::ports::outgoing::UpdateUserData;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::user_dto::UserResponse;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[schema(example = "Amina Benali")]
    pub full_name: Option<String>,
    #[schema(example = "0612345678")]
    pub phone: Option<String>,
    #[schema(example = "Marrakech")]
    pub city: Option<String>,
    pub avatar: Option<String>,
}

/// Update the caller's own user record
#[utoipa::path(
    put,
    path = "/api/users/profile",
    tag = "users",
    security(("bearer_auth" = [])),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Updated user", body = inline(SuccessResponse<UserResponse>)),
        (status = 400, description = "Invalid field", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
#[put("/api/users/profile")]
pub async fn update_profile_handler(
    user: AuthenticatedUser,
    payload: web::Json<UpdateProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = payload.into_inner();
    let update = UpdateUserData {
        full_name: req.full_name,
        phone: req.phone,
        city: req.city,
        avatar: req.avatar,
    };

    let command = match UpdateProfileCommand::new(user.user_id, update) {
        Ok(cmd) => cmd,
        Err(e) => return map_profile_command_error(e),
    };

    match data.auth.update_profile.execute(command).await {
        Ok(updated) => ApiResponse::success(UserResponse::from(updated)),
        Err(UpdateProfileError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "Utilisateur non trouvé")
        }
        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Profile update failed");
            ApiResponse::internal_error()
        }
    }
}

pub(crate) fn map_profile_command_error(err: UpdateProfileCommandError) -> HttpResponse {
    match err {
        UpdateProfileCommandError::EmptyFullName => {
            ApiResponse::bad_request("INVALID_FULL_NAME", "Le nom complet est requis")
        }
        UpdateProfileCommandError::InvalidPhone => {
            ApiResponse::bad_request("INVALID_PHONE", "Numéro de téléphone marocain invalide")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::Role;
    use crate::auth::application::services::UpdateProfileService;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_provider};
    use crate::tests::support::fakes::{sample_user, InMemoryUserRepository};
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    async fn put_profile(
        users: InMemoryUserRepository,
        user_id: uuid::Uuid,
        body: Value,
    ) -> (StatusCode, Value) {
        let state = TestAppStateBuilder::default()
            .with_update_profile(UpdateProfileService::new(users))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(token_provider()))
                .service(update_profile_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/users/profile")
            .insert_header(bearer(user_id, Role::Customer))
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn updates_city_and_keeps_other_fields() {
        let users = InMemoryUserRepository::default();
        let user = sample_user("amina@example.ma", Role::Customer, true);
        users.insert(user.clone(), "hash".to_string());

        let (status, body) = put_profile(users, user.id, json!({ "city": "Fès" })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["city"], "Fès");
        assert_eq!(body["data"]["fullName"], user.full_name);
    }

    #[actix_web::test]
    async fn blank_full_name_is_rejected() {
        let users = InMemoryUserRepository::default();
        let user = sample_user("amina@example.ma", Role::Customer, true);
        users.insert(user.clone(), "hash".to_string());

        let (status, body) = put_profile(users, user.id, json!({ "fullName": "   " })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_FULL_NAME");
    }
}
