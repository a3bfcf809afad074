use actix_web::{delete, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::push::application::ports::incoming::use_cases::UnsubscribeCommand;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::subscribe::PushMessageResponse;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UnsubscribeRequest {
    pub endpoint: Option<String>,
}

/// Remove one of the caller's push subscriptions
#[utoipa::path(
    delete,
    path = "/api/push",
    tag = "push",
    security(("bearer_auth" = [])),
    request_body = UnsubscribeRequest,
    responses(
        (status = 200, description = "Subscription removed", body = inline(SuccessResponse<PushMessageResponse>)),
        (status = 400, description = "Endpoint missing", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[delete("/api/push")]
pub async fn unsubscribe_handler(
    user: AuthenticatedUser,
    payload: web::Json<UnsubscribeRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match UnsubscribeCommand::new(user.user_id, payload.into_inner().endpoint) {
        Ok(cmd) => cmd,
        Err(_) => return ApiResponse::bad_request("VALIDATION_ERROR", "Endpoint required"),
    };

    match data.push.unsubscribe.execute(command).await {
        Ok(_) => ApiResponse::success(PushMessageResponse {
            message: "Subscription removed".to_string(),
        }),
        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Push unsubscribe failed");
            ApiResponse::internal_error()
        }
    }
}
