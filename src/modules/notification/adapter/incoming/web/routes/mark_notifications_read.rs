use actix_web::{patch, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::notification::application::ports::incoming::use_cases::MarkReadCommand;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarkReadRequest {
    pub notification_ids: Option<Vec<Uuid>>,
    pub mark_all_read: Option<bool>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnreadCountResponse {
    pub unread_count: u64,
}

/// Mark some or all of the caller's notifications read
#[utoipa::path(
    patch,
    path = "/api/notifications",
    tag = "notifications",
    security(("bearer_auth" = [])),
    request_body = MarkReadRequest,
    responses(
        (status = 200, description = "Remaining unread count", body = inline(SuccessResponse<UnreadCountResponse>)),
        (status = 400, description = "Neither ids nor markAllRead given", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[patch("/api/notifications")]
pub async fn mark_notifications_read_handler(
    user: AuthenticatedUser,
    payload: web::Json<MarkReadRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let payload = payload.into_inner();
    let command =
        match MarkReadCommand::new(user.user_id, payload.notification_ids, payload.mark_all_read)
        {
            Ok(cmd) => cmd,
            Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
        };

    match data.notification.mark_read.execute(command).await {
        Ok(result) => ApiResponse::success(UnreadCountResponse {
            unread_count: result.unread_count,
        }),
        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Failed to mark notifications read");
            ApiResponse::internal_error()
        }
    }
}
