use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::notification::application::ports::incoming::use_cases::ListNotificationsQuery;
use crate::notification::application::ports::outgoing::NotificationResult;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListNotificationsParams {
    /// Defaults to 20, capped at 100
    pub limit: Option<u64>,
    /// `true` keeps unread notifications only
    pub unread_only: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationListResponse {
    #[schema(value_type = Vec<Object>)]
    pub notifications: Vec<NotificationResult>,
    pub unread_count: u64,
}

/// The caller's notifications, newest first
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = "notifications",
    security(("bearer_auth" = [])),
    params(ListNotificationsParams),
    responses(
        (status = 200, description = "Notifications and unread count", body = inline(SuccessResponse<NotificationListResponse>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[get("/api/notifications")]
pub async fn list_notifications_handler(
    user: AuthenticatedUser,
    params: web::Query<ListNotificationsParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let params = params.into_inner();
    let query = ListNotificationsQuery::new(
        user.user_id,
        params.limit,
        params.unread_only.as_deref() == Some("true"),
    );

    match data.notification.list.execute(query).await {
        Ok(list) => ApiResponse::success(NotificationListResponse {
            notifications: list.notifications,
            unread_count: list.unread_count,
        }),
        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Failed to list notifications");
            ApiResponse::internal_error()
        }
    }
}
