use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::push::application::ports::incoming::use_cases::SubscribeCommand;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SubscriptionKeys {
    pub p256dh: Option<String>,
    pub auth: Option<String>,
}

/// Shape of `PushSubscription.toJSON()` in the browser.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SubscriptionPayload {
    #[schema(example = "https://fcm.googleapis.com/fcm/send/abc123")]
    pub endpoint: Option<String>,
    pub keys: Option<SubscriptionKeys>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SubscribeRequest {
    pub subscription: Option<SubscriptionPayload>,
}

#[derive(Serialize, ToSchema)]
pub struct PushMessageResponse {
    #[schema(example = "Subscription saved")]
    pub message: String,
}

/// Register the caller's browser for push notifications
#[utoipa::path(
    post,
    path = "/api/push",
    tag = "push",
    security(("bearer_auth" = [])),
    request_body = SubscribeRequest,
    responses(
        (status = 200, description = "Subscription saved", body = inline(SuccessResponse<PushMessageResponse>)),
        (status = 400, description = "Invalid subscription", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[post("/api/push")]
pub async fn subscribe_handler(
    user: AuthenticatedUser,
    payload: web::Json<SubscribeRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let subscription = payload.into_inner().subscription.unwrap_or_default();
    let keys = subscription.keys.unwrap_or_default();

    let command =
        match SubscribeCommand::new(user.user_id, subscription.endpoint, keys.p256dh, keys.auth) {
            Ok(cmd) => cmd,
            Err(_) => {
                return ApiResponse::bad_request("INVALID_SUBSCRIPTION", "Invalid subscription")
            }
        };

    match data.push.subscribe.execute(command).await {
        Ok(()) => ApiResponse::success(PushMessageResponse {
            message: "Subscription saved".to_string(),
        }),
        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Push subscribe failed");
            ApiResponse::internal_error()
        }
    }
}
