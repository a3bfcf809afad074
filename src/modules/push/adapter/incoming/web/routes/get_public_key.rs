use actix_web::{get, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::push::application::ports::incoming::use_cases::GetPublicKeyError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicKeyResponse {
    pub public_key: String,
}

/// VAPID public key for `pushManager.subscribe`
#[utoipa::path(
    get,
    path = "/api/push",
    tag = "push",
    responses(
        (status = 200, description = "VAPID public key", body = inline(SuccessResponse<PublicKeyResponse>)),
        (status = 500, description = "Push not configured", body = ErrorResponse),
    )
)]
#[get("/api/push")]
pub async fn get_public_key_handler(data: web::Data<AppState>) -> impl Responder {
    match data.push.public_key.execute().await {
        Ok(public_key) => ApiResponse::success(PublicKeyResponse { public_key }),
        Err(GetPublicKeyError::NotConfigured) => ApiResponse::server_error(
            "PUSH_NOT_CONFIGURED",
            "Push notifications not configured",
        ),
    }
}
