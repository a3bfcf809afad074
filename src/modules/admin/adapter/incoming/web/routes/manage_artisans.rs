use actix_web::{delete, get, patch, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::admin::application::ports::incoming::use_cases::{
    AdminArtisanListQuery, AdminError, ArtisanPatchInput,
};
use crate::admin::application::ports::outgoing::AdminArtisanRow;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::artisan::application::ports::outgoing::UpdateArtisanData;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct AdminArtisanParams {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    /// approved, pending, rejected or all
    pub status: Option<String>,
    /// Owner name or service name
    pub search: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminArtisanListResponse {
    #[schema(value_type = Vec<Object>)]
    pub artisans: Vec<AdminArtisanRow>,
    pub total: u64,
    pub total_pages: u64,
    pub current_page: u64,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminArtisanPatchRequest {
    #[schema(example = "approved")]
    pub approval_status: Option<String>,
    pub is_available: Option<bool>,
    pub bio: Option<String>,
    pub experience: Option<i32>,
    pub response_time: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct AdminArtisanResponse {
    #[schema(value_type = Object)]
    pub artisan: AdminArtisanRow,
}

#[derive(Serialize, ToSchema)]
pub struct AdminMessageResponse {
    pub message: String,
}

/// Paginated artisan profiles with their accounts
#[utoipa::path(
    get,
    path = "/api/admin/artisans",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(AdminArtisanParams),
    responses(
        (status = 200, description = "Artisans", body = inline(SuccessResponse<AdminArtisanListResponse>)),
        (status = 400, description = "Unknown status filter", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
    )
)]
#[get("/api/admin/artisans")]
pub async fn admin_list_artisans_handler(
    admin: AdminUser,
    params: web::Query<AdminArtisanParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let params = params.into_inner();
    let query =
        match AdminArtisanListQuery::new(params.page, params.limit, params.status, params.search) {
            Ok(query) => query,
            Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
        };

    match data.admin.artisans.list(query).await {
        Ok(page) => ApiResponse::success(AdminArtisanListResponse {
            artisans: page.items,
            total: page.meta.total,
            total_pages: page.meta.total_pages,
            current_page: page.meta.current_page,
        }),
        Err(e) => {
            error!(admin_id = %admin.user_id, error = %e, "Failed to list artisans");
            ApiResponse::internal_error()
        }
    }
}

/// Approve, reject or edit an artisan profile
#[utoipa::path(
    patch,
    path = "/api/admin/artisans/{id}",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Artisan id")),
    request_body = AdminArtisanPatchRequest,
    responses(
        (status = 200, description = "Artisan updated", body = inline(SuccessResponse<AdminArtisanResponse>)),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
        (status = 404, description = "Artisan not found", body = ErrorResponse),
    )
)]
#[patch("/api/admin/artisans/{id}")]
pub async fn admin_update_artisan_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    payload: web::Json<AdminArtisanPatchRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let artisan_id = path.into_inner();
    let payload = payload.into_inner();

    let update = match UpdateArtisanData::try_from(ArtisanPatchInput {
        approval_status: payload.approval_status,
        is_available: payload.is_available,
        bio: payload.bio,
        experience: payload.experience,
        response_time: payload.response_time,
    }) {
        Ok(update) => update,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.admin.artisans.update(artisan_id, update).await {
        Ok(artisan) => ApiResponse::success(AdminArtisanResponse { artisan }),
        Err(AdminError::NotFound) => {
            ApiResponse::not_found("ARTISAN_NOT_FOUND", "Artisan non trouvé")
        }
        Err(e) => {
            error!(admin_id = %admin.user_id, %artisan_id, error = %e, "Failed to update artisan");
            ApiResponse::internal_error()
        }
    }
}

/// Delete an artisan profile together with its user account
#[utoipa::path(
    delete,
    path = "/api/admin/artisans/{id}",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Artisan id")),
    responses(
        (status = 200, description = "Artisan deleted", body = inline(SuccessResponse<AdminMessageResponse>)),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
        (status = 404, description = "Artisan not found", body = ErrorResponse),
    )
)]
#[delete("/api/admin/artisans/{id}")]
pub async fn admin_delete_artisan_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let artisan_id = path.into_inner();

    match data.admin.artisans.delete(artisan_id).await {
        Ok(()) => ApiResponse::success(AdminMessageResponse {
            message: "Artisan supprimé".to_string(),
        }),
        Err(AdminError::NotFound) => {
            ApiResponse::not_found("ARTISAN_NOT_FOUND", "Artisan non trouvé")
        }
        Err(e) => {
            error!(admin_id = %admin.user_id, %artisan_id, error = %e, "Failed to delete artisan");
            ApiResponse::internal_error()
        }
    }
}
