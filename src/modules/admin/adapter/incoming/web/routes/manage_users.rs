use actix_web::{delete, get, patch, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::admin::application::ports::incoming::use_cases::{
    AdminError, AdminUserListQuery, UserPatchInput,
};
use crate::admin::application::ports::outgoing::UserPatch;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::auth::application::ports::outgoing::UserResult;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::AdminMessageResponse;

#[derive(Debug, Deserialize, IntoParams)]
pub struct AdminUserParams {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    /// customer, artisan or all
    pub role: Option<String>,
    /// Name or email
    pub search: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserListResponse {
    #[schema(value_type = Vec<Object>)]
    pub users: Vec<UserResult>,
    pub total: u64,
    pub total_pages: u64,
    pub current_page: u64,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserPatchRequest {
    pub full_name: Option<String>,
    #[schema(example = "0612345678")]
    pub phone: Option<String>,
    pub city: Option<String>,
    #[schema(example = "artisan")]
    pub role: Option<String>,
    pub is_verified: Option<bool>,
}

#[derive(Serialize, ToSchema)]
pub struct AdminUserResponse {
    #[schema(value_type = Object)]
    pub user: UserResult,
}

/// Paginated non-admin accounts
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(AdminUserParams),
    responses(
        (status = 200, description = "Users", body = inline(SuccessResponse<AdminUserListResponse>)),
        (status = 400, description = "Unknown role filter", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
    )
)]
#[get("/api/admin/users")]
pub async fn admin_list_users_handler(
    admin: AdminUser,
    params: web::Query<AdminUserParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let params = params.into_inner();
    let query = match AdminUserListQuery::new(params.page, params.limit, params.role, params.search)
    {
        Ok(query) => query,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.admin.users.list(query).await {
        Ok(page) => ApiResponse::success(AdminUserListResponse {
            users: page.items,
            total: page.meta.total,
            total_pages: page.meta.total_pages,
            current_page: page.meta.current_page,
        }),
        Err(e) => {
            error!(admin_id = %admin.user_id, error = %e, "Failed to list users");
            ApiResponse::internal_error()
        }
    }
}

/// Edit an account, including its role and verification flag
#[utoipa::path(
    patch,
    path = "/api/admin/users/{id}",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "User id")),
    request_body = AdminUserPatchRequest,
    responses(
        (status = 200, description = "User updated", body = inline(SuccessResponse<AdminUserResponse>)),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
#[patch("/api/admin/users/{id}")]
pub async fn admin_update_user_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    payload: web::Json<AdminUserPatchRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();
    let payload = payload.into_inner();

    let patch = match UserPatch::try_from(UserPatchInput {
        full_name: payload.full_name,
        phone: payload.phone,
        city: payload.city,
        role: payload.role,
        is_verified: payload.is_verified,
    }) {
        Ok(patch) => patch,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.admin.users.update(user_id, patch).await {
        Ok(user) => ApiResponse::success(AdminUserResponse { user }),
        Err(AdminError::NotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "Utilisateur non trouvé")
        }
        Err(e) => {
            error!(admin_id = %admin.user_id, %user_id, error = %e, "Failed to update user");
            ApiResponse::internal_error()
        }
    }
}

/// Delete an account and its artisan profile, if any
#[utoipa::path(
    delete,
    path = "/api/admin/users/{id}",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted", body = inline(SuccessResponse<AdminMessageResponse>)),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
#[delete("/api/admin/users/{id}")]
pub async fn admin_delete_user_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data.admin.users.delete(user_id).await {
        Ok(()) => ApiResponse::success(AdminMessageResponse {
            message: "Utilisateur supprimé".to_string(),
        }),
        Err(AdminError::NotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "Utilisateur non trouvé")
        }
        Err(e) => {
            error!(admin_id = %admin.user_id, %user_id, error = %e, "Failed to delete user");
            ApiResponse::internal_error()
        }
    }
}
