use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::{IntoParams, ToSchema};

use crate::admin::application::ports::incoming::use_cases::{
    parse_export_kind, ArtisanExportRow, BookingExportRow, ExportData, UserExportRow,
};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ExportParams {
    /// users, artisans, bookings or all (default)
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Sections that were not requested are omitted.
#[derive(Serialize, ToSchema)]
pub struct ExportResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Vec<Object>>)]
    pub users: Option<Vec<UserExportRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Vec<Object>>)]
    pub artisans: Option<Vec<ArtisanExportRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Vec<Object>>)]
    pub bookings: Option<Vec<BookingExportRow>>,
}

impl From<ExportData> for ExportResponse {
    fn from(data: ExportData) -> Self {
        Self {
            users: data.users,
            artisans: data.artisans,
            bookings: data.bookings,
        }
    }
}

/// Flat rows with French column headers, ready for a spreadsheet
#[utoipa::path(
    get,
    path = "/api/admin/export",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(ExportParams),
    responses(
        (status = 200, description = "Export rows per section", body = inline(SuccessResponse<ExportResponse>)),
        (status = 400, description = "Unknown export type", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
    )
)]
#[get("/api/admin/export")]
pub async fn admin_export_handler(
    admin: AdminUser,
    params: web::Query<ExportParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let kind = match parse_export_kind(params.kind.as_deref()) {
        Ok(kind) => kind,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.admin.export.execute(kind).await {
        Ok(export) => {
            info!(admin_id = %admin.user_id, ?kind, "Admin data exported");
            ApiResponse::success(ExportResponse::from(export))
        }
        Err(e) => {
            error!(admin_id = %admin.user_id, error = %e, "Failed to export data");
            ApiResponse::internal_error()
        }
    }
}
