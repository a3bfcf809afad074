use actix_web::{delete, get, patch, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::admin::application::ports::incoming::use_cases::{
    AdminBookingListQuery, AdminError, BookingPatchInput,
};
use crate::admin::application::ports::outgoing::BookingPatch;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::booking::application::ports::outgoing::{BookingResult, BookingView};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::AdminMessageResponse;

#[derive(Debug, Deserialize, IntoParams)]
pub struct AdminBookingParams {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    /// Any booking status, or all
    pub status: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminBookingListResponse {
    #[schema(value_type = Vec<Object>)]
    pub bookings: Vec<BookingView>,
    pub total: u64,
    pub total_pages: u64,
    pub current_page: u64,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminBookingPatchRequest {
    #[schema(example = "confirmed")]
    pub status: Option<String>,
    #[schema(example = 350.0)]
    pub total_price: Option<f64>,
    #[schema(example = "2026-11-04")]
    pub date: Option<String>,
    pub time: Option<String>,
    pub address: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct AdminBookingResponse {
    #[schema(value_type = Object)]
    pub booking: BookingResult,
}

/// Paginated bookings across every customer and artisan
#[utoipa::path(
    get,
    path = "/api/admin/bookings",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(AdminBookingParams),
    responses(
        (status = 200, description = "Bookings", body = inline(SuccessResponse<AdminBookingListResponse>)),
        (status = 400, description = "Unknown status filter", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
    )
)]
#[get("/api/admin/bookings")]
pub async fn admin_list_bookings_handler(
    admin: AdminUser,
    params: web::Query<AdminBookingParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let params = params.into_inner();
    let query = match AdminBookingListQuery::new(params.page, params.limit, params.status) {
        Ok(query) => query,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.admin.bookings.list(query).await {
        Ok(page) => ApiResponse::success(AdminBookingListResponse {
            bookings: page.items,
            total: page.meta.total,
            total_pages: page.meta.total_pages,
            current_page: page.meta.current_page,
        }),
        Err(e) => {
            error!(admin_id = %admin.user_id, error = %e, "Failed to list bookings");
            ApiResponse::internal_error()
        }
    }
}

/// Edit a booking; any status may be set
#[utoipa::path(
    patch,
    path = "/api/admin/bookings/{id}",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Booking id")),
    request_body = AdminBookingPatchRequest,
    responses(
        (status = 200, description = "Booking updated", body = inline(SuccessResponse<AdminBookingResponse>)),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
        (status = 404, description = "Booking not found", body = ErrorResponse),
    )
)]
#[patch("/api/admin/bookings/{id}")]
pub async fn admin_update_booking_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    payload: web::Json<AdminBookingPatchRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let booking_id = path.into_inner();
    let payload = payload.into_inner();

    let patch = match BookingPatch::try_from(BookingPatchInput {
        status: payload.status,
        total_price: payload.total_price,
        date: payload.date,
        time: payload.time,
        address: payload.address,
    }) {
        Ok(patch) => patch,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.admin.bookings.update(booking_id, patch).await {
        Ok(booking) => ApiResponse::success(AdminBookingResponse { booking }),
        Err(AdminError::NotFound) => {
            ApiResponse::not_found("BOOKING_NOT_FOUND", "Réservation non trouvée")
        }
        Err(e) => {
            error!(admin_id = %admin.user_id, %booking_id, error = %e, "Failed to update booking");
            ApiResponse::internal_error()
        }
    }
}

#[utoipa::path(
    delete,
    path = "/api/admin/bookings/{id}",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Booking id")),
    responses(
        (status = 200, description = "Booking deleted", body = inline(SuccessResponse<AdminMessageResponse>)),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
        (status = 404, description = "Booking not found", body = ErrorResponse),
    )
)]
#[delete("/api/admin/bookings/{id}")]
pub async fn admin_delete_booking_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let booking_id = path.into_inner();

    match data.admin.bookings.delete(booking_id).await {
        Ok(()) => ApiResponse::success(AdminMessageResponse {
            message: "Réservation supprimée".to_string(),
        }),
        Err(AdminError::NotFound) => {
            ApiResponse::not_found("BOOKING_NOT_FOUND", "Réservation non trouvée")
        }
        Err(e) => {
            error!(admin_id = %admin.user_id, %booking_id, error = %e, "Failed to delete booking");
            ApiResponse::internal_error()
        }
    }
}
