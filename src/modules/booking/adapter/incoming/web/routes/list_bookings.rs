use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::booking::application::ports::incoming::use_cases::ListBookingsQuery;
use crate::booking::application::ports::outgoing::BookingView;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListBookingsParams {
    /// pending, confirmed, in_progress, completed, cancelled or all
    pub status: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct BookingListResponse {
    #[schema(value_type = Vec<Object>)]
    pub bookings: Vec<BookingView>,
}

/// Bookings visible to the caller, newest first
#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(ListBookingsParams),
    responses(
        (status = 200, description = "Bookings", body = inline(SuccessResponse<BookingListResponse>)),
        (status = 400, description = "Unknown status filter", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[get("/api/bookings")]
pub async fn list_bookings_handler(
    user: AuthenticatedUser,
    params: web::Query<ListBookingsParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = match ListBookingsQuery::new(user.caller(), params.into_inner().status) {
        Ok(query) => query,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.booking.list.execute(query).await {
        Ok(bookings) => ApiResponse::success(BookingListResponse { bookings }),
        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Failed to list bookings");
            ApiResponse::internal_error()
        }
    }
}
