use actix_web::{delete, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::booking::application::ports::incoming::use_cases::{
    CancelBookingCommand, CancelBookingError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct CancelBookingResponse {
    pub message: String,
}

/// Cancel a pending or confirmed booking
#[utoipa::path(
    delete,
    path = "/api/bookings/{id}",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Booking id")),
    responses(
        (status = 200, description = "Booking cancelled", body = inline(SuccessResponse<CancelBookingResponse>)),
        (status = 400, description = "Booking is past the cancellable stage", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not a participant", body = ErrorResponse),
        (status = 404, description = "Booking not found", body = ErrorResponse),
    )
)]
#[delete("/api/bookings/{id}")]
pub async fn cancel_booking_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = CancelBookingCommand {
        booking_id: path.into_inner(),
        caller: user.caller(),
    };

    match data.booking.cancel.execute(command).await {
        Ok(_) => ApiResponse::success(CancelBookingResponse {
            message: "Réservation annulée".to_string(),
        }),
        Err(CancelBookingError::NotFound) => {
            ApiResponse::not_found("BOOKING_NOT_FOUND", "Réservation non trouvée")
        }
        Err(CancelBookingError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "Non autorisé")
        }
        Err(CancelBookingError::NotCancellable) => ApiResponse::bad_request(
            "BOOKING_NOT_CANCELLABLE",
            "Cette réservation ne peut pas être annulée",
        ),
        Err(e) => {
            error!(booking_id = %command.booking_id, error = %e, "Failed to cancel booking");
            ApiResponse::internal_error()
        }
    }
}
