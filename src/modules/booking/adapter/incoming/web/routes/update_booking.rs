use actix_web::{patch, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::booking::application::domain::entities::BookingStatus;
use crate::booking::application::ports::incoming::use_cases::{
    ArtisanStats, UpdateBookingCommand, UpdateBookingError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBookingRequest {
    #[schema(example = "completed")]
    pub status: Option<String>,
    #[schema(example = 5)]
    pub rating: Option<i32>,
    pub review: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct BookingStatusSummary {
    pub id: Uuid,
    #[schema(value_type = String)]
    pub status: BookingStatus,
}

#[derive(Serialize, ToSchema)]
pub struct UpdateBookingResponse {
    pub message: String,
    pub booking: BookingStatusSummary,
    #[schema(value_type = Option<Object>)]
    pub artisan: Option<ArtisanStats>,
}

/// Move a booking along its lifecycle, optionally rating it on completion
#[utoipa::path(
    patch,
    path = "/api/bookings/{id}",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Booking id")),
    request_body = UpdateBookingRequest,
    responses(
        (status = 200, description = "Booking updated", body = inline(SuccessResponse<UpdateBookingResponse>)),
        (status = 400, description = "Invalid input, illegal transition or already reviewed", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not a participant", body = ErrorResponse),
        (status = 404, description = "Booking not found", body = ErrorResponse),
    )
)]
#[patch("/api/bookings/{id}")]
pub async fn update_booking_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateBookingRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let booking_id = path.into_inner();
    let payload = payload.into_inner();

    let command = match UpdateBookingCommand::new(
        booking_id,
        user.caller(),
        payload.status,
        payload.rating,
        payload.review,
    ) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.booking.update.execute(command).await {
        Ok(result) => ApiResponse::success(UpdateBookingResponse {
            message: "Réservation mise à jour".to_string(),
            booking: BookingStatusSummary {
                id: result.booking.id,
                status: result.booking.status,
            },
            artisan: result.artisan,
        }),
        Err(UpdateBookingError::NotFound) => {
            ApiResponse::not_found("BOOKING_NOT_FOUND", "Réservation non trouvée")
        }
        Err(UpdateBookingError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "Non autorisé")
        }
        Err(UpdateBookingError::InvalidTransition { from, to }) => ApiResponse::bad_request(
            "INVALID_STATUS_TRANSITION",
            &format!("Impossible de passer de {from} à {to}"),
        ),
        Err(UpdateBookingError::AlreadyReviewed) => ApiResponse::bad_request(
            "REVIEW_ALREADY_EXISTS",
            "Vous avez déjà laissé un avis pour cette réservation",
        ),
        Err(e) => {
            error!(booking_id = %booking_id, error = %e, "Failed to update booking");
            ApiResponse::internal_error()
        }
    }
}
