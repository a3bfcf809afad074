use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::payment::application::ports::incoming::use_cases::ListBookingPaymentsError;
use crate::payment::application::ports::outgoing::PaymentResult;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct PaymentListResponse {
    #[schema(value_type = Vec<Object>)]
    pub payments: Vec<PaymentResult>,
}

/// Payments recorded against a booking
#[utoipa::path(
    get,
    path = "/api/payments/booking/{booking_id}",
    tag = "payments",
    security(("bearer_auth" = [])),
    params(("booking_id" = Uuid, Path, description = "Booking id")),
    responses(
        (status = 200, description = "Payments, newest first", body = inline(SuccessResponse<PaymentListResponse>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is neither a participant nor an admin", body = ErrorResponse),
        (status = 404, description = "Booking not found", body = ErrorResponse),
    )
)]
#[get("/api/payments/booking/{booking_id}")]
pub async fn list_booking_payments_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let booking_id = path.into_inner();

    match data
        .payment
        .list_for_booking
        .execute(booking_id, user.caller())
        .await
    {
        Ok(payments) => ApiResponse::success(PaymentListResponse { payments }),
        Err(ListBookingPaymentsError::BookingNotFound) => {
            ApiResponse::not_found("BOOKING_NOT_FOUND", "Réservation non trouvée")
        }
        Err(ListBookingPaymentsError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "Non autorisé")
        }
        Err(e) => {
            error!(booking_id = %booking_id, error = %e, "Failed to list payments");
            ApiResponse::internal_error()
        }
    }
}
