use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::payment::application::ports::incoming::use_cases::{
    CreatePaymentCommand, CreatePaymentError, CreatePaymentOutcome,
};
use crate::payment::application::ports::outgoing::PaymentResult;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    pub booking_id: Option<Uuid>,
    #[schema(example = "cmi")]
    pub method: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct PaymentResponse {
    #[schema(value_type = Object)]
    pub payment: PaymentResult,
}

/// Open a payment for a booking, reusing a pending one
#[utoipa::path(
    post,
    path = "/api/payments",
    tag = "payments",
    security(("bearer_auth" = [])),
    request_body = CreatePaymentRequest,
    responses(
        (status = 200, description = "Existing pending payment", body = inline(SuccessResponse<PaymentResponse>)),
        (status = 201, description = "Payment created", body = inline(SuccessResponse<PaymentResponse>)),
        (status = 400, description = "Invalid input, already paid or no usable amount", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not the booking's customer", body = ErrorResponse),
        (status = 404, description = "Booking not found", body = ErrorResponse),
    )
)]
#[post("/api/payments")]
pub async fn create_payment_handler(
    user: AuthenticatedUser,
    payload: web::Json<CreatePaymentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let payload = payload.into_inner();
    let command = match CreatePaymentCommand::new(user.user_id, payload.booking_id, payload.method)
    {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.payment.create.execute(command).await {
        Ok(CreatePaymentOutcome::Created(payment)) => {
            ApiResponse::created(PaymentResponse { payment })
        }
        Ok(CreatePaymentOutcome::Existing(payment)) => {
            ApiResponse::success(PaymentResponse { payment })
        }
        Err(CreatePaymentError::BookingNotFound) => {
            ApiResponse::not_found("BOOKING_NOT_FOUND", "Réservation non trouvée")
        }
        Err(CreatePaymentError::NotBookingCustomer) => {
            ApiResponse::forbidden("FORBIDDEN", "Non autorisé")
        }
        Err(CreatePaymentError::AlreadyPaid) => {
            ApiResponse::bad_request("ALREADY_PAID", "Cette réservation est déjà payée")
        }
        Err(CreatePaymentError::InvalidAmount) => {
            ApiResponse::bad_request("INVALID_AMOUNT", "Montant invalide")
        }
        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Failed to create payment");
            ApiResponse::internal_error()
        }
    }
}
