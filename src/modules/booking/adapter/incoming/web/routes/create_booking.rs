use actix_web::{post, web, Responder};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::booking::application::domain::entities::{BookingStatus, ServiceSnapshot};
use crate::booking::application::ports::incoming::use_cases::{
    CreateBookingCommand, CreateBookingError, CreateBookingInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub artisan_id: Option<Uuid>,
    #[schema(value_type = Object)]
    pub service: Option<ServiceSnapshot>,
    #[schema(example = "2026-11-02")]
    pub date: Option<String>,
    #[schema(example = "14:00")]
    pub time: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    #[schema(example = "normal")]
    pub urgency: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct CreatedBooking {
    pub id: Uuid,
    #[schema(value_type = String)]
    pub status: BookingStatus,
    pub date: NaiveDate,
    pub time: String,
}

#[derive(Serialize, ToSchema)]
pub struct CreateBookingResponse {
    pub booking: CreatedBooking,
}

/// Request a service from an artisan
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = "bookings",
    security(("bearer_auth" = [])),
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Booking created", body = inline(SuccessResponse<CreateBookingResponse>)),
        (status = 400, description = "Missing field or unknown urgency", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Artisan not found", body = ErrorResponse),
    )
)]
#[post("/api/bookings")]
pub async fn create_booking_handler(
    user: AuthenticatedUser,
    payload: web::Json<CreateBookingRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let payload = payload.into_inner();
    let input = CreateBookingInput {
        artisan_id: payload.artisan_id,
        service: payload.service,
        date: payload.date,
        time: payload.time,
        address: payload.address,
        description: payload.description,
        urgency: payload.urgency,
    };

    let command = match CreateBookingCommand::new(user.user_id, input) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.booking.create.execute(command).await {
        Ok(booking) => ApiResponse::created(CreateBookingResponse {
            booking: CreatedBooking {
                id: booking.id,
                status: booking.status,
                date: booking.date,
                time: booking.time,
            },
        }),
        Err(CreateBookingError::ArtisanNotFound) => {
            ApiResponse::not_found("ARTISAN_NOT_FOUND", "Artisan non trouvé")
        }
        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Failed to create booking");
            ApiResponse::internal_error()
        }
    }
}
