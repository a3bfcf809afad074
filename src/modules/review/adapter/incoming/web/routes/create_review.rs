use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::review::application::ports::incoming::use_cases::{
    CreateReviewCommand, CreateReviewError,
};
use crate::review::application::ports::outgoing::ReviewResult;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    pub booking_id: Option<Uuid>,
    #[schema(example = 5)]
    pub rating: Option<i32>,
    #[schema(example = "Travail rapide et soigné")]
    pub comment: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct CreateReviewResponse {
    pub message: String,
    #[schema(value_type = Object)]
    pub review: ReviewResult,
}

/// Review a completed booking
#[utoipa::path(
    post,
    path = "/api/reviews",
    tag = "reviews",
    security(("bearer_auth" = [])),
    request_body = CreateReviewRequest,
    responses(
        (status = 201, description = "Review created", body = inline(SuccessResponse<CreateReviewResponse>)),
        (status = 400, description = "Invalid input, booking not completed or already reviewed", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not the booking's customer", body = ErrorResponse),
        (status = 404, description = "Booking not found", body = ErrorResponse),
    )
)]
#[post("/api/reviews")]
pub async fn create_review_handler(
    user: AuthenticatedUser,
    payload: web::Json<CreateReviewRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let payload = payload.into_inner();
    let command = match CreateReviewCommand::new(
        user.user_id,
        payload.booking_id,
        payload.rating,
        payload.comment,
    ) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.review.create.execute(command).await {
        Ok(review) => ApiResponse::created(CreateReviewResponse {
            message: "Avis ajouté avec succès".to_string(),
            review,
        }),
        Err(CreateReviewError::BookingNotFound) => {
            ApiResponse::not_found("BOOKING_NOT_FOUND", "Réservation non trouvée")
        }
        Err(CreateReviewError::NotBookingCustomer) => {
            ApiResponse::forbidden("FORBIDDEN", "Non autorisé")
        }
        Err(CreateReviewError::BookingNotCompleted) => ApiResponse::bad_request(
            "BOOKING_NOT_COMPLETED",
            "La réservation doit être terminée pour laisser un avis",
        ),
        Err(CreateReviewError::AlreadyReviewed) => ApiResponse::bad_request(
            "REVIEW_ALREADY_EXISTS",
            "Vous avez déjà laissé un avis pour cette réservation",
        ),
        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Failed to create review");
            ApiResponse::internal_error()
        }
    }
}
