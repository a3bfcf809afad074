use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::review::application::ports::outgoing::ReviewView;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListReviewsParams {
    pub artisan_id: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct ReviewListResponse {
    #[schema(value_type = Vec<Object>)]
    pub reviews: Vec<ReviewView>,
}

/// Reviews of one artisan, newest first
#[utoipa::path(
    get,
    path = "/api/reviews",
    tag = "reviews",
    params(ListReviewsParams),
    responses(
        (status = 200, description = "Reviews with author names", body = inline(SuccessResponse<ReviewListResponse>)),
        (status = 400, description = "artisanId missing or malformed", body = ErrorResponse),
    )
)]
#[get("/api/reviews")]
pub async fn list_reviews_handler(
    params: web::Query<ListReviewsParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(artisan_id) = params
        .artisan_id
        .as_deref()
        .and_then(|id| Uuid::parse_str(id.trim()).ok())
    else {
        return ApiResponse::bad_request("VALIDATION_ERROR", "Artisan ID requis");
    };

    match data.review.list.execute(artisan_id).await {
        Ok(reviews) => ApiResponse::success(ReviewListResponse { reviews }),
        Err(e) => {
            error!(artisan_id = %artisan_id, error = %e, "Failed to list reviews");
            ApiResponse::internal_error()
        }
    }
}
