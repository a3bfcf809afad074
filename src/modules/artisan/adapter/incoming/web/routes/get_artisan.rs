use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::artisan::application::ports::incoming::use_cases::{ArtisanDetails, GetArtisanError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct ArtisanDetailsResponse {
    #[schema(value_type = Object)]
    pub artisan: ArtisanDetails,
}

/// Artisan profile with its ten most recent reviews
#[utoipa::path(
    get,
    path = "/api/artisans/{id}",
    tag = "artisans",
    params(("id" = Uuid, Path, description = "Artisan id")),
    responses(
        (status = 200, description = "Artisan profile", body = inline(SuccessResponse<ArtisanDetailsResponse>)),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Artisan not found", body = ErrorResponse),
    )
)]
#[get("/api/artisans/{id}")]
pub async fn get_artisan_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let artisan_id = path.into_inner();

    match data.artisan.get.execute(artisan_id).await {
        Ok(artisan) => ApiResponse::success(ArtisanDetailsResponse { artisan }),
        Err(GetArtisanError::NotFound) => {
            ApiResponse::not_found("ARTISAN_NOT_FOUND", "Artisan non trouvé")
        }
        Err(e) => {
            error!(artisan_id = %artisan_id, error = %e, "Failed to load artisan");
            ApiResponse::internal_error()
        }
    }
}
