use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::artisan::application::ports::outgoing::{ArtisanListFilter, ArtisanView};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListArtisansQuery {
    /// Service category key, e.g. `plumbing`
    pub category: Option<String>,
    pub min_rating: Option<f64>,
    /// `true` keeps only available artisans
    pub available: Option<String>,
    pub city: Option<String>,
    /// Substring of the artisan's name or bio
    pub search: Option<String>,
}

impl From<ListArtisansQuery> for ArtisanListFilter {
    fn from(query: ListArtisansQuery) -> Self {
        ArtisanListFilter {
            category: query.category.filter(|c| !c.is_empty() && c != "all"),
            min_rating: query.min_rating,
            available_only: query.available.as_deref() == Some("true"),
            city: query.city,
            search: query.search,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct ArtisanListResponse {
    #[schema(value_type = Vec<Object>)]
    pub artisans: Vec<ArtisanView>,
}

/// Public artisan directory
#[utoipa::path(
    get,
    path = "/api/artisans",
    tag = "artisans",
    params(ListArtisansQuery),
    responses(
        (status = 200, description = "Matching artisans, best rated first", body = inline(SuccessResponse<ArtisanListResponse>)),
        (status = 400, description = "Malformed query string", body = ErrorResponse),
    )
)]
#[get("/api/artisans")]
pub async fn list_artisans_handler(
    query: web::Query<ListArtisansQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.artisan.list.execute(query.into_inner().into()).await {
        Ok(artisans) => ApiResponse::success(ArtisanListResponse { artisans }),
        Err(e) => {
            error!(error = %e, "Failed to list artisans");
            ApiResponse::internal_error()
        }
    }
}
