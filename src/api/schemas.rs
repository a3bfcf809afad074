//! OpenAPI mirrors of the `ApiResponse` envelope. Handlers return
//! `HttpResponse`, so these types exist only for documentation.

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable machine-readable code, e.g. `INVALID_TRANSITION`.
    #[schema(example = "BOOKING_NOT_FOUND")]
    pub code: String,

    /// French message shown to the user.
    #[schema(example = "Réservation non trouvée")]
    pub message: String,
}
