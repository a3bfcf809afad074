use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

/// JSON envelope shared by every endpoint:
/// `{ "success": true, "data": ... }` or `{ "success": false, "error": { code, message } }`.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

#[derive(Serialize, Clone, Debug)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(Self::ok(data))
    }

    pub fn created(data: T) -> HttpResponse {
        HttpResponse::Created().json(Self::ok(data))
    }
}

impl ApiResponse<()> {
    pub fn error(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        let body = ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.to_owned(),
                message: message.to_owned(),
            }),
        };
        HttpResponse::build(status).json(body)
    }

    pub fn bad_request(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, code, message)
    }

    pub fn unauthorized(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, code, message)
    }

    pub fn forbidden(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::FORBIDDEN, code, message)
    }

    pub fn not_found(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, code, message)
    }

    pub fn too_many_requests(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::TOO_MANY_REQUESTS, code, message)
    }

    /// 500 with a specific code, for failures the client can tell apart
    /// (mail delivery, missing push configuration).
    pub fn server_error(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::INTERNAL_SERVER_ERROR, code, message)
    }

    /// Generic 500. Details stay in the logs.
    pub fn internal_error() -> HttpResponse {
        Self::server_error("INTERNAL_ERROR", "Erreur serveur")
    }
}
