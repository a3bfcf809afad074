use actix_web::error::InternalError;
use actix_web::web::{JsonConfig, PathConfig, QueryConfig};
use actix_web::Error;

use crate::shared::api::ApiResponse;

fn rejected<E>(err: E, code: &str, message: &str) -> Error
where
    E: std::fmt::Debug + std::fmt::Display + 'static,
{
    InternalError::from_response(err, ApiResponse::bad_request(code, message)).into()
}

/// Unparseable bodies and query strings are reported in the API envelope
/// as `VALIDATION_ERROR`, carrying the extractor's message.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        rejected(err, "VALIDATION_ERROR", &message)
    })
}

pub fn custom_query_config() -> QueryConfig {
    QueryConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        rejected(err, "VALIDATION_ERROR", &message)
    })
}

/// Path segments that fail to parse (malformed UUIDs) become `INVALID_ID`.
pub fn custom_path_config() -> PathConfig {
    PathConfig::default().error_handler(|err, _req| rejected(err, "INVALID_ID", "ID invalide"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{get, http::StatusCode, post, test, web, App, HttpResponse};
    use serde::Deserialize;
    use uuid::Uuid;

    #[derive(Deserialize)]
    struct Rating {
        #[allow(dead_code)]
        rating: u8,
    }

    #[get("/things/{id}")]
    async fn thing(path: web::Path<Uuid>) -> HttpResponse {
        HttpResponse::Ok().body(path.into_inner().to_string())
    }

    #[post("/ratings")]
    async fn rate(_body: web::Json<Rating>) -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    #[actix_web::test]
    async fn malformed_path_id_maps_to_invalid_id() {
        let app =
            test::init_service(App::new().app_data(custom_path_config()).service(thing)).await;

        let req = test::TestRequest::get().uri("/things/not-a-uuid").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "INVALID_ID");
    }

    #[actix_web::test]
    async fn bad_json_body_maps_to_validation_error() {
        let app = test::init_service(App::new().app_data(custom_json_config()).service(rate)).await;

        let req = test::TestRequest::post()
            .uri("/ratings")
            .set_json(serde_json::json!({ "rating": "five" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }
}
