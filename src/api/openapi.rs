use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Request and response bodies referenced by the paths below are collected
// automatically; only the shared error envelope is listed explicitly.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fi-Khidmatik API",
        version = "1.0.0",
        description = "Marketplace connecting customers with artisans in Morocco",
        contact(
            name = "API Support",
            email = "contact@fi-khidmatik.com"
        )
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::get_current_user_handler,
        crate::auth::adapter::incoming::web::routes::verify_email_handler,
        crate::auth::adapter::incoming::web::routes::resend_code_handler,

        // User endpoints
        crate::auth::adapter::incoming::web::routes::update_profile_handler,
        crate::auth::adapter::incoming::web::routes::change_password_handler,

        // Artisan endpoints
        crate::artisan::adapter::incoming::web::routes::list_artisans_handler,
        crate::artisan::adapter::incoming::web::routes::get_artisan_handler,
        crate::artisan::adapter::incoming::web::routes::update_artisan_profile_handler,

        // Booking endpoints
        crate::booking::adapter::incoming::web::routes::list_bookings_handler,
        crate::booking::adapter::incoming::web::routes::create_booking_handler,
        crate::booking::adapter::incoming::web::routes::update_booking_handler,
        crate::booking::adapter::incoming::web::routes::cancel_booking_handler,

        // Review endpoints
        crate::review::adapter::incoming::web::routes::list_reviews_handler,
        crate::review::adapter::incoming::web::routes::create_review_handler,

        // Notification endpoints
        crate::notification::adapter::incoming::web::routes::list_notifications_handler,
        crate::notification::adapter::incoming::web::routes::mark_notifications_read_handler,

        // Push endpoints
        crate::push::adapter::incoming::web::routes::get_public_key_handler,
        crate::push::adapter::incoming::web::routes::subscribe_handler,
        crate::push::adapter::incoming::web::routes::unsubscribe_handler,

        // Payment endpoints
        crate::payment::adapter::incoming::web::routes::create_payment_handler,
        crate::payment::adapter::incoming::web::routes::list_booking_payments_handler,

        // Admin endpoints
        crate::admin::adapter::incoming::web::routes::admin_dashboard_handler,
        crate::admin::adapter::incoming::web::routes::admin_export_handler,
        crate::admin::adapter::incoming::web::routes::admin_list_artisans_handler,
        crate::admin::adapter::incoming::web::routes::admin_update_artisan_handler,
        crate::admin::adapter::incoming::web::routes::admin_delete_artisan_handler,
        crate::admin::adapter::incoming::web::routes::admin_list_bookings_handler,
        crate::admin::adapter::incoming::web::routes::admin_update_booking_handler,
        crate::admin::adapter::incoming::web::routes::admin_delete_booking_handler,
        crate::admin::adapter::incoming::web::routes::admin_list_users_handler,
        crate::admin::adapter::incoming::web::routes::admin_update_user_handler,
        crate::admin::adapter::incoming::web::routes::admin_delete_user_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, login and email verification"),
        (name = "users", description = "Profile of the signed-in user"),
        (name = "artisans", description = "Artisan directory and profiles"),
        (name = "bookings", description = "Service bookings and their lifecycle"),
        (name = "reviews", description = "Ratings left after completed bookings"),
        (name = "notifications", description = "In-app notification inbox"),
        (name = "push", description = "Web push subscriptions"),
        (name = "payments", description = "Booking payments"),
        (name = "admin", description = "Back-office endpoints, admin role only"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_admin_path_is_documented() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for path in [
            "/api/admin/dashboard",
            "/api/admin/export",
            "/api/admin/artisans",
            "/api/admin/artisans/{id}",
            "/api/admin/bookings",
            "/api/admin/bookings/{id}",
            "/api/admin/users",
            "/api/admin/users/{id}",
        ] {
            assert!(paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn bearer_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
