pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::admin;
pub use modules::artisan;
pub use modules::auth;
pub use modules::booking;
pub use modules::email;
pub use modules::notification;
pub use modules::payment;
pub use modules::push;
pub use modules::review;

use crate::admin::adapter::outgoing::{AdminQueryPostgres, AdminStorePostgres};
use crate::admin::application::services::{
    AdminArtisansService, AdminBookingsService, AdminUsersService, DashboardService,
    ExportService,
};
use crate::admin::application::AdminUseCases;
use crate::artisan::adapter::outgoing::{ArtisanQueryPostgres, ArtisanRepositoryPostgres};
use crate::artisan::application::services::{
    GetArtisanService, ListArtisansService, UpdateArtisanProfileService,
};
use crate::artisan::application::ArtisanUseCases;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::adapter::outgoing::verification_code_repository_postgres::VerificationCodeRepositoryPostgres;
use crate::auth::application::ports::outgoing::{
    PasswordHasher, TokenProvider, VerificationCodeRepository,
};
use crate::auth::application::services::{
    ChangePasswordService, ExpiredCodeSweeper, GetCurrentUserService, LoginUserService,
    RegisterUserService, ResendCodeService, UpdateProfileService, VerificationCodeIssuer,
    VerifyEmailService,
};
use crate::auth::application::AuthUseCases;
use crate::booking::adapter::outgoing::{BookingQueryPostgres, BookingRepositoryPostgres};
use crate::booking::application::services::{
    CancelBookingService, CreateBookingService, ListBookingsService, UpdateBookingService,
};
use crate::booking::application::BookingUseCases;
use crate::email::adapter::outgoing::smtp_sender::SmtpEmailSender;
use crate::email::application::ports::outgoing::EmailSender;
use crate::email::application::services::UserEmailService;
use crate::notification::adapter::outgoing::NotificationRepositoryPostgres;
use crate::notification::application::ports::incoming::use_cases::NotifyUserUseCase;
use crate::notification::application::services::{
    ListNotificationsService, MarkReadService, NotificationWriter,
};
use crate::notification::application::NotificationUseCases;
use crate::payment::adapter::outgoing::PaymentRepositoryPostgres;
use crate::payment::application::services::{CreatePaymentService, ListBookingPaymentsService};
use crate::payment::application::PaymentUseCases;
use crate::push::adapter::outgoing::{
    PushSubscriptionRepositoryPostgres, VapidConfig, WebPushTransport,
};
use crate::push::application::ports::outgoing::PushTransport;
use crate::push::application::services::{
    GetPublicKeyService, PushDispatcher, SubscribeService, UnsubscribeService,
};
use crate::push::application::PushUseCases;
use crate::review::adapter::outgoing::{ReviewQueryPostgres, ReviewRepositoryPostgres};
use crate::review::application::services::{
    CreateReviewService, ListReviewsService, RatingRecalculator,
};
use crate::review::application::ReviewUseCases;
use crate::shared::api::{custom_json_config, custom_path_config, custom_query_config};

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::{anyhow, Context};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub artisan: ArtisanUseCases,
    pub booking: BookingUseCases,
    pub review: ReviewUseCases,
    pub notification: NotificationUseCases,
    pub push: PushUseCases,
    pub payment: PaymentUseCases,
    pub admin: AdminUseCases,
}

#[cfg(not(tarpaulin_include))]
fn load_env() {
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}

#[cfg(not(tarpaulin_include))]
fn email_sender() -> anyhow::Result<SmtpEmailSender> {
    let from_email =
        env::var("EMAIL_FROM").unwrap_or_else(|_| "noreply@fi-khidmatik.com".to_string());

    let is_test = env::var("RUST_ENV").as_deref() == Ok("test");
    match env::var("SMTP_SERVER") {
        Ok(server) if !is_test => {
            let user = env::var("SMTP_USERNAME").context("SMTP_USERNAME not set")?;
            let pass = env::var("SMTP_PASSWORD").context("SMTP_PASSWORD not set")?;
            SmtpEmailSender::relay(&server, &user, &pass, &from_email)
                .context("Failed to configure SMTP relay")
        }
        _ => {
            // Local Mailpit
            let host = env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string());
            let port: u16 = env::var("SMTP_PORT")
                .unwrap_or_else(|_| "1025".to_string())
                .parse()
                .context("Invalid SMTP_PORT")?;
            if !is_test {
                warn!(%host, port, "SMTP_SERVER not set, sending mail to local SMTP");
            }
            SmtpEmailSender::local(&host, port, &from_email).context("Invalid EMAIL_FROM")
        }
    }
}

#[cfg(not(tarpaulin_include))]
fn push_transport(vapid: Option<&VapidConfig>) -> Option<Arc<dyn PushTransport>> {
    let Some(config) = vapid else {
        warn!("VAPID keys not configured, push notifications disabled");
        return None;
    };

    match WebPushTransport::new(config) {
        Ok(transport) => Some(Arc::new(transport)),
        Err(e) => {
            warn!(error = %e, "Web push client unavailable, push notifications disabled");
            None
        }
    }
}

#[cfg(not(tarpaulin_include))]
fn build_state(
    db: &Arc<DatabaseConnection>,
    tokens: Arc<JwtTokenService>,
) -> anyhow::Result<(AppState, Arc<dyn VerificationCodeRepository>)> {
    // Repositories
    let user_repo = UserRepositoryPostgres::new(Arc::clone(db));
    let code_repo: Arc<dyn VerificationCodeRepository> =
        Arc::new(VerificationCodeRepositoryPostgres::new(Arc::clone(db)));
    let artisan_repo = ArtisanRepositoryPostgres::new(Arc::clone(db));
    let artisan_query = ArtisanQueryPostgres::new(Arc::clone(db));
    let booking_repo = BookingRepositoryPostgres::new(Arc::clone(db));
    let booking_query = BookingQueryPostgres::new(Arc::clone(db));
    let review_repo = ReviewRepositoryPostgres::new(Arc::clone(db));
    let review_query = ReviewQueryPostgres::new(Arc::clone(db));
    let notification_repo = NotificationRepositoryPostgres::new(Arc::clone(db));
    let subscription_repo = PushSubscriptionRepositoryPostgres::new(Arc::clone(db));
    let payment_repo = PaymentRepositoryPostgres::new(Arc::clone(db));
    let admin_query = AdminQueryPostgres::new(Arc::clone(db));
    let admin_store = AdminStorePostgres::new(Arc::clone(db));

    let hasher: Arc<dyn PasswordHasher> = Arc::new(
        Argon2Hasher::from_env().map_err(|e| anyhow!("Invalid Argon2 parameters: {e}"))?,
    );
    let token_provider: Arc<dyn TokenProvider> = tokens;

    // Email
    let sender: Arc<dyn EmailSender + Send + Sync> = Arc::new(email_sender()?);
    let emails = Arc::new(UserEmailService::new(sender));
    let issuer = VerificationCodeIssuer::new(Arc::clone(&code_repo), emails.clone());

    // Push & notifications
    let vapid = VapidConfig::from_env();
    let dispatcher = Arc::new(PushDispatcher::new(
        subscription_repo.clone(),
        push_transport(vapid.as_ref()),
    ));
    let notifier: Arc<dyn NotifyUserUseCase> = Arc::new(NotificationWriter::new(
        notification_repo.clone(),
        dispatcher.clone(),
    ));

    let ratings = RatingRecalculator::new(
        Arc::new(review_repo.clone()),
        Arc::new(artisan_repo.clone()),
    );

    let auth = AuthUseCases {
        register: Arc::new(RegisterUserService::new(
            user_repo.clone(),
            Arc::new(artisan_repo.clone()),
            hasher.clone(),
            token_provider.clone(),
            issuer.clone(),
        )),
        login: Arc::new(LoginUserService::new(
            user_repo.clone(),
            hasher.clone(),
            token_provider,
        )),
        current_user: Arc::new(GetCurrentUserService::new(
            user_repo.clone(),
            Arc::new(artisan_repo.clone()),
        )),
        verify_email: Arc::new(VerifyEmailService::new(
            user_repo.clone(),
            Arc::clone(&code_repo),
        )),
        resend_code: Arc::new(ResendCodeService::new(
            user_repo.clone(),
            Arc::clone(&code_repo),
            issuer,
        )),
        update_profile: Arc::new(UpdateProfileService::new(user_repo.clone())),
        change_password: Arc::new(ChangePasswordService::new(user_repo.clone(), hasher)),
    };

    let artisan = ArtisanUseCases {
        list: Arc::new(ListArtisansService::new(artisan_query.clone())),
        get: Arc::new(GetArtisanService::new(
            artisan_query,
            Arc::new(review_query.clone()),
        )),
        update_profile: Arc::new(UpdateArtisanProfileService::new(
            artisan_repo.clone(),
            Arc::new(user_repo.clone()),
        )),
    };

    let booking = BookingUseCases {
        list: Arc::new(ListBookingsService::new(
            booking_query.clone(),
            Arc::new(artisan_repo.clone()),
        )),
        create: Arc::new(CreateBookingService::new(
            booking_repo.clone(),
            Arc::new(artisan_repo.clone()),
            Arc::new(user_repo.clone()),
            notifier.clone(),
        )),
        update: Arc::new(UpdateBookingService::new(
            booking_repo.clone(),
            Arc::new(artisan_repo.clone()),
            Arc::new(user_repo.clone()),
            Arc::new(review_repo.clone()),
            ratings.clone(),
            notifier.clone(),
            emails,
        )),
        cancel: Arc::new(CancelBookingService::new(
            booking_repo.clone(),
            Arc::new(artisan_repo.clone()),
        )),
    };

    let review = ReviewUseCases {
        list: Arc::new(ListReviewsService::new(review_query)),
        create: Arc::new(CreateReviewService::new(
            review_repo,
            Arc::new(booking_repo.clone()),
            Arc::new(artisan_repo.clone()),
            Arc::new(user_repo.clone()),
            notifier,
            ratings,
        )),
    };

    let notification = NotificationUseCases {
        list: Arc::new(ListNotificationsService::new(notification_repo.clone())),
        mark_read: Arc::new(MarkReadService::new(notification_repo)),
    };

    let push = PushUseCases {
        public_key: Arc::new(GetPublicKeyService::new(vapid.map(|c| c.public_key))),
        subscribe: Arc::new(SubscribeService::new(subscription_repo.clone())),
        unsubscribe: Arc::new(UnsubscribeService::new(subscription_repo)),
        send: dispatcher,
    };

    let payment = PaymentUseCases {
        create: Arc::new(CreatePaymentService::new(
            payment_repo.clone(),
            Arc::new(booking_repo.clone()),
        )),
        list_for_booking: Arc::new(ListBookingPaymentsService::new(
            payment_repo,
            Arc::new(booking_repo),
            Arc::new(artisan_repo.clone()),
        )),
    };

    let admin = AdminUseCases {
        artisans: Arc::new(AdminArtisansService::new(
            admin_query.clone(),
            Arc::new(artisan_repo),
            Arc::new(admin_store.clone()),
        )),
        bookings: Arc::new(AdminBookingsService::new(
            admin_store.clone(),
            Arc::new(booking_query.clone()),
        )),
        users: Arc::new(AdminUsersService::new(
            admin_store,
            Arc::new(admin_query.clone()),
        )),
        dashboard: Arc::new(DashboardService::new(
            admin_query.clone(),
            Arc::new(booking_query),
        )),
        export: Arc::new(ExportService::new(admin_query)),
    };

    let state = AppState {
        auth,
        artisan,
        booking,
        review,
        notification,
        push,
        payment,
        admin,
    };

    Ok((state, code_repo))
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    load_env();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let db_url = env::var("DATABASE_URL").context("DATABASE_URL is not set in .env file")?;
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let server_url = format!("{host}:{port}");

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    let db_arc = Arc::new(conn);

    let jwt_service = Arc::new(JwtTokenService::new(
        JwtConfig::from_env().context("Invalid JWT configuration")?,
    ));
    let (state, code_repo) = build_state(&db_arc, jwt_service.clone())?;

    ExpiredCodeSweeper::new(code_repo, ExpiredCodeSweeper::interval_from_env()).spawn();

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = jwt_service;
    let openapi = api::openapi::ApiDoc::openapi();

    info!(%server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .app_data(custom_path_config())
            .app_data(custom_query_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {server_url}"))?
    .run()
    .await
    .context("HTTP server error")
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::get_current_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::verify_email_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::resend_code_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::update_profile_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::change_password_handler);
    // Artisans ("/profile" before "/{id}")
    cfg.service(crate::artisan::adapter::incoming::web::routes::update_artisan_profile_handler);
    cfg.service(crate::artisan::adapter::incoming::web::routes::list_artisans_handler);
    cfg.service(crate::artisan::adapter::incoming::web::routes::get_artisan_handler);
    // Bookings
    cfg.service(crate::booking::adapter::incoming::web::routes::list_bookings_handler);
    cfg.service(crate::booking::adapter::incoming::web::routes::create_booking_handler);
    cfg.service(crate::booking::adapter::incoming::web::routes::update_booking_handler);
    cfg.service(crate::booking::adapter::incoming::web::routes::cancel_booking_handler);
    // Reviews
    cfg.service(crate::review::adapter::incoming::web::routes::list_reviews_handler);
    cfg.service(crate::review::adapter::incoming::web::routes::create_review_handler);
    // Notifications
    cfg.service(crate::notification::adapter::incoming::web::routes::list_notifications_handler);
    cfg.service(
        crate::notification::adapter::incoming::web::routes::mark_notifications_read_handler,
    );
    // Push
    cfg.service(crate::push::adapter::incoming::web::routes::get_public_key_handler);
    cfg.service(crate::push::adapter::incoming::web::routes::subscribe_handler);
    cfg.service(crate::push::adapter::incoming::web::routes::unsubscribe_handler);
    // Payments
    cfg.service(crate::payment::adapter::incoming::web::routes::create_payment_handler);
    cfg.service(crate::payment::adapter::incoming::web::routes::list_booking_payments_handler);
    // Admin
    cfg.service(crate::admin::adapter::incoming::web::routes::admin_dashboard_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::admin_export_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::admin_list_artisans_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::admin_update_artisan_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::admin_delete_artisan_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::admin_list_bookings_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::admin_update_booking_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::admin_delete_booking_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::admin_list_users_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::admin_update_user_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::admin_delete_user_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
