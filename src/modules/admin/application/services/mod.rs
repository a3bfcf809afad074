mod admin_artisans_service;
mod admin_bookings_service;
mod admin_users_service;
mod dashboard_service;
mod export_service;

pub use admin_artisans_service::AdminArtisansService;
pub use admin_bookings_service::AdminBookingsService;
pub use admin_users_service::AdminUsersService;
pub use dashboard_service::DashboardService;
pub use export_service::ExportService;
