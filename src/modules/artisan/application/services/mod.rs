mod get_artisan_service;
mod list_artisans_service;
mod update_artisan_profile_service;

pub use get_artisan_service::{GetArtisanService, RECENT_REVIEWS_LIMIT};
pub use list_artisans_service::ListArtisansService;
pub use update_artisan_profile_service::UpdateArtisanProfileService;
