mod get_artisan;
mod list_artisans;
mod update_artisan_profile;

pub use get_artisan::*;
pub use list_artisans::*;
pub use update_artisan_profile::*;
