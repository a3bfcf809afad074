mod get_artisan;
mod list_artisans;
mod update_artisan_profile;

pub use get_artisan::{ArtisanDetails, GetArtisanError, GetArtisanUseCase};
pub use list_artisans::{ListArtisansError, ListArtisansUseCase};
pub use update_artisan_profile::{
    ArtisanProfileResult, UpdateArtisanProfileCommand, UpdateArtisanProfileCommandError,
    UpdateArtisanProfileError, UpdateArtisanProfileUseCase,
};
