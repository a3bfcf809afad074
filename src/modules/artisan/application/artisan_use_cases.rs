use std::sync::Arc;

use crate::artisan::application::ports::incoming::use_cases::{
    GetArtisanUseCase, ListArtisansUseCase, UpdateArtisanProfileUseCase,
};

#[derive(Clone)]
pub struct ArtisanUseCases {
    pub list: Arc<dyn ListArtisansUseCase + Send + Sync>,
    pub get: Arc<dyn GetArtisanUseCase + Send + Sync>,
    pub update_profile: Arc<dyn UpdateArtisanProfileUseCase + Send + Sync>,
}
