use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::artisan::application::ports::outgoing::ArtisanView;
use crate::review::application::ports::outgoing::ReviewView;

/// Public profile page: the artisan and its latest reviews.
#[derive(Debug, Clone, Serialize)]
pub struct ArtisanDetails {
    #[serde(flatten)]
    pub artisan: ArtisanView,
    pub reviews: Vec<ReviewView>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetArtisanError {
    #[error("Artisan not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetArtisanUseCase: Send + Sync {
    async fn execute(&self, artisan_id: Uuid) -> Result<ArtisanDetails, GetArtisanError>;
}
