use async_trait::async_trait;

use crate::artisan::application::ports::outgoing::{ArtisanListFilter, ArtisanView};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListArtisansError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListArtisansUseCase: Send + Sync {
    async fn execute(&self, filter: ArtisanListFilter)
        -> Result<Vec<ArtisanView>, ListArtisansError>;
}
