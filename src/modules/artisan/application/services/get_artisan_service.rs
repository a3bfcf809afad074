use async_trait::async_trait;
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use crate::artisan::application::ports::{
    incoming::use_cases::{ArtisanDetails, GetArtisanError, GetArtisanUseCase},
    outgoing::ArtisanQuery,
};
use crate::review::application::ports::outgoing::ReviewQuery;

/// Reviews shown on an artisan's public page.
pub const RECENT_REVIEWS_LIMIT: u64 = 10;

pub struct GetArtisanService<Q>
where
    Q: ArtisanQuery,
{
    query: Q,
    reviews: Arc<dyn ReviewQuery>,
}

impl<Q> GetArtisanService<Q>
where
    Q: ArtisanQuery,
{
    pub fn new(query: Q, reviews: Arc<dyn ReviewQuery>) -> Self {
        Self { query, reviews }
    }
}

#[async_trait]
impl<Q> GetArtisanUseCase for GetArtisanService<Q>
where
    Q: ArtisanQuery,
{
    async fn execute(&self, artisan_id: Uuid) -> Result<ArtisanDetails, GetArtisanError> {
        let artisan = self
            .query
            .find_view(artisan_id)
            .await
            .map_err(|e| GetArtisanError::RepositoryError(e.to_string()))?
            .ok_or(GetArtisanError::NotFound)?;

        let reviews = self
            .reviews
            .list_for_artisan(artisan_id, Some(RECENT_REVIEWS_LIMIT))
            .await
            .map_err(|e| {
                error!(artisan_id = %artisan_id, error = %e, "Failed to load reviews");
                GetArtisanError::RepositoryError(e.to_string())
            })?;

        Ok(ArtisanDetails { artisan, reviews })
    }
}
