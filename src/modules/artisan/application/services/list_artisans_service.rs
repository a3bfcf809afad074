use async_trait::async_trait;
use tracing::error;

use crate::artisan::application::ports::{
    incoming::use_cases::{ListArtisansError, ListArtisansUseCase},
    outgoing::{ArtisanListFilter, ArtisanQuery, ArtisanView},
};

pub struct ListArtisansService<Q>
where
    Q: ArtisanQuery,
{
    query: Q,
}

impl<Q> ListArtisansService<Q>
where
    Q: ArtisanQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListArtisansUseCase for ListArtisansService<Q>
where
    Q: ArtisanQuery,
{
    async fn execute(
        &self,
        filter: ArtisanListFilter,
    ) -> Result<Vec<ArtisanView>, ListArtisansError> {
        self.query.list(filter).await.map_err(|e| {
            error!(error = %e, "Artisan directory query failed");
            ListArtisansError::RepositoryError(e.to_string())
        })
    }
}
