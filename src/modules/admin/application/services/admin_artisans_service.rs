use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

use crate::admin::application::ports::incoming::use_cases::{
    AdminArtisanListQuery, AdminError, ManageArtisansUseCase,
};
use crate::admin::application::ports::outgoing::{AdminArtisanRow, AdminQuery, AdminStore};
use crate::artisan::application::ports::outgoing::{
    ArtisanRepository, ArtisanRepositoryError, UpdateArtisanData,
};
use crate::shared::api::Paginated;

pub struct AdminArtisansService<Q>
where
    Q: AdminQuery,
{
    query: Q,
    artisans: Arc<dyn ArtisanRepository>,
    store: Arc<dyn AdminStore>,
}

impl<Q> AdminArtisansService<Q>
where
    Q: AdminQuery,
{
    pub fn new(query: Q, artisans: Arc<dyn ArtisanRepository>, store: Arc<dyn AdminStore>) -> Self {
        Self {
            query,
            artisans,
            store,
        }
    }
}

fn repo_error(e: impl std::fmt::Display) -> AdminError {
    AdminError::RepositoryError(e.to_string())
}

#[async_trait]
impl<Q> ManageArtisansUseCase for AdminArtisansService<Q>
where
    Q: AdminQuery,
{
    async fn list(
        &self,
        query: AdminArtisanListQuery,
    ) -> Result<Paginated<AdminArtisanRow>, AdminError> {
        let (rows, total) = self
            .query
            .page_artisans(query.filter, query.page)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to list artisans for admin");
                repo_error(e)
            })?;

        Ok(Paginated::new(rows, total, query.page))
    }

    async fn update(
        &self,
        artisan_id: Uuid,
        data: UpdateArtisanData,
    ) -> Result<AdminArtisanRow, AdminError> {
        let approval = data.approval_status;

        self.artisans
            .update_profile(artisan_id, data)
            .await
            .map_err(|e| match e {
                ArtisanRepositoryError::ArtisanNotFound => AdminError::NotFound,
                other => repo_error(other),
            })?;

        if let Some(status) = approval {
            info!(%artisan_id, status = status.as_str(), "Artisan approval status changed");
        }

        self.query
            .find_artisan(artisan_id)
            .await
            .map_err(repo_error)?
            .ok_or(AdminError::NotFound)
    }

    async fn delete(&self, artisan_id: Uuid) -> Result<(), AdminError> {
        if !self
            .store
            .delete_artisan(artisan_id)
            .await
            .map_err(repo_error)?
        {
            return Err(AdminError::NotFound);
        }

        info!(%artisan_id, "Artisan and owning account deleted");
        Ok(())
    }
}
