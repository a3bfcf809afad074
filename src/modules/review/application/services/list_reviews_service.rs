use async_trait::async_trait;
use tracing::error;
use uuid::Uuid;

use crate::review::application::ports::incoming::use_cases::{
    ListReviewsError, ListReviewsUseCase,
};
use crate::review::application::ports::outgoing::{ReviewQuery, ReviewView};

pub struct ListReviewsService<Q>
where
    Q: ReviewQuery,
{
    query: Q,
}

impl<Q> ListReviewsService<Q>
where
    Q: ReviewQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListReviewsUseCase for ListReviewsService<Q>
where
    Q: ReviewQuery,
{
    async fn execute(&self, artisan_id: Uuid) -> Result<Vec<ReviewView>, ListReviewsError> {
        self.query
            .list_for_artisan(artisan_id, None)
            .await
            .map_err(|e| {
                error!(artisan_id = %artisan_id, error = %e, "Failed to list reviews");
                ListReviewsError::RepositoryError(e.to_string())
            })
    }
}
