use async_trait::async_trait;
use uuid::Uuid;

use crate::review::application::ports::outgoing::ReviewView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListReviewsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListReviewsUseCase: Send + Sync {
    /// Every review of the artisan, newest first.
    async fn execute(&self, artisan_id: Uuid) -> Result<Vec<ReviewView>, ListReviewsError>;
}
