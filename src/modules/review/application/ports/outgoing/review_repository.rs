use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateReviewData {
    pub booking_id: Uuid,
    pub customer_id: Uuid,
    pub artisan_id: Uuid,
    pub rating: i32,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResult {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub customer_id: Uuid,
    pub artisan_id: Uuid,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReviewRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Booking already reviewed")]
    AlreadyExists,
}

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn create(&self, data: CreateReviewData) -> Result<ReviewResult, ReviewRepositoryError>;

    async fn find_by_booking(
        &self,
        booking_id: Uuid,
    ) -> Result<Option<ReviewResult>, ReviewRepositoryError>;

    /// Every rating the artisan has received.
    async fn ratings_for_artisan(&self, artisan_id: Uuid)
        -> Result<Vec<i32>, ReviewRepositoryError>;
}
