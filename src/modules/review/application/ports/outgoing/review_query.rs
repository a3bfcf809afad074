use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use super::ReviewResult;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewAuthor {
    pub id: Uuid,
    pub full_name: String,
}

/// Review joined with its author's display name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewView {
    #[serde(flatten)]
    pub review: ReviewResult,
    pub customer: Option<ReviewAuthor>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReviewQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ReviewQuery: Send + Sync {
    /// Newest first. `limit` of `None` returns every review.
    async fn list_for_artisan(
        &self,
        artisan_id: Uuid,
        limit: Option<u64>,
    ) -> Result<Vec<ReviewView>, ReviewQueryError>;
}
