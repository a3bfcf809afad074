use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use super::ArtisanResult;

/// Directory filters. Every field is optional and combined with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtisanListFilter {
    pub category: Option<String>,
    pub min_rating: Option<f64>,
    pub available_only: bool,
    pub city: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtisanOwnerSummary {
    pub id: Uuid,
    pub full_name: String,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub is_verified: bool,
}

/// Artisan profile joined with the public fields of its user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtisanView {
    #[serde(flatten)]
    pub artisan: ArtisanResult,
    pub user: ArtisanOwnerSummary,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ArtisanQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ArtisanQuery: Send + Sync {
    /// Sorted by rating desc, then total reviews desc.
    async fn list(&self, filter: ArtisanListFilter)
        -> Result<Vec<ArtisanView>, ArtisanQueryError>;

    async fn find_view(&self, artisan_id: Uuid)
        -> Result<Option<ArtisanView>, ArtisanQueryError>;
}
