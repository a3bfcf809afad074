use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::artisan::application::domain::entities::{
    ApprovalStatus, Availability, PortfolioItem, ServiceOffering,
};

#[derive(Debug, Clone)]
pub struct CreateArtisanData {
    pub user_id: Uuid,
    pub bio: String,
    pub experience: i32,
    pub services: Vec<ServiceOffering>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtisanResult {
    pub id: Uuid,
    pub user_id: Uuid,
    pub bio: String,
    pub experience: i32,
    pub services: Vec<ServiceOffering>,
    pub portfolio: Vec<PortfolioItem>,
    pub availability: Availability,
    pub rating: f64,
    pub total_reviews: i32,
    pub completed_jobs: i32,
    pub is_available: bool,
    pub response_time: String,
    pub approval_status: ApprovalStatus,
    pub created_at: DateTime<Utc>,
}

/// Partial update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateArtisanData {
    pub bio: Option<String>,
    pub experience: Option<i32>,
    pub is_available: Option<bool>,
    pub services: Option<Vec<ServiceOffering>>,
    pub availability: Option<Availability>,
    pub response_time: Option<String>,
    pub approval_status: Option<ApprovalStatus>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ArtisanRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Artisan not found")]
    ArtisanNotFound,

    #[error("Artisan profile already exists for this user")]
    ProfileAlreadyExists,
}

#[async_trait]
pub trait ArtisanRepository: Send + Sync {
    async fn create_profile(
        &self,
        data: CreateArtisanData,
    ) -> Result<ArtisanResult, ArtisanRepositoryError>;

    async fn find_by_id(
        &self,
        artisan_id: Uuid,
    ) -> Result<Option<ArtisanResult>, ArtisanRepositoryError>;

    async fn find_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<ArtisanResult>, ArtisanRepositoryError>;

    async fn update_profile(
        &self,
        artisan_id: Uuid,
        data: UpdateArtisanData,
    ) -> Result<ArtisanResult, ArtisanRepositoryError>;

    async fn increment_completed_jobs(
        &self,
        artisan_id: Uuid,
    ) -> Result<ArtisanResult, ArtisanRepositoryError>;

    async fn update_rating(
        &self,
        artisan_id: Uuid,
        rating: f64,
        total_reviews: i32,
    ) -> Result<ArtisanResult, ArtisanRepositoryError>;
}
