use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::artisan::application::ports::outgoing::{
    ArtisanRepository, ArtisanRepositoryError, ArtisanResult,
};
use crate::review::application::domain::entities::average_rating;
use crate::review::application::ports::outgoing::{ReviewRepository, ReviewRepositoryError};

#[derive(Debug, thiserror::Error)]
pub enum RatingRecalculationError {
    #[error(transparent)]
    Reviews(#[from] ReviewRepositoryError),

    #[error(transparent)]
    Artisans(#[from] ArtisanRepositoryError),
}

/// Rewrites an artisan's aggregate rating from the reviews currently stored.
/// Not transactional: a review landing in between is picked up by the next run.
#[derive(Clone)]
pub struct RatingRecalculator {
    reviews: Arc<dyn ReviewRepository>,
    artisans: Arc<dyn ArtisanRepository>,
}

impl RatingRecalculator {
    pub fn new(reviews: Arc<dyn ReviewRepository>, artisans: Arc<dyn ArtisanRepository>) -> Self {
        Self { reviews, artisans }
    }

    pub async fn recalculate(
        &self,
        artisan_id: Uuid,
    ) -> Result<ArtisanResult, RatingRecalculationError> {
        let ratings = self.reviews.ratings_for_artisan(artisan_id).await?;
        let rating = average_rating(&ratings);
        let total = i32::try_from(ratings.len()).unwrap_or(i32::MAX);

        let artisan = self
            .artisans
            .update_rating(artisan_id, rating, total)
            .await?;

        info!(artisan_id = %artisan_id, rating, total_reviews = total, "Artisan rating recalculated");
        Ok(artisan)
    }
}
