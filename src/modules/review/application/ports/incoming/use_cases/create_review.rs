use async_trait::async_trait;
use uuid::Uuid;

use crate::review::application::domain::entities::is_valid_rating;
use crate::review::application::ports::outgoing::ReviewResult;

#[derive(Debug, Clone)]
pub struct CreateReviewCommand {
    customer_id: Uuid,
    booking_id: Uuid,
    rating: i32,
    comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateReviewCommandError {
    #[error("Tous les champs sont requis")]
    MissingFields,

    #[error("La note doit être entre 1 et 5")]
    InvalidRating,
}

impl CreateReviewCommand {
    pub fn new(
        customer_id: Uuid,
        booking_id: Option<Uuid>,
        rating: Option<i32>,
        comment: Option<String>,
    ) -> Result<Self, CreateReviewCommandError> {
        let comment = comment
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        let (Some(booking_id), Some(rating), Some(comment)) = (booking_id, rating, comment) else {
            return Err(CreateReviewCommandError::MissingFields);
        };

        if !is_valid_rating(rating) {
            return Err(CreateReviewCommandError::InvalidRating);
        }

        Ok(Self {
            customer_id,
            booking_id,
            rating,
            comment,
        })
    }

    pub fn customer_id(&self) -> Uuid {
        self.customer_id
    }

    pub fn booking_id(&self) -> Uuid {
        self.booking_id
    }

    pub fn rating(&self) -> i32 {
        self.rating
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateReviewError {
    #[error("Booking not found")]
    BookingNotFound,

    #[error("Caller is not the booking's customer")]
    NotBookingCustomer,

    #[error("Booking is not completed")]
    BookingNotCompleted,

    #[error("Booking already reviewed")]
    AlreadyReviewed,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateReviewUseCase: Send + Sync {
    async fn execute(&self, command: CreateReviewCommand)
        -> Result<ReviewResult, CreateReviewError>;
}
