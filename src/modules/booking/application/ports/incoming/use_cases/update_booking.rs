use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::Caller;
use crate::booking::application::domain::entities::BookingStatus;
use crate::booking::application::ports::outgoing::BookingResult;
use crate::review::application::domain::entities::is_valid_rating;

#[derive(Debug, Clone)]
pub struct UpdateBookingCommand {
    booking_id: Uuid,
    caller: Caller,
    status: Option<BookingStatus>,
    rating: Option<i32>,
    review: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateBookingCommandError {
    #[error("Statut inconnu: {0}")]
    UnknownStatus(String),

    #[error("La note doit être entre 1 et 5")]
    InvalidRating,
}

impl UpdateBookingCommand {
    pub fn new(
        booking_id: Uuid,
        caller: Caller,
        status: Option<String>,
        rating: Option<i32>,
        review: Option<String>,
    ) -> Result<Self, UpdateBookingCommandError> {
        let status = match status.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            None => None,
            Some(value) => Some(
                value
                    .parse::<BookingStatus>()
                    .map_err(|_| UpdateBookingCommandError::UnknownStatus(value.to_string()))?,
            ),
        };

        if let Some(rating) = rating {
            if !is_valid_rating(rating) {
                return Err(UpdateBookingCommandError::InvalidRating);
            }
        }

        Ok(Self {
            booking_id,
            caller,
            status,
            rating,
            review,
        })
    }

    pub fn booking_id(&self) -> Uuid {
        self.booking_id
    }

    pub fn caller(&self) -> Caller {
        self.caller
    }

    pub fn status(&self) -> Option<BookingStatus> {
        self.status
    }

    /// Only honoured together with `status = completed`.
    pub fn rating(&self) -> Option<i32> {
        self.rating
    }

    pub fn review(&self) -> Option<&String> {
        self.review.as_ref()
    }
}

/// Artisan counters after the update, when they changed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtisanStats {
    pub completed_jobs: i32,
    pub rating: f64,
    pub total_reviews: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateBookingResult {
    pub booking: BookingResult,
    pub artisan: Option<ArtisanStats>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateBookingError {
    #[error("Booking not found")]
    NotFound,

    #[error("Caller is not a participant")]
    Forbidden,

    #[error("Cannot move booking from {from} to {to}")]
    InvalidTransition {
        from: BookingStatus,
        to: BookingStatus,
    },

    #[error("Booking already reviewed")]
    AlreadyReviewed,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateBookingUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UpdateBookingCommand,
    ) -> Result<UpdateBookingResult, UpdateBookingError>;
}
