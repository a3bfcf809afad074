use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::artisan::application::ports::outgoing::ArtisanRepository;
use crate::auth::application::ports::outgoing::UserRepository;
use crate::booking::application::domain::entities::BookingStatus;
use crate::booking::application::ports::outgoing::BookingRepository;
use crate::notification::application::domain::entities::{NotificationData, NotificationEvent};
use crate::notification::application::ports::incoming::use_cases::NotifyUserUseCase;
use crate::review::application::ports::incoming::use_cases::{
    CreateReviewCommand, CreateReviewError, CreateReviewUseCase,
};
use crate::review::application::ports::outgoing::{
    CreateReviewData, ReviewRepository, ReviewRepositoryError, ReviewResult,
};

use super::RatingRecalculator;

pub struct CreateReviewService<R>
where
    R: ReviewRepository,
{
    reviews: R,
    bookings: Arc<dyn BookingRepository>,
    artisans: Arc<dyn ArtisanRepository>,
    users: Arc<dyn UserRepository>,
    notifier: Arc<dyn NotifyUserUseCase>,
    ratings: RatingRecalculator,
}

impl<R> CreateReviewService<R>
where
    R: ReviewRepository,
{
    pub fn new(
        reviews: R,
        bookings: Arc<dyn BookingRepository>,
        artisans: Arc<dyn ArtisanRepository>,
        users: Arc<dyn UserRepository>,
        notifier: Arc<dyn NotifyUserUseCase>,
        ratings: RatingRecalculator,
    ) -> Self {
        Self {
            reviews,
            bookings,
            artisans,
            users,
            notifier,
            ratings,
        }
    }

    async fn notify_artisan(&self, review: &ReviewResult) {
        let artisan = match self.artisans.find_by_id(review.artisan_id).await {
            Ok(Some(a)) => a,
            Ok(None) => return,
            Err(e) => {
                warn!(artisan_id = %review.artisan_id, error = %e, "Artisan lookup failed, review notification skipped");
                return;
            }
        };

        let customer_name = match self.users.find_by_id(review.customer_id).await {
            Ok(Some(u)) => u.full_name,
            _ => "Un client".to_string(),
        };

        self.notifier
            .notify(
                artisan.user_id,
                NotificationEvent::ReviewReceived {
                    customer_name,
                    rating: review.rating,
                },
                NotificationData::booking(review.booking_id).with_customer(review.customer_id),
            )
            .await;
    }
}

fn repo_error(e: impl std::fmt::Display) -> CreateReviewError {
    CreateReviewError::RepositoryError(e.to_string())
}

#[async_trait]
impl<R> CreateReviewUseCase for CreateReviewService<R>
where
    R: ReviewRepository,
{
    async fn execute(
        &self,
        command: CreateReviewCommand,
    ) -> Result<ReviewResult, CreateReviewError> {
        let booking = self
            .bookings
            .find_by_id(command.booking_id())
            .await
            .map_err(repo_error)?
            .ok_or(CreateReviewError::BookingNotFound)?;

        if !booking.is_customer(command.customer_id()) {
            return Err(CreateReviewError::NotBookingCustomer);
        }

        if booking.status != BookingStatus::Completed {
            return Err(CreateReviewError::BookingNotCompleted);
        }

        if self
            .reviews
            .find_by_booking(booking.id)
            .await
            .map_err(repo_error)?
            .is_some()
        {
            return Err(CreateReviewError::AlreadyReviewed);
        }

        let review = self
            .reviews
            .create(CreateReviewData {
                booking_id: booking.id,
                customer_id: command.customer_id(),
                artisan_id: booking.artisan_id,
                rating: command.rating(),
                comment: command.comment().to_string(),
            })
            .await
            .map_err(|e| match e {
                ReviewRepositoryError::AlreadyExists => CreateReviewError::AlreadyReviewed,
                other => repo_error(other),
            })?;

        info!(
            review_id = %review.id,
            booking_id = %booking.id,
            artisan_id = %booking.artisan_id,
            rating = review.rating,
            "Review created"
        );

        if let Err(e) = self.ratings.recalculate(booking.artisan_id).await {
            error!(artisan_id = %booking.artisan_id, error = %e, "Failed to recalculate artisan rating");
            return Err(repo_error(e));
        }

        self.bookings
            .set_review(booking.id, review.rating, Some(review.comment.clone()))
            .await
            .map_err(repo_error)?;

        self.notify_artisan(&review).await;

        Ok(review)
    }
}
