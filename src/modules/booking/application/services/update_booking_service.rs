use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::artisan::application::ports::outgoing::{ArtisanRepository, ArtisanResult};
use crate::auth::application::domain::entities::Role;
use crate::auth::application::ports::outgoing::{UserRepository, UserResult};
use crate::booking::application::domain::entities::BookingStatus;
use crate::booking::application::ports::incoming::use_cases::{
    ArtisanStats, UpdateBookingCommand, UpdateBookingError, UpdateBookingResult,
    UpdateBookingUseCase,
};
use crate::booking::application::ports::outgoing::{BookingRepository, BookingResult};
use crate::email::application::ports::outgoing::{
    BookingEmail, BookingEmailKind, UserEmailNotifier,
};
use crate::notification::application::domain::entities::{NotificationData, NotificationEvent};
use crate::notification::application::ports::incoming::use_cases::NotifyUserUseCase;
use crate::review::application::ports::outgoing::{
    CreateReviewData, ReviewRepository, ReviewRepositoryError,
};
use crate::review::application::services::RatingRecalculator;

use super::participants::{booked_artisan, is_participant};

const FALLBACK_ARTISAN_NAME: &str = "Artisan";
const FALLBACK_CUSTOMER_NAME: &str = "Client";

/// Participant-driven booking updates: status moves, completion side effects and
/// the optional rating left when marking a booking completed.
pub struct UpdateBookingService<R>
where
    R: BookingRepository,
{
    bookings: R,
    artisans: Arc<dyn ArtisanRepository>,
    users: Arc<dyn UserRepository>,
    reviews: Arc<dyn ReviewRepository>,
    ratings: RatingRecalculator,
    notifier: Arc<dyn NotifyUserUseCase>,
    emails: Arc<dyn UserEmailNotifier>,
}

impl<R> UpdateBookingService<R>
where
    R: BookingRepository,
{
    pub fn new(
        bookings: R,
        artisans: Arc<dyn ArtisanRepository>,
        users: Arc<dyn UserRepository>,
        reviews: Arc<dyn ReviewRepository>,
        ratings: RatingRecalculator,
        notifier: Arc<dyn NotifyUserUseCase>,
        emails: Arc<dyn UserEmailNotifier>,
    ) -> Self {
        Self {
            bookings,
            artisans,
            users,
            reviews,
            ratings,
            notifier,
            emails,
        }
    }

    async fn user(&self, user_id: Uuid) -> Option<UserResult> {
        match self.users.find_by_id(user_id).await {
            Ok(user) => user,
            Err(e) => {
                warn!(user_id = %user_id, error = %e, "User lookup failed");
                None
            }
        }
    }

    async fn send_email(
        &self,
        to: &UserResult,
        booking: &BookingResult,
        kind: BookingEmailKind,
        artisan_name: Option<String>,
        message: Option<String>,
    ) {
        let email = BookingEmail {
            to_email: to.email.clone(),
            to_name: to.full_name.clone(),
            kind,
            service_name: booking.service.name.clone(),
            booking_date: booking.date.format("%d/%m/%Y").to_string(),
            booking_time: booking.time.clone(),
            artisan_name,
            message,
        };

        if let Err(e) = self.emails.send_booking_update(email).await {
            warn!(booking_id = %booking.id, to = %to.email, error = %e, "Booking email not sent");
        }
    }

    /// Notifications and mails for a status change. Failures never abort the update.
    async fn announce(
        &self,
        booking: &BookingResult,
        artisan: Option<&ArtisanResult>,
        caller_role: Role,
    ) {
        let customer = self.user(booking.customer_id).await;
        let artisan_user = match artisan {
            Some(a) => self.user(a.user_id).await,
            None => None,
        };
        let artisan_name = artisan_user
            .as_ref()
            .map(|u| u.full_name.clone())
            .unwrap_or_else(|| FALLBACK_ARTISAN_NAME.to_string());
        let data = NotificationData::booking(booking.id).with_artisan(booking.artisan_id);

        match booking.status {
            BookingStatus::Confirmed | BookingStatus::Completed => {
                let Some(customer) = customer else { return };
                let (event, kind) = if booking.status == BookingStatus::Confirmed {
                    (
                        NotificationEvent::BookingConfirmed {
                            artisan_name: artisan_name.clone(),
                        },
                        BookingEmailKind::Confirmed,
                    )
                } else {
                    (
                        NotificationEvent::BookingCompleted {
                            artisan_name: artisan_name.clone(),
                        },
                        BookingEmailKind::Completed,
                    )
                };
                self.notifier.notify(customer.id, event, data).await;
                self.send_email(&customer, booking, kind, Some(artisan_name), None)
                    .await;
            }
            BookingStatus::Cancelled => {
                let by_artisan = caller_role == Role::Artisan;
                let (recipient, canceller_name) = if by_artisan {
                    (customer, artisan_name)
                } else {
                    let name = customer
                        .as_ref()
                        .map(|c| c.full_name.clone())
                        .unwrap_or_else(|| FALLBACK_CUSTOMER_NAME.to_string());
                    (artisan_user, name)
                };
                let Some(recipient) = recipient else { return };

                self.notifier
                    .notify(
                        recipient.id,
                        NotificationEvent::BookingCancelled {
                            canceller_name: canceller_name.clone(),
                            by_artisan,
                        },
                        NotificationData::booking(booking.id),
                    )
                    .await;
                self.send_email(
                    &recipient,
                    booking,
                    BookingEmailKind::Cancelled,
                    None,
                    Some(format!("La réservation a été annulée par {canceller_name}")),
                )
                .await;
            }
            BookingStatus::Pending | BookingStatus::InProgress => {}
        }
    }

    async fn record_rating(
        &self,
        booking: &BookingResult,
        rating: i32,
        review: Option<String>,
    ) -> Result<(BookingResult, ArtisanResult), UpdateBookingError> {
        self.reviews
            .create(CreateReviewData {
                booking_id: booking.id,
                customer_id: booking.customer_id,
                artisan_id: booking.artisan_id,
                rating,
                comment: review.clone().unwrap_or_default(),
            })
            .await
            .map_err(|e| match e {
                ReviewRepositoryError::AlreadyExists => UpdateBookingError::AlreadyReviewed,
                other => repo_error(other),
            })?;

        let booking = self
            .bookings
            .set_review(booking.id, rating, review)
            .await
            .map_err(repo_error)?;

        let artisan = self
            .ratings
            .recalculate(booking.artisan_id)
            .await
            .map_err(|e| {
                error!(artisan_id = %booking.artisan_id, error = %e, "Failed to recalculate artisan rating");
                repo_error(e)
            })?;

        Ok((booking, artisan))
    }
}

fn repo_error(e: impl std::fmt::Display) -> UpdateBookingError {
    UpdateBookingError::RepositoryError(e.to_string())
}

fn stats(artisan: &ArtisanResult) -> ArtisanStats {
    ArtisanStats {
        completed_jobs: artisan.completed_jobs,
        rating: artisan.rating,
        total_reviews: artisan.total_reviews,
    }
}

#[async_trait]
impl<R> UpdateBookingUseCase for UpdateBookingService<R>
where
    R: BookingRepository,
{
    async fn execute(
        &self,
        command: UpdateBookingCommand,
    ) -> Result<UpdateBookingResult, UpdateBookingError> {
        let caller = command.caller();
        let mut booking = self
            .bookings
            .find_by_id(command.booking_id())
            .await
            .map_err(repo_error)?
            .ok_or(UpdateBookingError::NotFound)?;

        let artisan = booked_artisan(self.artisans.as_ref(), &booking)
            .await
            .map_err(repo_error)?;
        if !is_participant(&booking, artisan.as_ref(), caller.user_id) {
            return Err(UpdateBookingError::Forbidden);
        }

        let mut updated_artisan: Option<ArtisanResult> = None;

        if let Some(next) = command.status().filter(|s| *s != booking.status) {
            if !booking.status.can_transition_to(next) {
                return Err(UpdateBookingError::InvalidTransition {
                    from: booking.status,
                    to: next,
                });
            }

            let previous = booking.status;
            booking = self
                .bookings
                .update_status(booking.id, next)
                .await
                .map_err(repo_error)?;

            info!(
                booking_id = %booking.id,
                user_id = %caller.user_id,
                from = %previous,
                to = %next,
                "Booking status changed"
            );

            if next == BookingStatus::Completed {
                updated_artisan = Some(
                    self.artisans
                        .increment_completed_jobs(booking.artisan_id)
                        .await
                        .map_err(repo_error)?,
                );
            }

            self.announce(&booking, artisan.as_ref(), caller.role).await;
        }

        if let (Some(rating), Some(BookingStatus::Completed)) = (command.rating(), command.status()) {
            let (reviewed, artisan) = self
                .record_rating(&booking, rating, command.review().cloned())
                .await?;
            booking = reviewed;
            updated_artisan = Some(artisan);
        }

        Ok(UpdateBookingResult {
            booking,
            artisan: updated_artisan.as_ref().map(stats),
        })
    }
}
