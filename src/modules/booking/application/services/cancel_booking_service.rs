use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::artisan::application::ports::outgoing::ArtisanRepository;
use crate::booking::application::domain::entities::BookingStatus;
use crate::booking::application::ports::incoming::use_cases::{
    CancelBookingCommand, CancelBookingError, CancelBookingUseCase,
};
use crate::booking::application::ports::outgoing::{BookingRepository, BookingResult};

use super::participants::{booked_artisan, is_participant};

pub struct CancelBookingService<R>
where
    R: BookingRepository,
{
    bookings: R,
    artisans: Arc<dyn ArtisanRepository>,
}

impl<R> CancelBookingService<R>
where
    R: BookingRepository,
{
    pub fn new(bookings: R, artisans: Arc<dyn ArtisanRepository>) -> Self {
        Self { bookings, artisans }
    }
}

fn repo_error(e: impl std::fmt::Display) -> CancelBookingError {
    CancelBookingError::RepositoryError(e.to_string())
}

#[async_trait]
impl<R> CancelBookingUseCase for CancelBookingService<R>
where
    R: BookingRepository,
{
    async fn execute(
        &self,
        command: CancelBookingCommand,
    ) -> Result<BookingResult, CancelBookingError> {
        let booking = self
            .bookings
            .find_by_id(command.booking_id)
            .await
            .map_err(repo_error)?
            .ok_or(CancelBookingError::NotFound)?;

        let artisan = booked_artisan(self.artisans.as_ref(), &booking)
            .await
            .map_err(repo_error)?;
        if !is_participant(&booking, artisan.as_ref(), command.caller.user_id) {
            return Err(CancelBookingError::Forbidden);
        }

        if !booking.status.is_cancellable() {
            return Err(CancelBookingError::NotCancellable);
        }

        let cancelled = self
            .bookings
            .update_status(booking.id, BookingStatus::Cancelled)
            .await
            .map_err(repo_error)?;

        info!(booking_id = %booking.id, user_id = %command.caller.user_id, "Booking cancelled");
        Ok(cancelled)
    }
}
