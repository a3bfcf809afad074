use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

use crate::admin::application::ports::incoming::use_cases::{
    AdminBookingListQuery, AdminError, ManageBookingsUseCase,
};
use crate::admin::application::ports::outgoing::{AdminStore, BookingPatch};
use crate::booking::application::ports::outgoing::{BookingQuery, BookingResult, BookingView};
use crate::shared::api::Paginated;

pub struct AdminBookingsService<S>
where
    S: AdminStore,
{
    store: S,
    bookings: Arc<dyn BookingQuery>,
}

impl<S> AdminBookingsService<S>
where
    S: AdminStore,
{
    pub fn new(store: S, bookings: Arc<dyn BookingQuery>) -> Self {
        Self { store, bookings }
    }
}

fn repo_error(e: impl std::fmt::Display) -> AdminError {
    AdminError::RepositoryError(e.to_string())
}

#[async_trait]
impl<S> ManageBookingsUseCase for AdminBookingsService<S>
where
    S: AdminStore,
{
    async fn list(
        &self,
        query: AdminBookingListQuery,
    ) -> Result<Paginated<BookingView>, AdminError> {
        let (views, total) = self
            .bookings
            .page(query.filter, query.page)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to list bookings for admin");
                repo_error(e)
            })?;

        Ok(Paginated::new(views, total, query.page))
    }

    async fn update(
        &self,
        booking_id: Uuid,
        patch: BookingPatch,
    ) -> Result<BookingResult, AdminError> {
        let booking = self
            .store
            .update_booking(booking_id, patch)
            .await
            .map_err(repo_error)?
            .ok_or(AdminError::NotFound)?;

        info!(%booking_id, status = %booking.status, "Booking edited by admin");
        Ok(booking)
    }

    async fn delete(&self, booking_id: Uuid) -> Result<(), AdminError> {
        if !self
            .store
            .delete_booking(booking_id)
            .await
            .map_err(repo_error)?
        {
            return Err(AdminError::NotFound);
        }

        info!(%booking_id, "Booking deleted by admin");
        Ok(())
    }
}
