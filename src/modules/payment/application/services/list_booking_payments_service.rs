use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::artisan::application::ports::outgoing::ArtisanRepository;
use crate::auth::application::domain::entities::{Caller, Role};
use crate::booking::application::ports::outgoing::BookingRepository;
use crate::booking::application::services::{booked_artisan, is_participant};
use crate::payment::application::ports::incoming::use_cases::{
    ListBookingPaymentsError, ListBookingPaymentsUseCase,
};
use crate::payment::application::ports::outgoing::{PaymentRepository, PaymentResult};

pub struct ListBookingPaymentsService<R>
where
    R: PaymentRepository,
{
    payments: R,
    bookings: Arc<dyn BookingRepository>,
    artisans: Arc<dyn ArtisanRepository>,
}

impl<R> ListBookingPaymentsService<R>
where
    R: PaymentRepository,
{
    pub fn new(
        payments: R,
        bookings: Arc<dyn BookingRepository>,
        artisans: Arc<dyn ArtisanRepository>,
    ) -> Self {
        Self {
            payments,
            bookings,
            artisans,
        }
    }
}

fn repo_error(e: impl std::fmt::Display) -> ListBookingPaymentsError {
    ListBookingPaymentsError::RepositoryError(e.to_string())
}

#[async_trait]
impl<R> ListBookingPaymentsUseCase for ListBookingPaymentsService<R>
where
    R: PaymentRepository,
{
    async fn execute(
        &self,
        booking_id: Uuid,
        caller: Caller,
    ) -> Result<Vec<PaymentResult>, ListBookingPaymentsError> {
        let booking = self
            .bookings
            .find_by_id(booking_id)
            .await
            .map_err(repo_error)?
            .ok_or(ListBookingPaymentsError::BookingNotFound)?;

        if caller.role != Role::Admin {
            let artisan = booked_artisan(self.artisans.as_ref(), &booking)
                .await
                .map_err(repo_error)?;
            if !is_participant(&booking, artisan.as_ref(), caller.user_id) {
                return Err(ListBookingPaymentsError::Forbidden);
            }
        }

        self.payments
            .list_for_booking(booking.id)
            .await
            .map_err(repo_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payment::application::ports::incoming::use_cases::{
        CreatePaymentCommand, CreatePaymentUseCase,
    };
    use crate::payment::application::services::CreatePaymentService;
    use crate::tests::support::fakes::{
        sample_artisan, sample_booking, InMemoryArtisanRepository, InMemoryBookings,
        InMemoryPayments,
    };

    struct Fixture {
        artisans: InMemoryArtisanRepository,
        bookings: InMemoryBookings,
        payments: InMemoryPayments,
        service: ListBookingPaymentsService<InMemoryPayments>,
    }

    fn fixture() -> Fixture {
        let artisans = InMemoryArtisanRepository::default();
        let bookings = InMemoryBookings::default();
        let payments = InMemoryPayments::default();
        let service = ListBookingPaymentsService::new(
            payments.clone(),
            Arc::new(bookings.clone()),
            Arc::new(artisans.clone()),
        );
        Fixture {
            artisans,
            bookings,
            payments,
            service,
        }
    }

    async fn paid_booking(f: &Fixture, customer: Uuid, artisan_id: Uuid) -> Uuid {
        let booking = sample_booking(customer, artisan_id);
        f.bookings.insert(booking.clone());
        CreatePaymentService::new(f.payments.clone(), Arc::new(f.bookings.clone()))
            .execute(
                CreatePaymentCommand::new(customer, Some(booking.id), Some("cash".to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        booking.id
    }

    #[tokio::test]
    async fn both_participants_and_admin_can_read() {
        let f = fixture();
        let customer = Uuid::new_v4();
        let artisan_user = Uuid::new_v4();
        let artisan = sample_artisan(artisan_user);
        f.artisans.insert(artisan.clone());
        let booking_id = paid_booking(&f, customer, artisan.id).await;

        for caller in [
            Caller { user_id: customer, role: Role::Customer },
            Caller { user_id: artisan_user, role: Role::Artisan },
            Caller { user_id: Uuid::new_v4(), role: Role::Admin },
        ] {
            let payments = f.service.execute(booking_id, caller).await.unwrap();
            assert_eq!(payments.len(), 1, "{caller:?}");
        }
    }

    #[tokio::test]
    async fn outsider_is_forbidden() {
        let f = fixture();
        let booking_id = paid_booking(&f, Uuid::new_v4(), Uuid::new_v4()).await;

        let result = f
            .service
            .execute(
                booking_id,
                Caller {
                    user_id: Uuid::new_v4(),
                    role: Role::Customer,
                },
            )
            .await;

        assert!(matches!(result, Err(ListBookingPaymentsError::Forbidden)));
    }

    #[tokio::test]
    async fn unknown_booking_is_not_found() {
        let f = fixture();

        let result = f
            .service
            .execute(
                Uuid::new_v4(),
                Caller {
                    user_id: Uuid::new_v4(),
                    role: Role::Admin,
                },
            )
            .await;

        assert!(matches!(result, Err(ListBookingPaymentsError::BookingNotFound)));
    }
}
