use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::artisan::application::ports::outgoing::ArtisanRepository;
use crate::auth::application::ports::outgoing::UserRepository;
use crate::booking::application::ports::incoming::use_cases::{
    CreateBookingCommand, CreateBookingError, CreateBookingUseCase,
};
use crate::booking::application::ports::outgoing::{
    BookingRepository, BookingResult, CreateBookingData,
};
use crate::notification::application::domain::entities::{NotificationData, NotificationEvent};
use crate::notification::application::ports::incoming::use_cases::NotifyUserUseCase;

pub struct CreateBookingService<R>
where
    R: BookingRepository,
{
    bookings: R,
    artisans: Arc<dyn ArtisanRepository>,
    users: Arc<dyn UserRepository>,
    notifier: Arc<dyn NotifyUserUseCase>,
}

impl<R> CreateBookingService<R>
where
    R: BookingRepository,
{
    pub fn new(
        bookings: R,
        artisans: Arc<dyn ArtisanRepository>,
        users: Arc<dyn UserRepository>,
        notifier: Arc<dyn NotifyUserUseCase>,
    ) -> Self {
        Self {
            bookings,
            artisans,
            users,
            notifier,
        }
    }
}

#[async_trait]
impl<R> CreateBookingUseCase for CreateBookingService<R>
where
    R: BookingRepository,
{
    async fn execute(
        &self,
        command: CreateBookingCommand,
    ) -> Result<BookingResult, CreateBookingError> {
        let artisan = self
            .artisans
            .find_by_id(command.artisan_id())
            .await
            .map_err(|e| CreateBookingError::RepositoryError(e.to_string()))?
            .ok_or(CreateBookingError::ArtisanNotFound)?;

        let booking = self
            .bookings
            .create(CreateBookingData {
                customer_id: command.customer_id(),
                artisan_id: artisan.id,
                service: command.service().clone(),
                date: command.date(),
                time: command.time().to_string(),
                address: command.address().to_string(),
                description: command.description().to_string(),
                urgency: command.urgency(),
            })
            .await
            .map_err(|e| CreateBookingError::RepositoryError(e.to_string()))?;

        info!(
            booking_id = %booking.id,
            customer_id = %booking.customer_id,
            artisan_id = %booking.artisan_id,
            "Booking created"
        );

        let customer_name = match self.users.find_by_id(booking.customer_id).await {
            Ok(Some(user)) => user.full_name,
            Ok(None) => "Un client".to_string(),
            Err(e) => {
                warn!(customer_id = %booking.customer_id, error = %e, "Customer lookup failed");
                "Un client".to_string()
            }
        };

        self.notifier
            .notify(
                artisan.user_id,
                NotificationEvent::BookingNew {
                    customer_name,
                    service_name: booking.service.name.clone(),
                },
                NotificationData::booking(booking.id).with_customer(booking.customer_id),
            )
            .await;

        Ok(booking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::Role;
    use crate::booking::application::domain::entities::{BookingStatus, ServiceSnapshot};
    use crate::booking::application::ports::incoming::use_cases::CreateBookingInput;
    use crate::notification::application::domain::entities::NotificationType;
    use crate::tests::support::fakes::{
        sample_artisan, sample_user, InMemoryArtisanRepository, InMemoryBookings,
        InMemoryUserRepository, RecordingNotifier,
    };
    use uuid::Uuid;

    fn command(customer_id: Uuid, artisan_id: Uuid) -> CreateBookingCommand {
        CreateBookingCommand::new(
            customer_id,
            CreateBookingInput {
                artisan_id: Some(artisan_id),
                service: Some(ServiceSnapshot {
                    category: "plumbing".into(),
                    name: "Plomberie".into(),
                    price: "150-300 MAD/h".into(),
                }),
                date: Some("2026-11-05".into()),
                time: Some("14:00".into()),
                address: Some("Maârif, Casablanca".into()),
                description: Some("Fuite sous l'évier".into()),
                urgency: Some("urgent".into()),
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn creates_pending_booking_and_notifies_artisan() {
        // Arrange
        let users = InMemoryUserRepository::default();
        let mut customer = sample_user("nadia@example.ma", Role::Customer, true);
        customer.full_name = "Nadia".into();
        users.insert(customer.clone(), "hash".into());
        let artisan_user = Uuid::new_v4();
        let artisans = InMemoryArtisanRepository::default();
        let artisan = sample_artisan(artisan_user);
        artisans.insert(artisan.clone());
        let bookings = InMemoryBookings::default();
        let notifier = RecordingNotifier::default();
        let service = CreateBookingService::new(
            bookings.clone(),
            Arc::new(artisans),
            Arc::new(users),
            Arc::new(notifier.clone()),
        );

        // Act
        let booking = service.execute(command(customer.id, artisan.id)).await.unwrap();

        // Assert
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(bookings.all().len(), 1);
        let events = notifier.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0, artisan_user);
        assert_eq!(events[0].1.kind(), NotificationType::BookingNew);
        assert_eq!(events[0].1.message(), "Nadia a demandé un service de Plomberie");
        assert_eq!(events[0].2.booking_id, Some(booking.id));
    }

    #[tokio::test]
    async fn unknown_artisan_is_not_found() {
        let bookings = InMemoryBookings::default();
        let service = CreateBookingService::new(
            bookings.clone(),
            Arc::new(InMemoryArtisanRepository::default()),
            Arc::new(InMemoryUserRepository::default()),
            Arc::new(RecordingNotifier::default()),
        );

        let result = service.execute(command(Uuid::new_v4(), Uuid::new_v4())).await;

        assert!(matches!(result, Err(CreateBookingError::ArtisanNotFound)));
        assert!(bookings.all().is_empty());
    }
}
