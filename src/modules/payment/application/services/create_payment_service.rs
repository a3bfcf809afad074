use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::booking::application::ports::outgoing::BookingRepository;
use crate::payment::application::domain::entities::{parse_amount, PaymentStatus};
use crate::payment::application::ports::incoming::use_cases::{
    CreatePaymentCommand, CreatePaymentError, CreatePaymentOutcome, CreatePaymentUseCase,
};
use crate::payment::application::ports::outgoing::{CreatePaymentData, PaymentRepository};

pub struct CreatePaymentService<R>
where
    R: PaymentRepository,
{
    payments: R,
    bookings: Arc<dyn BookingRepository>,
}

impl<R> CreatePaymentService<R>
where
    R: PaymentRepository,
{
    pub fn new(payments: R, bookings: Arc<dyn BookingRepository>) -> Self {
        Self { payments, bookings }
    }
}

fn repo_error(e: impl std::fmt::Display) -> CreatePaymentError {
    CreatePaymentError::RepositoryError(e.to_string())
}

#[async_trait]
impl<R> CreatePaymentUseCase for CreatePaymentService<R>
where
    R: PaymentRepository,
{
    async fn execute(
        &self,
        command: CreatePaymentCommand,
    ) -> Result<CreatePaymentOutcome, CreatePaymentError> {
        let booking = self
            .bookings
            .find_by_id(command.booking_id())
            .await
            .map_err(repo_error)?
            .ok_or(CreatePaymentError::BookingNotFound)?;

        if !booking.is_customer(command.customer_id()) {
            return Err(CreatePaymentError::NotBookingCustomer);
        }

        let existing = self
            .payments
            .list_for_booking(booking.id)
            .await
            .map_err(repo_error)?;

        if existing.iter().any(|p| p.status == PaymentStatus::Completed) {
            return Err(CreatePaymentError::AlreadyPaid);
        }

        if let Some(pending) = existing
            .into_iter()
            .find(|p| p.status == PaymentStatus::Pending)
        {
            return Ok(CreatePaymentOutcome::Existing(pending));
        }

        let amount = parse_amount(&booking.service.price)
            .filter(|amount| *amount > 0.0)
            .ok_or(CreatePaymentError::InvalidAmount)?;

        let payment = self
            .payments
            .create(CreatePaymentData {
                booking_id: booking.id,
                customer_id: booking.customer_id,
                artisan_id: booking.artisan_id,
                amount,
                method: command.method(),
            })
            .await
            .map_err(repo_error)?;

        info!(
            payment_id = %payment.id,
            booking_id = %booking.id,
            amount = payment.amount,
            method = payment.method.as_str(),
            "Payment created"
        );

        Ok(CreatePaymentOutcome::Created(payment))
    }
}
