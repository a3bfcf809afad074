use async_trait::async_trait;
use uuid::Uuid;

use crate::payment::application::domain::entities::PaymentMethod;
use crate::payment::application::ports::outgoing::PaymentResult;

#[derive(Debug, Clone)]
pub struct CreatePaymentCommand {
    customer_id: Uuid,
    booking_id: Uuid,
    method: PaymentMethod,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreatePaymentCommandError {
    #[error("Réservation et méthode de paiement requises")]
    MissingFields,

    #[error("Méthode de paiement inconnue")]
    UnknownMethod,
}

impl CreatePaymentCommand {
    pub fn new(
        customer_id: Uuid,
        booking_id: Option<Uuid>,
        method: Option<String>,
    ) -> Result<Self, CreatePaymentCommandError> {
        let booking_id = booking_id.ok_or(CreatePaymentCommandError::MissingFields)?;
        let method = method
            .map(|m| m.trim().to_lowercase())
            .filter(|m| !m.is_empty())
            .ok_or(CreatePaymentCommandError::MissingFields)?;
        let method = PaymentMethod::parse(&method).ok_or(CreatePaymentCommandError::UnknownMethod)?;

        Ok(Self {
            customer_id,
            booking_id,
            method,
        })
    }

    pub fn customer_id(&self) -> Uuid {
        self.customer_id
    }

    pub fn booking_id(&self) -> Uuid {
        self.booking_id
    }

    pub fn method(&self) -> PaymentMethod {
        self.method
    }
}

/// A pending payment is reused rather than duplicated.
#[derive(Debug, Clone, PartialEq)]
pub enum CreatePaymentOutcome {
    Created(PaymentResult),
    Existing(PaymentResult),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreatePaymentError {
    #[error("Booking not found")]
    BookingNotFound,

    #[error("Caller is not the booking's customer")]
    NotBookingCustomer,

    #[error("Booking already paid")]
    AlreadyPaid,

    #[error("Service price has no positive amount")]
    InvalidAmount,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreatePaymentUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreatePaymentCommand,
    ) -> Result<CreatePaymentOutcome, CreatePaymentError>;
}
