use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Caller;
use crate::payment::application::ports::outgoing::PaymentResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListBookingPaymentsError {
    #[error("Booking not found")]
    BookingNotFound,

    #[error("Caller is neither a participant nor an admin")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListBookingPaymentsUseCase: Send + Sync {
    async fn execute(
        &self,
        booking_id: Uuid,
        caller: Caller,
    ) -> Result<Vec<PaymentResult>, ListBookingPaymentsError>;
}
