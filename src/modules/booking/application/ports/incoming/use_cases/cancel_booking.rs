use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Caller;
use crate::booking::application::ports::outgoing::BookingResult;

#[derive(Debug, Clone, Copy)]
pub struct CancelBookingCommand {
    pub booking_id: Uuid,
    pub caller: Caller,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CancelBookingError {
    #[error("Booking not found")]
    NotFound,

    #[error("Caller is not a participant")]
    Forbidden,

    #[error("Only pending or confirmed bookings can be cancelled")]
    NotCancellable,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CancelBookingUseCase: Send + Sync {
    async fn execute(&self, command: CancelBookingCommand)
        -> Result<BookingResult, CancelBookingError>;
}
