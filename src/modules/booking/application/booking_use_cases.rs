use std::sync::Arc;

use crate::booking::application::ports::incoming::use_cases::{
    CancelBookingUseCase, CreateBookingUseCase, ListBookingsUseCase, UpdateBookingUseCase,
};

#[derive(Clone)]
pub struct BookingUseCases {
    pub list: Arc<dyn ListBookingsUseCase + Send + Sync>,
    pub create: Arc<dyn CreateBookingUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateBookingUseCase + Send + Sync>,
    pub cancel: Arc<dyn CancelBookingUseCase + Send + Sync>,
}
