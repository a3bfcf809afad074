use std::sync::Arc;

use crate::payment::application::ports::incoming::use_cases::{
    CreatePaymentUseCase, ListBookingPaymentsUseCase,
};

#[derive(Clone)]
pub struct PaymentUseCases {
    pub create: Arc<dyn CreatePaymentUseCase + Send + Sync>,
    pub list_for_booking: Arc<dyn ListBookingPaymentsUseCase + Send + Sync>,
}
