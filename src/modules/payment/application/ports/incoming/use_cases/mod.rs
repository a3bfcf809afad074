mod create_payment;
mod list_booking_payments;

pub use create_payment::{
    CreatePaymentCommand, CreatePaymentCommandError, CreatePaymentError, CreatePaymentOutcome,
    CreatePaymentUseCase,
};
pub use list_booking_payments::{ListBookingPaymentsError, ListBookingPaymentsUseCase};
