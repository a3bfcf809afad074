mod create_payment_service;
mod list_booking_payments_service;

pub use create_payment_service::CreatePaymentService;
pub use list_booking_payments_service::ListBookingPaymentsService;
