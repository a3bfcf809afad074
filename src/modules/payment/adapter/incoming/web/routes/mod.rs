mod create_payment;
mod list_booking_payments;

pub use create_payment::*;
pub use list_booking_payments::*;
