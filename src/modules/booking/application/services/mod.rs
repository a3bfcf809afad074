mod cancel_booking_service;
mod create_booking_service;
mod list_bookings_service;
mod participants;
mod update_booking_service;

pub use cancel_booking_service::CancelBookingService;
pub use create_booking_service::CreateBookingService;
pub use list_bookings_service::ListBookingsService;
pub use update_booking_service::UpdateBookingService;

pub(crate) use participants::{booked_artisan, is_participant};
