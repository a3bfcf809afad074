mod cancel_booking;
mod create_booking;
mod list_bookings;
mod update_booking;

pub use cancel_booking::*;
pub use create_booking::*;
pub use list_bookings::*;
pub use update_booking::*;
