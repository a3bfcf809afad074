mod cancel_booking;
mod create_booking;
mod list_bookings;
mod update_booking;

pub use cancel_booking::{CancelBookingCommand, CancelBookingError, CancelBookingUseCase};
pub use create_booking::{
    CreateBookingCommand, CreateBookingCommandError, CreateBookingError, CreateBookingInput,
    CreateBookingUseCase,
};
pub use list_bookings::{
    ListBookingsError, ListBookingsQuery, ListBookingsQueryError, ListBookingsUseCase,
};
pub use update_booking::{
    ArtisanStats, UpdateBookingCommand, UpdateBookingCommandError, UpdateBookingError,
    UpdateBookingResult, UpdateBookingUseCase,
};
