mod booking_query;
mod booking_repository;

pub use booking_query::{
    BookingArtisanSummary, BookingCustomerSummary, BookingListFilter, BookingQuery,
    BookingQueryError, BookingView,
};
pub use booking_repository::{
    BookingRepository, BookingRepositoryError, BookingResult, CreateBookingData,
};
