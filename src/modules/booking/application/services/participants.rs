use uuid::Uuid;

use crate::artisan::application::ports::outgoing::{
    ArtisanRepository, ArtisanRepositoryError, ArtisanResult,
};
use crate::booking::application::ports::outgoing::BookingResult;

/// The artisan profile a booking points at, if it still exists.
pub(crate) async fn booked_artisan(
    artisans: &dyn ArtisanRepository,
    booking: &BookingResult,
) -> Result<Option<ArtisanResult>, ArtisanRepositoryError> {
    artisans.find_by_id(booking.artisan_id).await
}

/// True for the booking's customer and for the user behind the booked artisan.
pub(crate) fn is_participant(
    booking: &BookingResult,
    artisan: Option<&ArtisanResult>,
    user_id: Uuid,
) -> bool {
    booking.is_customer(user_id) || artisan.is_some_and(|a| a.user_id == user_id)
}
