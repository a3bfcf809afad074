use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::auth::application::domain::entities::Role;
use crate::auth::application::ports::outgoing::UserResult;
use crate::booking::application::domain::entities::BookingStatus;
use crate::booking::application::ports::outgoing::BookingResult;

use super::AdminRepositoryError;

/// Status is written as given; the participant lifecycle does not apply here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingPatch {
    pub status: Option<BookingStatus>,
    pub total_price: Option<f64>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub role: Option<Role>,
    pub is_verified: Option<bool>,
}

/// Write side of the back office. `None`/`false` means the row did not exist.
#[async_trait]
pub trait AdminStore: Send + Sync {
    /// Removes the profile together with its user account.
    async fn delete_artisan(&self, artisan_id: Uuid) -> Result<bool, AdminRepositoryError>;

    async fn update_booking(
        &self,
        booking_id: Uuid,
        patch: BookingPatch,
    ) -> Result<Option<BookingResult>, AdminRepositoryError>;

    async fn delete_booking(&self, booking_id: Uuid) -> Result<bool, AdminRepositoryError>;

    async fn update_user(
        &self,
        user_id: Uuid,
        patch: UserPatch,
    ) -> Result<Option<UserResult>, AdminRepositoryError>;

    /// Removes the user's artisan profile first, if any.
    async fn delete_user(&self, user_id: Uuid) -> Result<bool, AdminRepositoryError>;
}
