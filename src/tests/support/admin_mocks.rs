use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::mock;
use std::collections::HashMap;
use uuid::Uuid;

use crate::admin::application::domain::entities::{MonthlyActivity, YearMonth};
use crate::admin::application::ports::outgoing::{
    AdminArtisanFilter, AdminArtisanRow, AdminBookingRow, AdminQuery, AdminRepositoryError,
    AdminStore, AdminUserFilter, BookingPatch, DashboardCounts, UserPatch,
};
use crate::auth::application::ports::outgoing::UserResult;
use crate::booking::application::ports::outgoing::{
    BookingListFilter, BookingQuery, BookingQueryError, BookingResult, BookingView,
};
use crate::shared::api::PageRequest;

mock! {
    pub AdminQueryPort {}

    #[async_trait]
    impl AdminQuery for AdminQueryPort {
        async fn page_artisans(&self, filter: AdminArtisanFilter, page: PageRequest) -> Result<(Vec<AdminArtisanRow>, u64), AdminRepositoryError>;
        async fn find_artisan(&self, artisan_id: Uuid) -> Result<Option<AdminArtisanRow>, AdminRepositoryError>;
        async fn page_users(&self, filter: AdminUserFilter, page: PageRequest) -> Result<(Vec<UserResult>, u64), AdminRepositoryError>;
        async fn recent_users(&self, limit: u64) -> Result<Vec<UserResult>, AdminRepositoryError>;
        async fn counts(&self, month_start: DateTime<Utc>) -> Result<DashboardCounts, AdminRepositoryError>;
        async fn monthly_activity(&self, since: DateTime<Utc>) -> Result<HashMap<YearMonth, MonthlyActivity>, AdminRepositoryError>;
        async fn users_for_export(&self) -> Result<Vec<UserResult>, AdminRepositoryError>;
        async fn artisans_for_export(&self) -> Result<Vec<AdminArtisanRow>, AdminRepositoryError>;
        async fn bookings_for_export(&self) -> Result<Vec<AdminBookingRow>, AdminRepositoryError>;
    }
}

mock! {
    pub AdminStorePort {}

    #[async_trait]
    impl AdminStore for AdminStorePort {
        async fn delete_artisan(&self, artisan_id: Uuid) -> Result<bool, AdminRepositoryError>;
        async fn update_booking(&self, booking_id: Uuid, patch: BookingPatch) -> Result<Option<BookingResult>, AdminRepositoryError>;
        async fn delete_booking(&self, booking_id: Uuid) -> Result<bool, AdminRepositoryError>;
        async fn update_user(&self, user_id: Uuid, patch: UserPatch) -> Result<Option<UserResult>, AdminRepositoryError>;
        async fn delete_user(&self, user_id: Uuid) -> Result<bool, AdminRepositoryError>;
    }
}

mock! {
    pub BookingQueryPort {}

    #[async_trait]
    impl BookingQuery for BookingQueryPort {
        async fn list(&self, filter: BookingListFilter) -> Result<Vec<BookingView>, BookingQueryError>;
        async fn page(&self, filter: BookingListFilter, page: PageRequest) -> Result<(Vec<BookingView>, u64), BookingQueryError>;
    }
}
