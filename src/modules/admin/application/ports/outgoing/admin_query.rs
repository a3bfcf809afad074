use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

use crate::admin::application::domain::entities::{MonthlyActivity, YearMonth};
use crate::artisan::application::domain::entities::ApprovalStatus;
use crate::artisan::application::ports::outgoing::ArtisanResult;
use crate::auth::application::domain::entities::Role;
use crate::auth::application::ports::outgoing::UserResult;
use crate::booking::application::ports::outgoing::BookingResult;
use crate::shared::api::PageRequest;

use super::AdminRepositoryError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminArtisanFilter {
    pub status: Option<ApprovalStatus>,
    /// Matches the owner's name or any service name, case-insensitively.
    pub search: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminUserFilter {
    pub role: Option<Role>,
    /// Matches the name or the email, case-insensitively.
    pub search: Option<String>,
}

/// An artisan profile with its owning account, if that still exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminArtisanRow {
    #[serde(flatten)]
    pub artisan: ArtisanResult,
    pub user: Option<UserResult>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdminBookingRow {
    pub booking: BookingResult,
    pub customer: Option<UserResult>,
    pub artisan_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCounts {
    pub total_users: u64,
    pub total_artisans: u64,
    pub total_bookings: u64,
    pub pending_bookings: u64,
    pub completed_bookings: u64,
    pub total_revenue: f64,
    pub new_users_this_month: u64,
    pub new_artisans_this_month: u64,
}

/// Read side of the back office. Admin accounts never appear in user listings.
#[async_trait]
pub trait AdminQuery: Send + Sync {
    async fn page_artisans(
        &self,
        filter: AdminArtisanFilter,
        page: PageRequest,
    ) -> Result<(Vec<AdminArtisanRow>, u64), AdminRepositoryError>;

    async fn find_artisan(
        &self,
        artisan_id: Uuid,
    ) -> Result<Option<AdminArtisanRow>, AdminRepositoryError>;

    async fn page_users(
        &self,
        filter: AdminUserFilter,
        page: PageRequest,
    ) -> Result<(Vec<UserResult>, u64), AdminRepositoryError>;

    async fn recent_users(&self, limit: u64) -> Result<Vec<UserResult>, AdminRepositoryError>;

    /// Totals over the whole store; the "this month" figures count from `month_start`.
    async fn counts(
        &self,
        month_start: DateTime<Utc>,
    ) -> Result<DashboardCounts, AdminRepositoryError>;

    /// Bookings created since `since`, grouped by month, with completed revenue.
    async fn monthly_activity(
        &self,
        since: DateTime<Utc>,
    ) -> Result<HashMap<YearMonth, MonthlyActivity>, AdminRepositoryError>;

    async fn users_for_export(&self) -> Result<Vec<UserResult>, AdminRepositoryError>;

    async fn artisans_for_export(&self) -> Result<Vec<AdminArtisanRow>, AdminRepositoryError>;

    async fn bookings_for_export(&self) -> Result<Vec<AdminBookingRow>, AdminRepositoryError>;
}
