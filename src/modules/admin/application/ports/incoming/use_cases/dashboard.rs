use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::admin::application::domain::entities::ChartData;
use crate::admin::application::ports::outgoing::DashboardCounts;
use crate::auth::application::ports::outgoing::UserResult;
use crate::booking::application::ports::outgoing::BookingView;

use super::AdminError;

pub const RECENT_ITEMS: u64 = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub stats: DashboardCounts,
    pub recent_bookings: Vec<BookingView>,
    pub recent_users: Vec<UserResult>,
    pub chart_data: ChartData,
}

#[async_trait]
pub trait DashboardUseCase: Send + Sync {
    /// Month boundaries and the chart window are taken relative to `now`.
    async fn execute(&self, now: DateTime<Utc>) -> Result<Dashboard, AdminError>;
}
