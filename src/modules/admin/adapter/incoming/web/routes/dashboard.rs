use actix_web::{get, web, Responder};
use chrono::Utc;
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::admin::application::domain::entities::ChartData;
use crate::admin::application::ports::incoming::use_cases::Dashboard;
use crate::admin::application::ports::outgoing::DashboardCounts;
use crate::auth::application::ports::outgoing::UserResult;
use crate::booking::application::ports::outgoing::BookingView;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboardResponse {
    #[schema(value_type = Object)]
    pub stats: DashboardCounts,
    #[schema(value_type = Vec<Object>)]
    pub recent_bookings: Vec<BookingView>,
    #[schema(value_type = Vec<Object>)]
    pub recent_users: Vec<UserResult>,
    #[schema(value_type = Object)]
    pub chart_data: ChartData,
}

impl From<Dashboard> for AdminDashboardResponse {
    fn from(d: Dashboard) -> Self {
        Self {
            stats: d.stats,
            recent_bookings: d.recent_bookings,
            recent_users: d.recent_users,
            chart_data: d.chart_data,
        }
    }
}

/// Platform totals, latest activity and the twelve-month chart
#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Dashboard", body = inline(SuccessResponse<AdminDashboardResponse>)),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
    )
)]
#[get("/api/admin/dashboard")]
pub async fn admin_dashboard_handler(admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.admin.dashboard.execute(Utc::now()).await {
        Ok(dashboard) => ApiResponse::success(AdminDashboardResponse::from(dashboard)),
        Err(e) => {
            error!(admin_id = %admin.user_id, error = %e, "Failed to load dashboard");
            ApiResponse::internal_error()
        }
    }
}
