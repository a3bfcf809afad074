use std::sync::Arc;

use crate::admin::application::ports::incoming::use_cases::{
    DashboardUseCase, ExportUseCase, ManageArtisansUseCase, ManageBookingsUseCase,
    ManageUsersUseCase,
};

#[derive(Clone)]
pub struct AdminUseCases {
    pub artisans: Arc<dyn ManageArtisansUseCase + Send + Sync>,
    pub bookings: Arc<dyn ManageBookingsUseCase + Send + Sync>,
    pub users: Arc<dyn ManageUsersUseCase + Send + Sync>,
    pub dashboard: Arc<dyn DashboardUseCase + Send + Sync>,
    pub export: Arc<dyn ExportUseCase + Send + Sync>,
}
