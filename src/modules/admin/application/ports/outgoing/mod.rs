mod admin_query;
mod admin_store;

pub use admin_query::{
    AdminArtisanFilter, AdminArtisanRow, AdminBookingRow, AdminQuery, AdminUserFilter,
    DashboardCounts,
};
pub use admin_store::{AdminStore, BookingPatch, UserPatch};

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}
