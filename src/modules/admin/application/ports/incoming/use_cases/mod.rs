mod admin_error;
mod dashboard;
mod export;
mod manage_artisans;
mod manage_bookings;
mod manage_users;

pub use admin_error::{AdminError, AdminInputError};
pub use dashboard::{Dashboard, DashboardUseCase, RECENT_ITEMS};
pub use export::{
    parse_export_kind, ArtisanExportRow, BookingExportRow, ExportData, ExportUseCase,
    UserExportRow, NOT_AVAILABLE,
};
pub use manage_artisans::{AdminArtisanListQuery, ArtisanPatchInput, ManageArtisansUseCase};
pub use manage_bookings::{AdminBookingListQuery, BookingPatchInput, ManageBookingsUseCase};
pub use manage_users::{AdminUserListQuery, ManageUsersUseCase, UserPatchInput};
