use async_trait::async_trait;
use tracing::error;

use crate::admin::application::domain::entities::{
    booking_status_label, french_date, yes_no, ExportKind,
};
use crate::admin::application::ports::incoming::use_cases::{
    AdminError, ArtisanExportRow, BookingExportRow, ExportData, ExportUseCase, UserExportRow,
    NOT_AVAILABLE,
};
use crate::admin::application::ports::outgoing::{AdminArtisanRow, AdminBookingRow, AdminQuery};
use crate::auth::application::domain::entities::Role;
use crate::auth::application::ports::outgoing::UserResult;

pub struct ExportService<Q>
where
    Q: AdminQuery,
{
    query: Q,
}

impl<Q> ExportService<Q>
where
    Q: AdminQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

fn repo_error(e: impl std::fmt::Display) -> AdminError {
    error!(error = %e, "Failed to export admin data");
    AdminError::RepositoryError(e.to_string())
}

fn or_na(value: Option<&String>) -> String {
    value
        .filter(|v| !v.is_empty())
        .cloned()
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn user_row(user: UserResult) -> UserExportRow {
    UserExportRow {
        phone: or_na(user.phone.as_ref()),
        city: or_na(user.city.as_ref()),
        role: match user.role {
            Role::Artisan => "Artisan",
            Role::Admin => "Admin",
            Role::Customer => "Client",
        }
        .to_string(),
        verified: yes_no(user.is_verified).to_string(),
        registered_on: french_date(user.created_at.date_naive()),
        full_name: user.full_name,
        email: user.email,
    }
}

fn artisan_row(row: AdminArtisanRow) -> ArtisanExportRow {
    let user = row.user.as_ref();
    ArtisanExportRow {
        name: or_na(user.map(|u| &u.full_name)),
        email: or_na(user.map(|u| &u.email)),
        phone: or_na(user.and_then(|u| u.phone.as_ref())),
        city: or_na(user.and_then(|u| u.city.as_ref())),
        rating: format!("{:.1}", row.artisan.rating),
        reviews: row.artisan.total_reviews,
        completed_jobs: row.artisan.completed_jobs,
        available: yes_no(row.artisan.is_available).to_string(),
    }
}

fn booking_row(row: AdminBookingRow) -> BookingExportRow {
    let customer = row.customer.as_ref();
    let booking = row.booking;
    let service = if booking.service.name.is_empty() {
        booking.service.category.clone()
    } else {
        booking.service.name.clone()
    };

    BookingExportRow {
        customer: or_na(customer.map(|c| &c.full_name)),
        customer_email: or_na(customer.map(|c| &c.email)),
        artisan: or_na(row.artisan_name.as_ref()),
        service: or_na(Some(&service)),
        date: booking.date.format("%Y-%m-%d").to_string(),
        time: booking.time,
        address: booking.address,
        price: booking
            .total_price
            .map(|p| format!("{p} MAD"))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        status: booking_status_label(booking.status).to_string(),
        created_on: french_date(booking.created_at.date_naive()),
    }
}

#[async_trait]
impl<Q> ExportUseCase for ExportService<Q>
where
    Q: AdminQuery,
{
    async fn execute(&self, kind: ExportKind) -> Result<ExportData, AdminError> {
        let mut data = ExportData::default();

        if kind.includes(ExportKind::Users) {
            let users = self.query.users_for_export().await.map_err(repo_error)?;
            data.users = Some(users.into_iter().map(user_row).collect());
        }

        if kind.includes(ExportKind::Artisans) {
            let artisans = self.query.artisans_for_export().await.map_err(repo_error)?;
            data.artisans = Some(artisans.into_iter().map(artisan_row).collect());
        }

        if kind.includes(ExportKind::Bookings) {
            let bookings = self.query.bookings_for_export().await.map_err(repo_error)?;
            data.bookings = Some(bookings.into_iter().map(booking_row).collect());
        }

        Ok(data)
    }
}
