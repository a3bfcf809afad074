use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::booking::application::domain::entities::BookingStatus;
use crate::shared::api::PageRequest;

use super::BookingResult;

/// Combined with AND. An empty filter matches every booking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookingListFilter {
    pub customer_id: Option<Uuid>,
    pub artisan_id: Option<Uuid>,
    pub status: Option<BookingStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingArtisanSummary {
    pub id: Uuid,
    pub name: String,
    pub city: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingCustomerSummary {
    pub id: Uuid,
    pub name: String,
    pub phone: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingView {
    #[serde(flatten)]
    pub booking: BookingResult,
    pub artisan: BookingArtisanSummary,
    pub customer: BookingCustomerSummary,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum BookingQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait BookingQuery: Send + Sync {
    /// Newest first.
    async fn list(&self, filter: BookingListFilter) -> Result<Vec<BookingView>, BookingQueryError>;

    /// One page, newest first, with the total number of matches.
    async fn page(
        &self,
        filter: BookingListFilter,
        page: PageRequest,
    ) -> Result<(Vec<BookingView>, u64), BookingQueryError>;
}
