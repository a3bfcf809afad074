use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::booking::application::domain::entities::{BookingStatus, ServiceSnapshot, Urgency};

#[derive(Debug, Clone)]
pub struct CreateBookingData {
    pub customer_id: Uuid,
    pub artisan_id: Uuid,
    pub service: ServiceSnapshot,
    pub date: NaiveDate,
    pub time: String,
    pub address: String,
    pub description: String,
    pub urgency: Urgency,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResult {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub artisan_id: Uuid,
    pub service: ServiceSnapshot,
    pub date: NaiveDate,
    pub time: String,
    pub address: String,
    pub description: String,
    pub urgency: Urgency,
    pub status: BookingStatus,
    pub total_price: Option<f64>,
    pub rating: Option<i32>,
    pub review: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl BookingResult {
    pub fn is_customer(&self, user_id: Uuid) -> bool {
        self.customer_id == user_id
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum BookingRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Booking not found")]
    NotFound,
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create(&self, data: CreateBookingData) -> Result<BookingResult, BookingRepositoryError>;

    async fn find_by_id(
        &self,
        booking_id: Uuid,
    ) -> Result<Option<BookingResult>, BookingRepositoryError>;

    async fn update_status(
        &self,
        booking_id: Uuid,
        status: BookingStatus,
    ) -> Result<BookingResult, BookingRepositoryError>;

    /// Stores the customer's rating and optional comment on the booking itself.
    async fn set_review(
        &self,
        booking_id: Uuid,
        rating: i32,
        review: Option<String>,
    ) -> Result<BookingResult, BookingRepositoryError>;
}
