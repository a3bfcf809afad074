use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::payment::application::domain::entities::{PaymentMethod, PaymentStatus};

#[derive(Debug, Clone)]
pub struct CreatePaymentData {
    pub booking_id: Uuid,
    pub customer_id: Uuid,
    pub artisan_id: Uuid,
    pub amount: f64,
    pub method: PaymentMethod,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResult {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub customer_id: Uuid,
    pub artisan_id: Uuid,
    pub amount: f64,
    pub currency: String,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub transaction_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PaymentRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Always stored as pending, in the default currency.
    async fn create(&self, data: CreatePaymentData) -> Result<PaymentResult, PaymentRepositoryError>;

    /// Newest first.
    async fn list_for_booking(
        &self,
        booking_id: Uuid,
    ) -> Result<Vec<PaymentResult>, PaymentRepositoryError>;
}
