use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::payment::application::domain::entities::{PaymentStatus, DEFAULT_CURRENCY};
use crate::payment::application::ports::outgoing::{
    CreatePaymentData, PaymentRepository, PaymentRepositoryError, PaymentResult,
};

use super::sea_orm_entity::payments::{ActiveModel, Column, Entity};

#[derive(Clone, Debug)]
pub struct PaymentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PaymentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_error(e: DbErr) -> PaymentRepositoryError {
    PaymentRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl PaymentRepository for PaymentRepositoryPostgres {
    async fn create(&self, data: CreatePaymentData) -> Result<PaymentResult, PaymentRepositoryError> {
        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            booking_id: Set(data.booking_id),
            customer_id: Set(data.customer_id),
            artisan_id: Set(data.artisan_id),
            amount: Set(data.amount),
            currency: Set(DEFAULT_CURRENCY.to_string()),
            method: Set(data.method.as_str().to_string()),
            status: Set(PaymentStatus::Pending.as_str().to_string()),
            transaction_id: Set(None),
            created_at: NotSet,
            updated_at: NotSet,
        };

        active.insert(&*self.db).await.map_err(db_error)?.to_result()
    }

    async fn list_for_booking(
        &self,
        booking_id: Uuid,
    ) -> Result<Vec<PaymentResult>, PaymentRepositoryError> {
        Entity::find()
            .filter(Column::BookingId.eq(booking_id))
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(db_error)?
            .iter()
            .map(|m| m.to_result())
            .collect()
    }
}
