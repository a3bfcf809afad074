use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::payment::application::domain::entities::{PaymentMethod, PaymentStatus};
use crate::payment::application::ports::outgoing::{PaymentRepositoryError, PaymentResult};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub booking_id: Uuid,
    pub customer_id: Uuid,
    pub artisan_id: Uuid,
    #[sea_orm(column_type = "Double")]
    pub amount: f64,
    pub currency: String,
    pub method: String,
    pub status: String,
    pub transaction_id: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_result(&self) -> Result<PaymentResult, PaymentRepositoryError> {
        let method = PaymentMethod::parse(&self.method).ok_or_else(|| {
            PaymentRepositoryError::DatabaseError(format!("unknown payment method {}", self.method))
        })?;
        let status = PaymentStatus::parse(&self.status).ok_or_else(|| {
            PaymentRepositoryError::DatabaseError(format!("unknown payment status {}", self.status))
        })?;

        Ok(PaymentResult {
            id: self.id,
            booking_id: self.booking_id,
            customer_id: self.customer_id,
            artisan_id: self.artisan_id,
            amount: self.amount,
            currency: self.currency.clone(),
            method,
            status,
            transaction_id: self.transaction_id.clone(),
            created_at: self.created_at.with_timezone(&chrono::Utc),
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    #[allow(unused_mut)]
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        #[cfg(feature = "no_db_triggers")]
        {
            if !_insert {
                self.updated_at = sea_orm::ActiveValue::Set(chrono::Utc::now().into());
            }
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ActiveModelTrait, DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn update_stamps_updated_at_only_without_db_triggers() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let updated = <ActiveModel as ActiveModelTrait>::default()
            .before_save(&db, false)
            .await
            .unwrap();
        assert_eq!(updated.updated_at.is_set(), cfg!(feature = "no_db_triggers"));

        let inserted = <ActiveModel as ActiveModelTrait>::default()
            .before_save(&db, true)
            .await
            .unwrap();
        assert!(!inserted.updated_at.is_set());
    }
}
