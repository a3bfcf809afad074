use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::booking::application::domain::entities::{ServiceSnapshot, Urgency};
use crate::booking::application::ports::outgoing::BookingResult;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub customer_id: Uuid,
    pub artisan_id: Uuid,
    pub service_category: String,
    pub service_name: String,
    pub service_price: String,
    pub date: Date,
    pub time: String,
    #[sea_orm(column_type = "Text")]
    pub address: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub urgency: String,
    pub status: String,
    #[sea_orm(column_type = "Double", nullable)]
    pub total_price: Option<f64>,
    pub rating: Option<i16>,
    #[sea_orm(column_type = "Text", nullable)]
    pub review: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_repository_result(&self) -> BookingResult {
        BookingResult {
            id: self.id,
            customer_id: self.customer_id,
            artisan_id: self.artisan_id,
            service: ServiceSnapshot {
                category: self.service_category.clone(),
                name: self.service_name.clone(),
                price: self.service_price.clone(),
            },
            date: self.date,
            time: self.time.clone(),
            address: self.address.clone(),
            description: self.description.clone(),
            urgency: Urgency::parse(&self.urgency).unwrap_or_default(),
            // The CHECK constraint keeps this column within the known set
            status: self.status.parse().unwrap_or_default(),
            total_price: self.total_price,
            rating: self.rating.map(i32::from),
            review: self.review.clone(),
            created_at: self.created_at.with_timezone(&chrono::Utc),
        }
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
