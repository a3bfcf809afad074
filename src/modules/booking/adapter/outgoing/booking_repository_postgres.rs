use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::booking::application::domain::entities::BookingStatus;
use crate::booking::application::ports::outgoing::{
    BookingRepository, BookingRepositoryError, BookingResult, CreateBookingData,
};

use super::sea_orm_entity::bookings::{ActiveModel, Entity, Model};

#[derive(Clone, Debug)]
pub struct BookingRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BookingRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn load(&self, booking_id: Uuid) -> Result<Model, BookingRepositoryError> {
        Entity::find_by_id(booking_id)
            .one(&*self.db)
            .await
            .map_err(db_error)?
            .ok_or(BookingRepositoryError::NotFound)
    }
}

fn db_error(e: DbErr) -> BookingRepositoryError {
    BookingRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl BookingRepository for BookingRepositoryPostgres {
    async fn create(&self, data: CreateBookingData) -> Result<BookingResult, BookingRepositoryError> {
        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            customer_id: Set(data.customer_id),
            artisan_id: Set(data.artisan_id),
            service_category: Set(data.service.category),
            service_name: Set(data.service.name),
            service_price: Set(data.service.price),
            date: Set(data.date),
            time: Set(data.time),
            address: Set(data.address),
            description: Set(data.description),
            urgency: Set(data.urgency.as_str().to_string()),
            status: Set(BookingStatus::Pending.as_str().to_string()),
            total_price: Set(None),
            rating: Set(None),
            review: Set(None),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let model = active.insert(&*self.db).await.map_err(db_error)?;
        Ok(model.to_repository_result())
    }

    async fn find_by_id(
        &self,
        booking_id: Uuid,
    ) -> Result<Option<BookingResult>, BookingRepositoryError> {
        let model = Entity::find_by_id(booking_id)
            .one(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(model.map(|m| m.to_repository_result()))
    }

    async fn update_status(
        &self,
        booking_id: Uuid,
        status: BookingStatus,
    ) -> Result<BookingResult, BookingRepositoryError> {
        let mut active = self.load(booking_id).await?.into_active_model();
        active.status = Set(status.as_str().to_string());

        let model = active.update(&*self.db).await.map_err(db_error)?;
        Ok(model.to_repository_result())
    }

    async fn set_review(
        &self,
        booking_id: Uuid,
        rating: i32,
        review: Option<String>,
    ) -> Result<BookingResult, BookingRepositoryError> {
        let rating = i16::try_from(rating)
            .map_err(|e| BookingRepositoryError::DatabaseError(e.to_string()))?;

        let mut active = self.load(booking_id).await?.into_active_model();
        active.rating = Set(Some(rating));
        active.review = Set(review);

        let model = active.update(&*self.db).await.map_err(db_error)?;
        Ok(model.to_repository_result())
    }
}
