use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QuerySelect, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::review::application::ports::outgoing::{
    CreateReviewData, ReviewRepository, ReviewRepositoryError, ReviewResult,
};

use super::sea_orm_entity::reviews::{ActiveModel, Column, Entity};

#[derive(Clone, Debug)]
pub struct ReviewRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ReviewRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> ReviewRepositoryError {
    let message = e.to_string();
    if message.contains("23505") || message.contains("duplicate key") {
        ReviewRepositoryError::AlreadyExists
    } else {
        ReviewRepositoryError::DatabaseError(message)
    }
}

#[async_trait]
impl ReviewRepository for ReviewRepositoryPostgres {
    async fn create(&self, data: CreateReviewData) -> Result<ReviewResult, ReviewRepositoryError> {
        // Ratings are validated upstream to 1..=5
        let rating = i16::try_from(data.rating)
            .map_err(|e| ReviewRepositoryError::DatabaseError(e.to_string()))?;

        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            booking_id: Set(data.booking_id),
            customer_id: Set(data.customer_id),
            artisan_id: Set(data.artisan_id),
            rating: Set(rating),
            comment: Set(data.comment),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let model = active.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(model.to_repository_result())
    }

    async fn find_by_booking(
        &self,
        booking_id: Uuid,
    ) -> Result<Option<ReviewResult>, ReviewRepositoryError> {
        let model = Entity::find()
            .filter(Column::BookingId.eq(booking_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(|m| m.to_repository_result()))
    }

    async fn ratings_for_artisan(
        &self,
        artisan_id: Uuid,
    ) -> Result<Vec<i32>, ReviewRepositoryError> {
        let ratings = Entity::find()
            .filter(Column::ArtisanId.eq(artisan_id))
            .select_only()
            .column(Column::Rating)
            .into_tuple::<i16>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(ratings.into_iter().map(i32::from).collect())
    }
}
