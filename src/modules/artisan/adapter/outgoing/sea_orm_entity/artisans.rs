use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::artisan::application::domain::entities::{
    ApprovalStatus, Availability, PortfolioItem, ServiceOffering,
};
use crate::artisan::application::ports::outgoing::ArtisanResult;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "artisans")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub bio: String,
    pub experience: i32,
    #[sea_orm(column_type = "JsonBinary")]
    pub services: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub portfolio: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub availability: Json,
    #[sea_orm(column_type = "Double")]
    pub rating: f64,
    pub total_reviews: i32,
    pub completed_jobs: i32,
    pub is_available: bool,
    pub response_time: String,
    pub approval_status: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    /// JSONB columns that fail to decode fall back to empty values.
    pub fn to_repository_result(&self) -> ArtisanResult {
        ArtisanResult {
            id: self.id,
            user_id: self.user_id,
            bio: self.bio.clone(),
            experience: self.experience,
            services: serde_json::from_value::<Vec<ServiceOffering>>(self.services.clone())
                .unwrap_or_default(),
            portfolio: serde_json::from_value::<Vec<PortfolioItem>>(self.portfolio.clone())
                .unwrap_or_default(),
            availability: serde_json::from_value::<Availability>(self.availability.clone())
                .unwrap_or_default(),
            rating: self.rating,
            total_reviews: self.total_reviews,
            completed_jobs: self.completed_jobs,
            is_available: self.is_available,
            response_time: self.response_time.clone(),
            approval_status: ApprovalStatus::parse(&self.approval_status).unwrap_or_default(),
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
