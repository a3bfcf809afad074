use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::artisan::application::domain::entities::{
    ApprovalStatus, Availability, DEFAULT_RESPONSE_TIME,
};
use crate::artisan::application::ports::outgoing::{
    ArtisanRepository, ArtisanRepositoryError, ArtisanResult, CreateArtisanData,
    UpdateArtisanData,
};

use super::sea_orm_entity::artisans::{
    ActiveModel as ArtisanActiveModel, Column as ArtisanColumn, Entity as ArtisanEntity,
    Model as ArtisanModel,
};

#[derive(Clone, Debug)]
pub struct ArtisanRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ArtisanRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_model(&self, artisan_id: Uuid) -> Result<ArtisanModel, ArtisanRepositoryError> {
        ArtisanEntity::find_by_id(artisan_id)
            .one(&*self.db)
            .await
            .map_err(db_error)?
            .ok_or(ArtisanRepositoryError::ArtisanNotFound)
    }
}

fn db_error(e: DbErr) -> ArtisanRepositoryError {
    ArtisanRepositoryError::DatabaseError(e.to_string())
}

fn to_json<T: Serialize>(value: &T) -> Result<serde_json::Value, ArtisanRepositoryError> {
    serde_json::to_value(value).map_err(|e| ArtisanRepositoryError::DatabaseError(e.to_string()))
}

fn is_unique_violation(e: &DbErr) -> bool {
    let msg = e.to_string().to_lowercase();
    msg.contains("23505") || msg.contains("duplicate key")
}

#[async_trait]
impl ArtisanRepository for ArtisanRepositoryPostgres {
    async fn create_profile(
        &self,
        data: CreateArtisanData,
    ) -> Result<ArtisanResult, ArtisanRepositoryError> {
        let active = ArtisanActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.user_id),
            bio: Set(data.bio),
            experience: Set(data.experience),
            services: Set(to_json(&data.services)?),
            portfolio: Set(serde_json::json!([])),
            availability: Set(to_json(&Availability::default())?),
            rating: Set(0.0),
            total_reviews: Set(0),
            completed_jobs: Set(0),
            is_available: Set(true),
            response_time: Set(DEFAULT_RESPONSE_TIME.to_string()),
            approval_status: Set(ApprovalStatus::Pending.as_str().to_string()),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                ArtisanRepositoryError::ProfileAlreadyExists
            } else {
                db_error(e)
            }
        })?;

        Ok(inserted.to_repository_result())
    }

    async fn find_by_id(
        &self,
        artisan_id: Uuid,
    ) -> Result<Option<ArtisanResult>, ArtisanRepositoryError> {
        let model = ArtisanEntity::find_by_id(artisan_id)
            .one(&*self.db)
            .await
            .map_err(db_error)?;
        Ok(model.map(|m| m.to_repository_result()))
    }

    async fn find_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<ArtisanResult>, ArtisanRepositoryError> {
        let model = ArtisanEntity::find()
            .filter(ArtisanColumn::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(db_error)?;
        Ok(model.map(|m| m.to_repository_result()))
    }

    async fn update_profile(
        &self,
        artisan_id: Uuid,
        data: UpdateArtisanData,
    ) -> Result<ArtisanResult, ArtisanRepositoryError> {
        let mut active: ArtisanActiveModel = self.find_model(artisan_id).await?.into();

        if let Some(bio) = data.bio {
            active.bio = Set(bio);
        }
        if let Some(experience) = data.experience {
            active.experience = Set(experience);
        }
        if let Some(is_available) = data.is_available {
            active.is_available = Set(is_available);
        }
        if let Some(services) = data.services {
            active.services = Set(to_json(&services)?);
        }
        if let Some(availability) = data.availability {
            active.availability = Set(to_json(&availability)?);
        }
        if let Some(response_time) = data.response_time {
            active.response_time = Set(response_time);
        }
        if let Some(status) = data.approval_status {
            active.approval_status = Set(status.as_str().to_string());
        }

        let updated = active.update(&*self.db).await.map_err(db_error)?;
        Ok(updated.to_repository_result())
    }

    async fn increment_completed_jobs(
        &self,
        artisan_id: Uuid,
    ) -> Result<ArtisanResult, ArtisanRepositoryError> {
        let result = ArtisanEntity::update_many()
            .col_expr(
                ArtisanColumn::CompletedJobs,
                Expr::col(ArtisanColumn::CompletedJobs).add(1),
            )
            .filter(ArtisanColumn::Id.eq(artisan_id))
            .exec(&*self.db)
            .await
            .map_err(db_error)?;

        if result.rows_affected == 0 {
            return Err(ArtisanRepositoryError::ArtisanNotFound);
        }

        Ok(self.find_model(artisan_id).await?.to_repository_result())
    }

    async fn update_rating(
        &self,
        artisan_id: Uuid,
        rating: f64,
        total_reviews: i32,
    ) -> Result<ArtisanResult, ArtisanRepositoryError> {
        let mut active: ArtisanActiveModel = self.find_model(artisan_id).await?.into();
        active.rating = Set(rating);
        active.total_reviews = Set(total_reviews);

        let updated = active.update(&*self.db).await.map_err(db_error)?;
        Ok(updated.to_repository_result())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artisan::application::domain::entities::ServiceOffering;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn artisan_model(user_id: Uuid) -> ArtisanModel {
        let now = Utc::now();
        ArtisanModel {
            id: Uuid::new_v4(),
            user_id,
            bio: "Peintre en bâtiment".to_string(),
            experience: 6,
            services: serde_json::json!([
                { "category": "painting", "name": "Peinture", "price": "150-300 MAD/h" }
            ]),
            portfolio: serde_json::json!([]),
            availability: serde_json::to_value(Availability::default()).unwrap(),
            rating: 4.5,
            total_reviews: 2,
            completed_jobs: 3,
            is_available: true,
            response_time: "< 1 heure".to_string(),
            approval_status: "approved".to_string(),
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn create_profile_decodes_jsonb_columns() {
        // Arrange
        let model = artisan_model(Uuid::new_v4());
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model.clone()]])
            .into_connection();
        let repository = ArtisanRepositoryPostgres::new(Arc::new(db));

        // Act
        let artisan = repository
            .create_profile(CreateArtisanData {
                user_id: model.user_id,
                bio: model.bio.clone(),
                experience: 6,
                services: vec![ServiceOffering::from_category_key("painting")],
            })
            .await
            .unwrap();

        // Assert
        assert_eq!(artisan.services.len(), 1);
        assert_eq!(artisan.services[0].name, "Peinture");
        assert_eq!(artisan.availability.sunday, "Fermé");
        assert_eq!(artisan.approval_status, ApprovalStatus::Approved);
    }

    #[tokio::test]
    async fn second_profile_for_user_is_rejected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom(
                "duplicate key value violates unique constraint \"artisans_user_id_key\""
                    .to_string(),
            )])
            .into_connection();
        let repository = ArtisanRepositoryPostgres::new(Arc::new(db));

        let result = repository
            .create_profile(CreateArtisanData {
                user_id: Uuid::new_v4(),
                bio: String::new(),
                experience: 0,
                services: vec![],
            })
            .await;

        assert!(matches!(result, Err(ArtisanRepositoryError::ProfileAlreadyExists)));
    }

    #[tokio::test]
    async fn increment_completed_jobs_reloads_row() {
        let mut model = artisan_model(Uuid::new_v4());
        model.completed_jobs = 4;
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .append_query_results(vec![vec![model.clone()]])
            .into_connection();
        let repository = ArtisanRepositoryPostgres::new(Arc::new(db));

        let artisan = repository.increment_completed_jobs(model.id).await.unwrap();

        assert_eq!(artisan.completed_jobs, 4);
    }

    #[tokio::test]
    async fn increment_on_missing_artisan_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let repository = ArtisanRepositoryPostgres::new(Arc::new(db));

        let result = repository.increment_completed_jobs(Uuid::new_v4()).await;

        assert!(matches!(result, Err(ArtisanRepositoryError::ArtisanNotFound)));
    }

    #[tokio::test]
    async fn malformed_services_json_falls_back_to_empty() {
        let mut model = artisan_model(Uuid::new_v4());
        model.services = serde_json::json!({ "unexpected": true });
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model.clone()]])
            .into_connection();
        let repository = ArtisanRepositoryPostgres::new(Arc::new(db));

        let artisan = repository.find_by_id(model.id).await.unwrap().unwrap();

        assert!(artisan.services.is_empty());
    }
}
