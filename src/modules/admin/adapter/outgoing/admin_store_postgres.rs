use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    QueryFilter, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::admin::application::ports::outgoing::{
    AdminRepositoryError, AdminStore, BookingPatch, UserPatch,
};
use crate::artisan::adapter::outgoing::sea_orm_entity::artisans;
use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::auth::application::ports::outgoing::UserResult;
use crate::booking::adapter::outgoing::sea_orm_entity::bookings;
use crate::booking::application::ports::outgoing::BookingResult;

/// Dependent rows (bookings, reviews, payments, notifications) go with
/// their parent through `ON DELETE CASCADE`.
#[derive(Clone)]
pub struct AdminStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl AdminStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> AdminRepositoryError {
    AdminRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl AdminStore for AdminStorePostgres {
    async fn delete_artisan(&self, artisan_id: Uuid) -> Result<bool, AdminRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let Some(artisan) = artisans::Entity::find_by_id(artisan_id)
            .one(&txn)
            .await
            .map_err(map_db_err)?
        else {
            txn.rollback().await.map_err(map_db_err)?;
            return Ok(false);
        };

        artisans::Entity::delete_by_id(artisan.id)
            .exec(&txn)
            .await
            .map_err(map_db_err)?;
        users::Entity::delete_by_id(artisan.user_id)
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;
        Ok(true)
    }

    async fn update_booking(
        &self,
        booking_id: Uuid,
        patch: BookingPatch,
    ) -> Result<Option<BookingResult>, AdminRepositoryError> {
        let Some(model) = bookings::Entity::find_by_id(booking_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let mut active = model.into_active_model();
        if let Some(status) = patch.status {
            active.status = Set(status.as_str().to_string());
        }
        if let Some(price) = patch.total_price {
            active.total_price = Set(Some(price));
        }
        if let Some(date) = patch.date {
            active.date = Set(date);
        }
        if let Some(time) = patch.time {
            active.time = Set(time);
        }
        if let Some(address) = patch.address {
            active.address = Set(address);
        }

        let updated = active.update(&*self.db).await.map_err(map_db_err)?;
        Ok(Some(updated.to_repository_result()))
    }

    async fn delete_booking(&self, booking_id: Uuid) -> Result<bool, AdminRepositoryError> {
        let result = bookings::Entity::delete_by_id(booking_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected > 0)
    }

    async fn update_user(
        &self,
        user_id: Uuid,
        patch: UserPatch,
    ) -> Result<Option<UserResult>, AdminRepositoryError> {
        let Some(model) = users::Entity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let mut active = model.into_active_model();
        if let Some(full_name) = patch.full_name {
            active.full_name = Set(full_name);
        }
        if let Some(phone) = patch.phone {
            active.phone = Set(Some(phone));
        }
        if let Some(city) = patch.city {
            active.city = Set(Some(city));
        }
        if let Some(role) = patch.role {
            active.role = Set(role.as_str().to_string());
        }
        if let Some(verified) = patch.is_verified {
            active.is_verified = Set(verified);
        }

        let updated = active.update(&*self.db).await.map_err(map_db_err)?;
        Ok(Some(updated.to_repository_result()))
    }

    async fn delete_user(&self, user_id: Uuid) -> Result<bool, AdminRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        artisans::Entity::delete_many()
            .filter(artisans::Column::UserId.eq(user_id))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        let result = users::Entity::delete_by_id(user_id)
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;
        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::Role;
    use crate::booking::application::domain::entities::BookingStatus;
    use chrono::{NaiveDate, Utc};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn deleted(rows: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected: rows,
        }
    }

    fn user_model() -> users::Model {
        let now = Utc::now();
        users::Model {
            id: Uuid::new_v4(),
            full_name: "Said Ouali".to_string(),
            email: "said@example.ma".to_string(),
            password_hash: "hash".to_string(),
            phone: None,
            city: None,
            role: "customer".to_string(),
            avatar: None,
            is_verified: false,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    fn booking_model() -> bookings::Model {
        let now = Utc::now();
        bookings::Model {
            id: Uuid::new_v4(),
            customer_id: Uuid::new_v4(),
            artisan_id: Uuid::new_v4(),
            service_category: "plumbing".to_string(),
            service_name: "Plomberie".to_string(),
            service_price: "150-300 MAD/h".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 11, 2).unwrap(),
            time: "14:00".to_string(),
            address: "Maarif, Casablanca".to_string(),
            description: String::new(),
            urgency: "normal".to_string(),
            status: "completed".to_string(),
            total_price: Some(300.0),
            rating: None,
            review: None,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn delete_artisan_of_unknown_id_reports_false() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<artisans::Model>::new()])
            .into_connection();

        let removed = AdminStorePostgres::new(Arc::new(db))
            .delete_artisan(Uuid::new_v4())
            .await
            .unwrap();

        assert!(!removed);
    }

    #[tokio::test]
    async fn delete_booking_uses_rows_affected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([deleted(1), deleted(0)])
            .into_connection();
        let store = AdminStorePostgres::new(Arc::new(db));

        assert!(store.delete_booking(Uuid::new_v4()).await.unwrap());
        assert!(!store.delete_booking(Uuid::new_v4()).await.unwrap());
    }

    #[tokio::test]
    async fn delete_user_removes_profile_then_account() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([deleted(1), deleted(1)])
            .into_connection();

        let removed = AdminStorePostgres::new(Arc::new(db))
            .delete_user(Uuid::new_v4())
            .await
            .unwrap();

        assert!(removed);
    }

    #[tokio::test]
    async fn update_booking_overwrites_status() {
        let row = booking_model();
        let mut reopened = row.clone();
        reopened.status = "pending".to_string();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row.clone()]])
            .append_query_results(vec![vec![reopened]])
            .into_connection();

        let booking = AdminStorePostgres::new(Arc::new(db))
            .update_booking(
                row.id,
                BookingPatch {
                    status: Some(BookingStatus::Pending),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(booking.status, BookingStatus::Pending);
    }

    #[tokio::test]
    async fn update_user_of_unknown_id_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<users::Model>::new()])
            .into_connection();

        let user = AdminStorePostgres::new(Arc::new(db))
            .update_user(Uuid::new_v4(), UserPatch::default())
            .await
            .unwrap();

        assert!(user.is_none());
    }

    #[tokio::test]
    async fn update_user_promotes_role() {
        let row = user_model();
        let mut promoted = row.clone();
        promoted.role = "artisan".to_string();
        promoted.is_verified = true;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row.clone()]])
            .append_query_results(vec![vec![promoted]])
            .into_connection();

        let user = AdminStorePostgres::new(Arc::new(db))
            .update_user(
                row.id,
                UserPatch {
                    role: Some(Role::Artisan),
                    is_verified: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(user.role, Role::Artisan);
        assert!(user.is_verified);
    }
}
