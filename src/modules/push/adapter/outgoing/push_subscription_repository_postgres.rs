use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::push::application::ports::outgoing::{
    NewPushSubscription, PushSubscriptionRecord, PushSubscriptionRepository,
    PushSubscriptionRepositoryError,
};

use super::sea_orm_entity::push_subscriptions::{ActiveModel, Column, Entity};

#[derive(Clone, Debug)]
pub struct PushSubscriptionRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PushSubscriptionRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_error(e: DbErr) -> PushSubscriptionRepositoryError {
    PushSubscriptionRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl PushSubscriptionRepository for PushSubscriptionRepositoryPostgres {
    async fn upsert(
        &self,
        subscription: NewPushSubscription,
    ) -> Result<PushSubscriptionRecord, PushSubscriptionRepositoryError> {
        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(subscription.user_id),
            endpoint: Set(subscription.endpoint),
            p256dh: Set(subscription.p256dh),
            auth: Set(subscription.auth),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let model = Entity::insert(active)
            .on_conflict(
                OnConflict::column(Column::Endpoint)
                    .update_columns([Column::UserId, Column::P256dh, Column::Auth])
                    .to_owned(),
            )
            .exec_with_returning(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(model.to_record())
    }

    async fn list_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<PushSubscriptionRecord>, PushSubscriptionRepositoryError> {
        let models = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(models.iter().map(|m| m.to_record()).collect())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), PushSubscriptionRepositoryError> {
        Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(db_error)?;
        Ok(())
    }

    async fn delete_for_user(
        &self,
        user_id: Uuid,
        endpoint: &str,
    ) -> Result<u64, PushSubscriptionRepositoryError> {
        let result = Entity::delete_many()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::Endpoint.eq(endpoint))
            .exec(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::push::adapter::outgoing::sea_orm_entity::push_subscriptions::Model;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Transaction};

    fn model(user_id: Uuid, endpoint: &str) -> Model {
        let now = Utc::now();
        Model {
            id: Uuid::new_v4(),
            user_id,
            endpoint: endpoint.to_string(),
            p256dh: "p256dh".to_string(),
            auth: "auth".to_string(),
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn upsert_returns_stored_row() {
        let user = Uuid::new_v4();
        let row = model(user, "https://push/a");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row.clone()]])
            .into_connection();
        let repo = PushSubscriptionRepositoryPostgres::new(Arc::new(db));

        let record = repo
            .upsert(NewPushSubscription {
                user_id: user,
                endpoint: "https://push/a".to_string(),
                p256dh: "p256dh".to_string(),
                auth: "auth".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(record.id, row.id);
        assert_eq!(record.user_id, user);
    }

    #[tokio::test]
    async fn delete_for_user_filters_on_owner_and_endpoint() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results(vec![MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                }])
                .into_connection(),
        );
        let repo = PushSubscriptionRepositoryPostgres::new(db.clone());
        let user = Uuid::new_v4();

        let removed = repo.delete_for_user(user, "https://push/a").await.unwrap();

        assert_eq!(removed, 1);
        drop(repo);
        let log = Arc::try_unwrap(db).unwrap().into_transaction_log();
        assert_eq!(
            log,
            vec![Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"DELETE FROM "push_subscriptions" WHERE "push_subscriptions"."user_id" = $1 AND "push_subscriptions"."endpoint" = $2"#,
                [user.into(), "https://push/a".into()],
            )]
        );
    }
}
