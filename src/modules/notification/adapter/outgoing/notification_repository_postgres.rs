use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::notification::application::ports::outgoing::{
    NewNotification, NotificationRepository, NotificationRepositoryError, NotificationResult,
};

use super::sea_orm_entity::notifications::{ActiveModel, Column, Entity};

#[derive(Clone, Debug)]
pub struct NotificationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl NotificationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_error(e: DbErr) -> NotificationRepositoryError {
    NotificationRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl NotificationRepository for NotificationRepositoryPostgres {
    async fn create(
        &self,
        notification: NewNotification,
    ) -> Result<NotificationResult, NotificationRepositoryError> {
        let data = serde_json::to_value(notification.data)
            .map_err(|e| NotificationRepositoryError::DatabaseError(e.to_string()))?;

        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(notification.user_id),
            kind: Set(notification.kind.as_str().to_string()),
            title: Set(notification.title),
            message: Set(notification.message),
            data: Set(data),
            is_read: Set(false),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let model = active.insert(&*self.db).await.map_err(db_error)?;
        model.to_result()
    }

    async fn list_for_user(
        &self,
        user_id: Uuid,
        limit: u64,
        unread_only: bool,
    ) -> Result<Vec<NotificationResult>, NotificationRepositoryError> {
        let mut query = Entity::find().filter(Column::UserId.eq(user_id));
        if unread_only {
            query = query.filter(Column::IsRead.eq(false));
        }

        let models = query
            .order_by_desc(Column::CreatedAt)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(db_error)?;

        models.iter().map(|m| m.to_result()).collect()
    }

    async fn count_unread(&self, user_id: Uuid) -> Result<u64, NotificationRepositoryError> {
        Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::IsRead.eq(false))
            .count(&*self.db)
            .await
            .map_err(db_error)
    }

    async fn mark_read(
        &self,
        user_id: Uuid,
        ids: &[Uuid],
    ) -> Result<u64, NotificationRepositoryError> {
        let result = Entity::update_many()
            .col_expr(Column::IsRead, Expr::value(true))
            .filter(Column::UserId.eq(user_id))
            .filter(Column::Id.is_in(ids.iter().copied()))
            .exec(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(result.rows_affected)
    }

    async fn mark_all_read(&self, user_id: Uuid) -> Result<u64, NotificationRepositoryError> {
        let result = Entity::update_many()
            .col_expr(Column::IsRead, Expr::value(true))
            .filter(Column::UserId.eq(user_id))
            .filter(Column::IsRead.eq(false))
            .exec(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(result.rows_affected)
    }
}
