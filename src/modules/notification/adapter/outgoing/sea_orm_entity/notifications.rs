use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::notification::application::domain::entities::{NotificationData, NotificationType};
use crate::notification::application::ports::outgoing::{
    NotificationRepositoryError, NotificationResult,
};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "notifications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    #[sea_orm(column_name = "type")]
    pub kind: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub data: Json,
    pub is_read: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_result(&self) -> Result<NotificationResult, NotificationRepositoryError> {
        let kind = NotificationType::parse(&self.kind).ok_or_else(|| {
            NotificationRepositoryError::DatabaseError(format!(
                "unknown notification type '{}'",
                self.kind
            ))
        })?;
        // Rows written by older clients may carry extra keys; unknown ones are dropped.
        let data: NotificationData = serde_json::from_value(self.data.clone()).unwrap_or_default();

        Ok(NotificationResult {
            id: self.id,
            user_id: self.user_id,
            kind,
            title: self.title.clone(),
            message: self.message.clone(),
            data,
            is_read: self.is_read,
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
