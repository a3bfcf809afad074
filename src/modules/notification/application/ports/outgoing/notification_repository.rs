use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::notification::application::domain::entities::{NotificationData, NotificationType};

#[derive(Debug, Clone)]
pub struct NewNotification {
    pub user_id: Uuid,
    pub kind: NotificationType,
    pub title: String,
    pub message: String,
    pub data: NotificationData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResult {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub title: String,
    pub message: String,
    pub data: NotificationData,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum NotificationRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn create(
        &self,
        notification: NewNotification,
    ) -> Result<NotificationResult, NotificationRepositoryError>;

    /// Newest first.
    async fn list_for_user(
        &self,
        user_id: Uuid,
        limit: u64,
        unread_only: bool,
    ) -> Result<Vec<NotificationResult>, NotificationRepositoryError>;

    async fn count_unread(&self, user_id: Uuid) -> Result<u64, NotificationRepositoryError>;

    /// Ids that belong to another user are left untouched.
    async fn mark_read(
        &self,
        user_id: Uuid,
        ids: &[Uuid],
    ) -> Result<u64, NotificationRepositoryError>;

    async fn mark_all_read(&self, user_id: Uuid) -> Result<u64, NotificationRepositoryError>;
}
