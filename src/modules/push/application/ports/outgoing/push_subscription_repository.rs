use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct NewPushSubscription {
    pub user_id: Uuid,
    pub endpoint: String,
    pub p256dh: String,
    pub auth: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PushSubscriptionRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub endpoint: String,
    pub p256dh: String,
    pub auth: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PushSubscriptionRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PushSubscriptionRepository: Send + Sync {
    /// Inserts, or re-assigns the existing row with the same endpoint.
    async fn upsert(
        &self,
        subscription: NewPushSubscription,
    ) -> Result<PushSubscriptionRecord, PushSubscriptionRepositoryError>;

    async fn list_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<PushSubscriptionRecord>, PushSubscriptionRepositoryError>;

    async fn delete_by_id(&self, id: Uuid) -> Result<(), PushSubscriptionRepositoryError>;

    /// Returns the number of rows removed (0 or 1).
    async fn delete_for_user(
        &self,
        user_id: Uuid,
        endpoint: &str,
    ) -> Result<u64, PushSubscriptionRepositoryError>;
}
