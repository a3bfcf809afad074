use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::notification::application::ports::outgoing::NotificationResult;

pub const DEFAULT_NOTIFICATION_LIMIT: u64 = 20;
pub const MAX_NOTIFICATION_LIMIT: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListNotificationsQuery {
    user_id: Uuid,
    limit: u64,
    unread_only: bool,
}

impl ListNotificationsQuery {
    pub fn new(user_id: Uuid, limit: Option<u64>, unread_only: bool) -> Self {
        let limit = limit
            .filter(|l| *l > 0)
            .unwrap_or(DEFAULT_NOTIFICATION_LIMIT)
            .min(MAX_NOTIFICATION_LIMIT);

        Self {
            user_id,
            limit,
            unread_only,
        }
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn unread_only(&self) -> bool {
        self.unread_only
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationList {
    pub notifications: Vec<NotificationResult>,
    pub unread_count: u64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListNotificationsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListNotificationsUseCase: Send + Sync {
    async fn execute(
        &self,
        query: ListNotificationsQuery,
    ) -> Result<NotificationList, ListNotificationsError>;
}
