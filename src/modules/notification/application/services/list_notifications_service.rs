use async_trait::async_trait;
use tracing::error;

use crate::notification::application::ports::incoming::use_cases::{
    ListNotificationsError, ListNotificationsQuery, ListNotificationsUseCase, NotificationList,
};
use crate::notification::application::ports::outgoing::{
    NotificationRepository, NotificationRepositoryError,
};

pub struct ListNotificationsService<R>
where
    R: NotificationRepository,
{
    notifications: R,
}

impl<R> ListNotificationsService<R>
where
    R: NotificationRepository,
{
    pub fn new(notifications: R) -> Self {
        Self { notifications }
    }
}

#[async_trait]
impl<R> ListNotificationsUseCase for ListNotificationsService<R>
where
    R: NotificationRepository,
{
    async fn execute(
        &self,
        query: ListNotificationsQuery,
    ) -> Result<NotificationList, ListNotificationsError> {
        let to_error = |e: NotificationRepositoryError| {
            error!(user_id = %query.user_id(), error = %e, "Failed to load notifications");
            ListNotificationsError::RepositoryError(e.to_string())
        };

        let notifications = self
            .notifications
            .list_for_user(query.user_id(), query.limit(), query.unread_only())
            .await
            .map_err(to_error)?;
        let unread_count = self
            .notifications
            .count_unread(query.user_id())
            .await
            .map_err(to_error)?;

        Ok(NotificationList {
            notifications,
            unread_count,
        })
    }
}
