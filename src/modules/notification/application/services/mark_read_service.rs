use async_trait::async_trait;
use tracing::{error, info};

use crate::notification::application::ports::incoming::use_cases::{
    MarkReadCommand, MarkReadError, MarkReadResult, MarkReadTarget, MarkReadUseCase,
};
use crate::notification::application::ports::outgoing::NotificationRepository;

pub struct MarkReadService<R>
where
    R: NotificationRepository,
{
    notifications: R,
}

impl<R> MarkReadService<R>
where
    R: NotificationRepository,
{
    pub fn new(notifications: R) -> Self {
        Self { notifications }
    }
}

#[async_trait]
impl<R> MarkReadUseCase for MarkReadService<R>
where
    R: NotificationRepository,
{
    async fn execute(&self, command: MarkReadCommand) -> Result<MarkReadResult, MarkReadError> {
        let user_id = command.user_id();

        let updated = match command.target() {
            MarkReadTarget::All => self.notifications.mark_all_read(user_id).await,
            MarkReadTarget::Ids(ids) if ids.is_empty() => Ok(0),
            MarkReadTarget::Ids(ids) => self.notifications.mark_read(user_id, ids).await,
        }
        .map_err(|e| {
            error!(user_id = %user_id, error = %e, "Failed to mark notifications read");
            MarkReadError::RepositoryError(e.to_string())
        })?;

        info!(user_id = %user_id, updated, "Notifications marked read");

        let unread_count = self
            .notifications
            .count_unread(user_id)
            .await
            .map_err(|e| MarkReadError::RepositoryError(e.to_string()))?;

        Ok(MarkReadResult { unread_count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::application::domain::entities::{NotificationData, NotificationType};
    use crate::notification::application::ports::outgoing::{NewNotification, NotificationResult};
    use crate::tests::support::fakes::InMemoryNotifications;
    use uuid::Uuid;

    async fn seed(store: &InMemoryNotifications, user_id: Uuid) -> NotificationResult {
        store
            .create(NewNotification {
                user_id,
                kind: NotificationType::BookingNew,
                title: "Nouvelle réservation".to_string(),
                message: "…".to_string(),
                data: NotificationData::default(),
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn mark_all_read_zeroes_only_the_callers_count() {
        // Arrange
        let store = InMemoryNotifications::default();
        let me = Uuid::new_v4();
        let other = Uuid::new_v4();
        seed(&store, me).await;
        seed(&store, me).await;
        seed(&store, other).await;
        let service = MarkReadService::new(store.clone());

        // Act
        let result = service
            .execute(MarkReadCommand::new(me, None, Some(true)).unwrap())
            .await
            .unwrap();

        // Assert
        assert_eq!(result.unread_count, 0);
        assert_eq!(store.count_unread(other).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn ids_of_other_users_are_ignored() {
        let store = InMemoryNotifications::default();
        let me = Uuid::new_v4();
        let mine = seed(&store, me).await;
        let theirs = seed(&store, Uuid::new_v4()).await;
        let service = MarkReadService::new(store.clone());

        let result = service
            .execute(MarkReadCommand::new(me, Some(vec![mine.id, theirs.id]), None).unwrap())
            .await
            .unwrap();

        assert_eq!(result.unread_count, 0);
        assert_eq!(store.count_unread(theirs.user_id).await.unwrap(), 1);
    }
}
