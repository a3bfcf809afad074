use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error};
use uuid::Uuid;

use crate::notification::application::domain::entities::{NotificationData, NotificationEvent};
use crate::notification::application::ports::incoming::use_cases::NotifyUserUseCase;
use crate::notification::application::ports::outgoing::{
    NewNotification, NotificationRepository, NotificationResult,
};
use crate::push::application::domain::entities::PushPayload;
use crate::push::application::ports::incoming::use_cases::SendPushUseCase;

/// Persists a notification, then mirrors it as a browser push.
pub struct NotificationWriter<R>
where
    R: NotificationRepository,
{
    notifications: R,
    push: Arc<dyn SendPushUseCase>,
}

impl<R> NotificationWriter<R>
where
    R: NotificationRepository,
{
    pub fn new(notifications: R, push: Arc<dyn SendPushUseCase>) -> Self {
        Self {
            notifications,
            push,
        }
    }
}

#[async_trait]
impl<R> NotifyUserUseCase for NotificationWriter<R>
where
    R: NotificationRepository,
{
    async fn notify(
        &self,
        user_id: Uuid,
        event: NotificationEvent,
        data: NotificationData,
    ) -> Option<NotificationResult> {
        let kind = event.kind();
        let created = self
            .notifications
            .create(NewNotification {
                user_id,
                kind,
                title: event.title(),
                message: event.message(),
                data,
            })
            .await;

        let notification = match created {
            Ok(n) => n,
            Err(e) => {
                error!(user_id = %user_id, kind = kind.as_str(), error = %e, "Error creating notification");
                return None;
            }
        };

        let payload = PushPayload::new(notification.title.clone(), notification.message.clone())
            .with_data(serde_json::to_value(data).unwrap_or_default());
        let report = self.push.send_to_user(user_id, payload).await;
        debug!(
            user_id = %user_id,
            sent = report.sent,
            failed = report.failed,
            "Notification pushed"
        );

        Some(notification)
    }
}
