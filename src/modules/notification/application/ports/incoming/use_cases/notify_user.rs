use async_trait::async_trait;
use uuid::Uuid;

use crate::notification::application::domain::entities::{NotificationData, NotificationEvent};
use crate::notification::application::ports::outgoing::NotificationResult;

/// Fire-and-forget: failures are logged by the implementation and reported as `None`.
#[async_trait]
pub trait NotifyUserUseCase: Send + Sync {
    async fn notify(
        &self,
        user_id: Uuid,
        event: NotificationEvent,
        data: NotificationData,
    ) -> Option<NotificationResult>;
}
