use async_trait::async_trait;
use uuid::Uuid;

use crate::push::application::domain::entities::{DeliveryReport, PushPayload};

/// Best-effort delivery. Failures are reported in the counts, never as errors.
#[async_trait]
pub trait SendPushUseCase: Send + Sync {
    async fn send_to_user(&self, user_id: Uuid, payload: PushPayload) -> DeliveryReport;

    async fn send_to_users(&self, user_ids: &[Uuid], payload: PushPayload) -> Vec<DeliveryReport>;
}
