use async_trait::async_trait;

use super::PushSubscriptionRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PushTransportError {
    /// The push service reports the endpoint is gone (404/410).
    #[error("Subscription gone (status {0})")]
    Gone(u16),

    #[error("Push delivery failed: {0}")]
    Failed(String),
}

#[async_trait]
pub trait PushTransport: Send + Sync {
    async fn send(
        &self,
        subscription: &PushSubscriptionRecord,
        payload: &[u8],
    ) -> Result<(), PushTransportError>;
}
