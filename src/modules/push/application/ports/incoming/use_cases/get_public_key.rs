use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPublicKeyError {
    #[error("Push notifications not configured")]
    NotConfigured,
}

#[async_trait]
pub trait GetPublicKeyUseCase: Send + Sync {
    async fn execute(&self) -> Result<String, GetPublicKeyError>;
}
