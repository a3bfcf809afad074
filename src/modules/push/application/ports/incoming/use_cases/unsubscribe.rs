use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct UnsubscribeCommand {
    user_id: Uuid,
    endpoint: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnsubscribeCommandError {
    #[error("Endpoint required")]
    MissingEndpoint,
}

impl UnsubscribeCommand {
    pub fn new(user_id: Uuid, endpoint: Option<String>) -> Result<Self, UnsubscribeCommandError> {
        let endpoint = endpoint
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .ok_or(UnsubscribeCommandError::MissingEndpoint)?;

        Ok(Self { user_id, endpoint })
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UnsubscribeError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UnsubscribeUseCase: Send + Sync {
    /// `true` when a subscription owned by the caller was removed.
    async fn execute(&self, command: UnsubscribeCommand) -> Result<bool, UnsubscribeError>;
}
