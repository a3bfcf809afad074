use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkReadTarget {
    All,
    Ids(Vec<Uuid>),
}

#[derive(Debug, Clone)]
pub struct MarkReadCommand {
    user_id: Uuid,
    target: MarkReadTarget,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkReadCommandError {
    #[error("Either notificationIds or markAllRead is required")]
    NothingToMark,
}

impl MarkReadCommand {
    /// `mark_all_read` wins when both are given.
    pub fn new(
        user_id: Uuid,
        notification_ids: Option<Vec<Uuid>>,
        mark_all_read: Option<bool>,
    ) -> Result<Self, MarkReadCommandError> {
        let target = match (mark_all_read, notification_ids) {
            (Some(true), _) => MarkReadTarget::All,
            (_, Some(ids)) => MarkReadTarget::Ids(ids),
            _ => return Err(MarkReadCommandError::NothingToMark),
        };

        Ok(Self { user_id, target })
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn target(&self) -> &MarkReadTarget {
        &self.target
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkReadResult {
    pub unread_count: u64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum MarkReadError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait MarkReadUseCase: Send + Sync {
    async fn execute(&self, command: MarkReadCommand) -> Result<MarkReadResult, MarkReadError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_all_takes_precedence() {
        let cmd = MarkReadCommand::new(Uuid::new_v4(), Some(vec![Uuid::new_v4()]), Some(true))
            .unwrap();
        assert_eq!(cmd.target(), &MarkReadTarget::All);
    }

    #[test]
    fn false_mark_all_without_ids_is_rejected() {
        assert_eq!(
            MarkReadCommand::new(Uuid::new_v4(), None, Some(false)).unwrap_err(),
            MarkReadCommandError::NothingToMark
        );
        assert!(MarkReadCommand::new(Uuid::new_v4(), None, None).is_err());
    }
}
