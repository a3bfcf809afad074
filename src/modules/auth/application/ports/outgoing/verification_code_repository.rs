use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::VerificationKind;

#[derive(Debug, Clone)]
pub struct NewVerificationCode {
    pub email: String,
    pub code: String,
    pub kind: VerificationKind,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct VerificationCodeRecord {
    pub id: Uuid,
    pub email: String,
    pub code: String,
    pub kind: VerificationKind,
    pub expires_at: DateTime<Utc>,
    pub used: bool,
    pub created_at: DateTime<Utc>,
}

impl VerificationCodeRecord {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum VerificationCodeRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait VerificationCodeRepository: Send + Sync {
    /// Removes every code of `kind` for the email. Returns rows deleted.
    async fn delete_for_email(
        &self,
        email: &str,
        kind: VerificationKind,
    ) -> Result<u64, VerificationCodeRepositoryError>;

    async fn create(
        &self,
        data: NewVerificationCode,
    ) -> Result<VerificationCodeRecord, VerificationCodeRepositoryError>;

    async fn find_unused(
        &self,
        email: &str,
        code: &str,
        kind: VerificationKind,
    ) -> Result<Option<VerificationCodeRecord>, VerificationCodeRepositoryError>;

    /// Creation time of the most recent code for the email, if any.
    async fn latest_created_at(
        &self,
        email: &str,
        kind: VerificationKind,
    ) -> Result<Option<DateTime<Utc>>, VerificationCodeRepositoryError>;

    async fn mark_used(&self, id: Uuid) -> Result<(), VerificationCodeRepositoryError>;

    async fn delete_expired(
        &self,
        now: DateTime<Utc>,
    ) -> Result<u64, VerificationCodeRepositoryError>;
}
