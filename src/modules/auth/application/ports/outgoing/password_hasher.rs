use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum HashError {
    #[error("could not hash password")]
    HashFailed,

    /// The stored hash is unreadable, not a wrong password.
    #[error("stored password hash is invalid")]
    VerifyFailed,

    #[error("hashing task did not complete")]
    TaskFailed,
}

/// Hashing runs off the async executor; implementations may block.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    /// `Ok(false)` on a wrong password.
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
