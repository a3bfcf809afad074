use async_trait::async_trait;
use uuid::Uuid;

use crate::push::application::domain::entities::is_url_safe_base64;

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct SubscribeCommand {
    user_id: Uuid,
    endpoint: String,
    p256dh: String,
    auth: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubscribeCommandError {
    #[error("Invalid subscription")]
    InvalidSubscription,
}

impl SubscribeCommand {
    pub fn new(
        user_id: Uuid,
        endpoint: Option<String>,
        p256dh: Option<String>,
        auth: Option<String>,
    ) -> Result<Self, SubscribeCommandError> {
        let non_empty = |v: Option<String>| {
            v.map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .ok_or(SubscribeCommandError::InvalidSubscription)
        };

        let endpoint = non_empty(endpoint)?;
        let p256dh = non_empty(p256dh)?;
        let auth = non_empty(auth)?;

        if !is_url_safe_base64(&p256dh) || !is_url_safe_base64(&auth) {
            return Err(SubscribeCommandError::InvalidSubscription);
        }

        Ok(Self {
            user_id,
            endpoint,
            p256dh,
            auth,
        })
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn p256dh(&self) -> &str {
        &self.p256dh
    }

    pub fn auth(&self) -> &str {
        &self.auth
    }
}

//
// ──────────────────────────────────────────────────────────
// Error & Use Case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubscribeError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SubscribeUseCase: Send + Sync {
    async fn execute(&self, command: SubscribeCommand) -> Result<(), SubscribeError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    const P256DH: &str =
        "BNcRdreALRFXTkOOUHK1EtK2wtaz5Ry4YfYCA_0QTpQtUbVlUls0VJXg7A8u-Ts1XbjhazAkj7I99e8QcYP7DkM";
    const AUTH: &str = "tBHItJI5svbpez7KI4CCXg";

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn accepts_browser_subscription() {
        let cmd = SubscribeCommand::new(
            Uuid::new_v4(),
            some("https://fcm.googleapis.com/fcm/send/abc"),
            some(P256DH),
            some(AUTH),
        )
        .unwrap();
        assert_eq!(cmd.auth(), AUTH);
    }

    #[test]
    fn rejects_missing_parts() {
        let user = Uuid::new_v4();
        assert!(SubscribeCommand::new(user, None, some(P256DH), some(AUTH)).is_err());
        assert!(SubscribeCommand::new(user, some("https://push"), None, some(AUTH)).is_err());
        assert!(SubscribeCommand::new(user, some("https://push"), some(P256DH), some(" ")).is_err());
    }

    #[test]
    fn rejects_keys_that_are_not_base64url() {
        let err = SubscribeCommand::new(
            Uuid::new_v4(),
            some("https://push"),
            some("key with spaces"),
            some(AUTH),
        )
        .unwrap_err();
        assert_eq!(err, SubscribeCommandError::InvalidSubscription);
    }
}
