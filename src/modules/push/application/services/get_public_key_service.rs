use async_trait::async_trait;

use crate::push::application::ports::incoming::use_cases::{
    GetPublicKeyError, GetPublicKeyUseCase,
};

pub struct GetPublicKeyService {
    public_key: Option<String>,
}

impl GetPublicKeyService {
    pub fn new(public_key: Option<String>) -> Self {
        Self {
            public_key: public_key.filter(|k| !k.trim().is_empty()),
        }
    }
}

#[async_trait]
impl GetPublicKeyUseCase for GetPublicKeyService {
    async fn execute(&self) -> Result<String, GetPublicKeyError> {
        self.public_key
            .clone()
            .ok_or(GetPublicKeyError::NotConfigured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn blank_key_counts_as_not_configured() {
        let service = GetPublicKeyService::new(Some("  ".to_string()));
        assert!(matches!(
            service.execute().await,
            Err(GetPublicKeyError::NotConfigured)
        ));
    }

    #[tokio::test]
    async fn returns_configured_key() {
        let service = GetPublicKeyService::new(Some("BPublicKey".to_string()));
        assert_eq!(service.execute().await.unwrap(), "BPublicKey");
    }
}
