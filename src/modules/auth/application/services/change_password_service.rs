use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::application::ports::{
    incoming::use_cases::{ChangePasswordCommand, ChangePasswordError, ChangePasswordUseCase},
    outgoing::{PasswordHasher, UserRepository, UserRepositoryError},
};

pub struct ChangePasswordService<R>
where
    R: UserRepository,
{
    users: R,
    hasher: Arc<dyn PasswordHasher>,
}

impl<R> ChangePasswordService<R>
where
    R: UserRepository,
{
    pub fn new(users: R, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }
}

#[async_trait]
impl<R> ChangePasswordUseCase for ChangePasswordService<R>
where
    R: UserRepository,
{
    async fn execute(&self, command: ChangePasswordCommand) -> Result<(), ChangePasswordError> {
        let credentials = self
            .users
            .find_credentials_by_id(command.user_id())
            .await
            .map_err(|e| ChangePasswordError::RepositoryError(e.to_string()))?
            .ok_or(ChangePasswordError::UserNotFound)?;

        let valid = self
            .hasher
            .verify_password(command.current_password(), &credentials.password_hash)
            .await
            .map_err(|e| ChangePasswordError::HashingFailed(e.to_string()))?;
        if !valid {
            warn!(user_id = %command.user_id(), "Password change with wrong current password");
            return Err(ChangePasswordError::InvalidPassword);
        }

        let new_hash = self
            .hasher
            .hash_password(command.new_password())
            .await
            .map_err(|e| ChangePasswordError::HashingFailed(e.to_string()))?;

        self.users
            .update_password(command.user_id(), new_hash)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => ChangePasswordError::UserNotFound,
                other => ChangePasswordError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %command.user_id(), "Password changed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::Role;
    use crate::tests::support::fakes::{sample_user, InMemoryUserRepository, PlainTextHasher};

    fn setup() -> (InMemoryUserRepository, uuid::Uuid) {
        let users = InMemoryUserRepository::default();
        let user = sample_user("samir@example.ma", Role::Artisan, true);
        users.insert(user.clone(), "hashed:oldpass".to_string());
        (users, user.id)
    }

    #[tokio::test]
    async fn changes_password_when_current_matches() {
        let (users, id) = setup();
        let service = ChangePasswordService::new(users.clone(), Arc::new(PlainTextHasher));

        let command =
            ChangePasswordCommand::new(id, Some("oldpass".into()), Some("newpass1".into()))
                .unwrap();
        service.execute(command).await.unwrap();

        assert_eq!(
            users.password_hash("samir@example.ma").as_deref(),
            Some("hashed:newpass1")
        );
    }

    #[tokio::test]
    async fn wrong_current_password_is_rejected() {
        let (users, id) = setup();
        let service = ChangePasswordService::new(users.clone(), Arc::new(PlainTextHasher));

        let command =
            ChangePasswordCommand::new(id, Some("guess".into()), Some("newpass1".into())).unwrap();
        let result = service.execute(command).await;

        assert!(matches!(result, Err(ChangePasswordError::InvalidPassword)));
        assert_eq!(
            users.password_hash("samir@example.ma").as_deref(),
            Some("hashed:oldpass")
        );
    }
}
