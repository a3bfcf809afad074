use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

use crate::admin::application::ports::incoming::use_cases::{
    AdminError, AdminUserListQuery, ManageUsersUseCase,
};
use crate::admin::application::ports::outgoing::{AdminQuery, AdminStore, UserPatch};
use crate::auth::application::ports::outgoing::UserResult;
use crate::shared::api::Paginated;

pub struct AdminUsersService<S>
where
    S: AdminStore,
{
    store: S,
    query: Arc<dyn AdminQuery>,
}

impl<S> AdminUsersService<S>
where
    S: AdminStore,
{
    pub fn new(store: S, query: Arc<dyn AdminQuery>) -> Self {
        Self { store, query }
    }
}

fn repo_error(e: impl std::fmt::Display) -> AdminError {
    AdminError::RepositoryError(e.to_string())
}

#[async_trait]
impl<S> ManageUsersUseCase for AdminUsersService<S>
where
    S: AdminStore,
{
    async fn list(&self, query: AdminUserListQuery) -> Result<Paginated<UserResult>, AdminError> {
        let (users, total) = self
            .query
            .page_users(query.filter, query.page)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to list users for admin");
                repo_error(e)
            })?;

        Ok(Paginated::new(users, total, query.page))
    }

    async fn update(&self, user_id: Uuid, patch: UserPatch) -> Result<UserResult, AdminError> {
        let role_change = patch.role;

        let user = self
            .store
            .update_user(user_id, patch)
            .await
            .map_err(repo_error)?
            .ok_or(AdminError::NotFound)?;

        if let Some(role) = role_change {
            info!(%user_id, role = role.as_str(), "User role changed by admin");
        }
        Ok(user)
    }

    async fn delete(&self, user_id: Uuid) -> Result<(), AdminError> {
        if !self.store.delete_user(user_id).await.map_err(repo_error)? {
            return Err(AdminError::NotFound);
        }

        info!(%user_id, "User deleted by admin");
        Ok(())
    }
}
