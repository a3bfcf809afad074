use async_trait::async_trait;
use tracing::{debug, error};

use crate::push::application::ports::incoming::use_cases::{
    UnsubscribeCommand, UnsubscribeError, UnsubscribeUseCase,
};
use crate::push::application::ports::outgoing::PushSubscriptionRepository;

pub struct UnsubscribeService<R>
where
    R: PushSubscriptionRepository,
{
    subscriptions: R,
}

impl<R> UnsubscribeService<R>
where
    R: PushSubscriptionRepository,
{
    pub fn new(subscriptions: R) -> Self {
        Self { subscriptions }
    }
}

#[async_trait]
impl<R> UnsubscribeUseCase for UnsubscribeService<R>
where
    R: PushSubscriptionRepository,
{
    async fn execute(&self, command: UnsubscribeCommand) -> Result<bool, UnsubscribeError> {
        let removed = self
            .subscriptions
            .delete_for_user(command.user_id(), command.endpoint())
            .await
            .map_err(|e| {
                error!(user_id = %command.user_id(), error = %e, "Failed to remove push subscription");
                UnsubscribeError::RepositoryError(e.to_string())
            })?;

        debug!(user_id = %command.user_id(), removed, "Push unsubscribe");
        Ok(removed > 0)
    }
}
