use async_trait::async_trait;
use tracing::{error, info};

use crate::push::application::ports::incoming::use_cases::{
    SubscribeCommand, SubscribeError, SubscribeUseCase,
};
use crate::push::application::ports::outgoing::{NewPushSubscription, PushSubscriptionRepository};

pub struct SubscribeService<R>
where
    R: PushSubscriptionRepository,
{
    subscriptions: R,
}

impl<R> SubscribeService<R>
where
    R: PushSubscriptionRepository,
{
    pub fn new(subscriptions: R) -> Self {
        Self { subscriptions }
    }
}

#[async_trait]
impl<R> SubscribeUseCase for SubscribeService<R>
where
    R: PushSubscriptionRepository,
{
    async fn execute(&self, command: SubscribeCommand) -> Result<(), SubscribeError> {
        let record = self
            .subscriptions
            .upsert(NewPushSubscription {
                user_id: command.user_id(),
                endpoint: command.endpoint().to_string(),
                p256dh: command.p256dh().to_string(),
                auth: command.auth().to_string(),
            })
            .await
            .map_err(|e| {
                error!(user_id = %command.user_id(), error = %e, "Failed to save push subscription");
                SubscribeError::RepositoryError(e.to_string())
            })?;

        info!(user_id = %record.user_id, subscription_id = %record.id, "Push subscription saved");
        Ok(())
    }
}
