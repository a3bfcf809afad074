use async_trait::async_trait;
use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::push::application::domain::entities::{DeliveryReport, PushPayload};
use crate::push::application::ports::incoming::use_cases::SendPushUseCase;
use crate::push::application::ports::outgoing::{
    PushSubscriptionRecord, PushSubscriptionRepository, PushTransport, PushTransportError,
};

/// Fans a payload out to every subscription of a user and prunes dead endpoints.
/// Without a transport (no VAPID keys) every call is a no-op.
pub struct PushDispatcher<R>
where
    R: PushSubscriptionRepository,
{
    subscriptions: R,
    transport: Option<Arc<dyn PushTransport>>,
}

impl<R> PushDispatcher<R>
where
    R: PushSubscriptionRepository,
{
    pub fn new(subscriptions: R, transport: Option<Arc<dyn PushTransport>>) -> Self {
        Self {
            subscriptions,
            transport,
        }
    }

    async fn deliver(
        &self,
        transport: &dyn PushTransport,
        subscription: &PushSubscriptionRecord,
        body: &[u8],
    ) -> bool {
        match transport.send(subscription, body).await {
            Ok(()) => true,
            Err(PushTransportError::Gone(status)) => {
                info!(
                    subscription_id = %subscription.id,
                    status,
                    "Removing expired push subscription"
                );
                if let Err(e) = self.subscriptions.delete_by_id(subscription.id).await {
                    error!(subscription_id = %subscription.id, error = %e, "Failed to prune subscription");
                }
                false
            }
            Err(e) => {
                warn!(subscription_id = %subscription.id, error = %e, "Push send failed");
                false
            }
        }
    }
}

#[async_trait]
impl<R> SendPushUseCase for PushDispatcher<R>
where
    R: PushSubscriptionRepository,
{
    async fn send_to_user(&self, user_id: Uuid, payload: PushPayload) -> DeliveryReport {
        let Some(transport) = self.transport.as_deref() else {
            debug!("VAPID keys not configured, skipping push notification");
            return DeliveryReport::empty();
        };

        let subscriptions = match self.subscriptions.list_for_user(user_id).await {
            Ok(subs) => subs,
            Err(e) => {
                error!(user_id = %user_id, error = %e, "Failed to load push subscriptions");
                return DeliveryReport {
                    success: false,
                    sent: 0,
                    failed: 0,
                };
            }
        };

        if subscriptions.is_empty() {
            return DeliveryReport::empty();
        }

        let body = match serde_json::to_vec(&payload) {
            Ok(body) => body,
            Err(e) => {
                error!(error = %e, "Failed to encode push payload");
                return DeliveryReport {
                    success: false,
                    sent: 0,
                    failed: 0,
                };
            }
        };

        let outcomes = join_all(
            subscriptions
                .iter()
                .map(|sub| self.deliver(transport, sub, &body)),
        )
        .await;

        let sent = outcomes.iter().filter(|ok| **ok).count();
        DeliveryReport {
            success: true,
            sent,
            failed: outcomes.len() - sent,
        }
    }

    async fn send_to_users(&self, user_ids: &[Uuid], payload: PushPayload) -> Vec<DeliveryReport> {
        join_all(
            user_ids
                .iter()
                .map(|id| self.send_to_user(*id, payload.clone())),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fakes::InMemoryPushSubscriptions;
    use crate::push::application::ports::outgoing::NewPushSubscription;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct ScriptedTransport {
        outcomes: HashMap<String, PushTransportError>,
        delivered: Mutex<Vec<(String, serde_json::Value)>>,
    }

    #[async_trait]
    impl PushTransport for ScriptedTransport {
        async fn send(
            &self,
            subscription: &PushSubscriptionRecord,
            payload: &[u8],
        ) -> Result<(), PushTransportError> {
            if let Some(err) = self.outcomes.get(&subscription.endpoint) {
                return Err(err.clone());
            }
            self.delivered.lock().unwrap().push((
                subscription.endpoint.clone(),
                serde_json::from_slice(payload).unwrap(),
            ));
            Ok(())
        }
    }

    async fn subscribe(store: &InMemoryPushSubscriptions, user_id: Uuid, endpoint: &str) {
        store
            .upsert(NewPushSubscription {
                user_id,
                endpoint: endpoint.to_string(),
                p256dh: "p256dh".to_string(),
                auth: "auth".to_string(),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn disabled_dispatcher_reports_nothing_sent() {
        let store = InMemoryPushSubscriptions::default();
        let user = Uuid::new_v4();
        subscribe(&store, user, "https://push/a").await;
        let dispatcher = PushDispatcher::new(store, None);

        let report = dispatcher
            .send_to_user(user, PushPayload::new("t", "b"))
            .await;

        assert_eq!(report, DeliveryReport { success: true, sent: 0, failed: 0 });
    }

    #[tokio::test]
    async fn sends_to_every_subscription_of_the_user() {
        // Arrange
        let store = InMemoryPushSubscriptions::default();
        let user = Uuid::new_v4();
        subscribe(&store, user, "https://push/phone").await;
        subscribe(&store, user, "https://push/laptop").await;
        subscribe(&store, Uuid::new_v4(), "https://push/someone-else").await;
        let transport = Arc::new(ScriptedTransport::default());
        let dispatcher = PushDispatcher::new(store, Some(transport.clone()));

        // Act
        let report = dispatcher
            .send_to_user(user, PushPayload::new("Travail terminé", "Merci"))
            .await;

        // Assert
        assert_eq!(report, DeliveryReport { success: true, sent: 2, failed: 0 });
        let delivered = transport.delivered.lock().unwrap();
        assert_eq!(delivered.len(), 2);
        assert_eq!(delivered[0].1["title"], "Travail terminé");
        assert_eq!(delivered[0].1["body"], "Merci");
    }

    #[tokio::test]
    async fn gone_endpoints_are_pruned_and_counted_as_failed() {
        let store = InMemoryPushSubscriptions::default();
        let user = Uuid::new_v4();
        subscribe(&store, user, "https://push/404").await;
        subscribe(&store, user, "https://push/410").await;
        subscribe(&store, user, "https://push/flaky").await;
        subscribe(&store, user, "https://push/ok").await;
        let transport = Arc::new(ScriptedTransport {
            outcomes: HashMap::from([
                ("https://push/404".to_string(), PushTransportError::Gone(404)),
                ("https://push/410".to_string(), PushTransportError::Gone(410)),
                (
                    "https://push/flaky".to_string(),
                    PushTransportError::Failed("timeout".to_string()),
                ),
            ]),
            ..Default::default()
        });
        let dispatcher = PushDispatcher::new(store.clone(), Some(transport));

        let report = dispatcher.send_to_user(user, PushPayload::new("t", "b")).await;

        assert_eq!(report, DeliveryReport { success: true, sent: 1, failed: 3 });
        let mut remaining: Vec<_> = store.all().into_iter().map(|s| s.endpoint).collect();
        remaining.sort();
        assert_eq!(remaining, vec!["https://push/flaky", "https://push/ok"]);
    }

    #[tokio::test]
    async fn send_to_users_reports_per_user() {
        let store = InMemoryPushSubscriptions::default();
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        subscribe(&store, first, "https://push/first").await;
        let dispatcher =
            PushDispatcher::new(store, Some(Arc::new(ScriptedTransport::default())));

        let reports = dispatcher
            .send_to_users(&[first, second], PushPayload::new("t", "b"))
            .await;

        assert_eq!(reports[0].sent, 1);
        assert_eq!(reports[1], DeliveryReport::empty());
    }
}
