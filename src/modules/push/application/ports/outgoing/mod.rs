mod push_subscription_repository;
mod push_transport;

pub use push_subscription_repository::{
    NewPushSubscription, PushSubscriptionRecord, PushSubscriptionRepository,
    PushSubscriptionRepositoryError,
};
pub use push_transport::{PushTransport, PushTransportError};
