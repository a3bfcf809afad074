pub mod push_subscription_repository_postgres;
pub mod sea_orm_entity;
pub mod web_push_transport;

pub use push_subscription_repository_postgres::PushSubscriptionRepositoryPostgres;
pub use web_push_transport::{VapidConfig, WebPushTransport};
