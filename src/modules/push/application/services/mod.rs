mod get_public_key_service;
mod push_dispatcher;
mod subscribe_service;
mod unsubscribe_service;

pub use get_public_key_service::GetPublicKeyService;
pub use push_dispatcher::PushDispatcher;
pub use subscribe_service::SubscribeService;
pub use unsubscribe_service::UnsubscribeService;
