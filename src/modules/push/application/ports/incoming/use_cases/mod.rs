mod get_public_key;
mod send_push;
mod subscribe;
mod unsubscribe;

pub use get_public_key::{GetPublicKeyError, GetPublicKeyUseCase};
pub use send_push::SendPushUseCase;
pub use subscribe::{SubscribeCommand, SubscribeCommandError, SubscribeError, SubscribeUseCase};
pub use unsubscribe::{
    UnsubscribeCommand, UnsubscribeCommandError, UnsubscribeError, UnsubscribeUseCase,
};
