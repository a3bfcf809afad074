use std::sync::Arc;

use crate::push::application::ports::incoming::use_cases::{
    GetPublicKeyUseCase, SendPushUseCase, SubscribeUseCase, UnsubscribeUseCase,
};

#[derive(Clone)]
pub struct PushUseCases {
    pub public_key: Arc<dyn GetPublicKeyUseCase + Send + Sync>,
    pub subscribe: Arc<dyn SubscribeUseCase + Send + Sync>,
    pub unsubscribe: Arc<dyn UnsubscribeUseCase + Send + Sync>,
    pub send: Arc<dyn SendPushUseCase + Send + Sync>,
}
