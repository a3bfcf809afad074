use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    ChangePasswordUseCase, GetCurrentUserUseCase, LoginUserUseCase, RegisterUserUseCase,
    ResendCodeUseCase, UpdateProfileUseCase, VerifyEmailUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub register: Arc<dyn RegisterUserUseCase + Send + Sync>,
    pub login: Arc<dyn LoginUserUseCase + Send + Sync>,
    pub current_user: Arc<dyn GetCurrentUserUseCase + Send + Sync>,
    pub verify_email: Arc<dyn VerifyEmailUseCase + Send + Sync>,
    pub resend_code: Arc<dyn ResendCodeUseCase + Send + Sync>,
    pub update_profile: Arc<dyn UpdateProfileUseCase + Send + Sync>,
    pub change_password: Arc<dyn ChangePasswordUseCase + Send + Sync>,
}
