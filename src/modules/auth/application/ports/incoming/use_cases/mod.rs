mod change_password;
mod get_current_user;
mod login_user;
mod register_user;
mod resend_code;
mod update_profile;
mod verify_email;

pub use change_password::{
    ChangePasswordCommand, ChangePasswordCommandError, ChangePasswordError, ChangePasswordUseCase,
};
pub use get_current_user::{CurrentUserResult, GetCurrentUserError, GetCurrentUserUseCase};
pub use login_user::{LoginCommand, LoginCommandError, LoginError, LoginResult, LoginUserUseCase};
pub use register_user::{
    RegisterUserCommand, RegisterUserCommandError, RegisterUserError, RegisterUserResult,
    RegisterUserUseCase, ServiceSelection,
};
pub use resend_code::{ResendCodeCommand, ResendCodeCommandError, ResendCodeError, ResendCodeUseCase};
pub use update_profile::{
    UpdateProfileCommand, UpdateProfileCommandError, UpdateProfileError, UpdateProfileUseCase,
};
pub use verify_email::{
    VerifyEmailCommand, VerifyEmailCommandError, VerifyEmailError, VerifyEmailUseCase,
};
