mod change_password_service;
mod expired_code_sweeper;
mod get_current_user_service;
mod login_user_service;
mod register_user_service;
mod resend_code_service;
mod update_profile_service;
mod verification_code_issuer;
mod verify_email_service;

pub use change_password_service::ChangePasswordService;
pub use expired_code_sweeper::ExpiredCodeSweeper;
pub use get_current_user_service::GetCurrentUserService;
pub use login_user_service::LoginUserService;
pub use register_user_service::RegisterUserService;
pub use resend_code_service::ResendCodeService;
pub use update_profile_service::UpdateProfileService;
pub use verification_code_issuer::{IssueCodeError, VerificationCodeIssuer};
pub use verify_email_service::VerifyEmailService;
