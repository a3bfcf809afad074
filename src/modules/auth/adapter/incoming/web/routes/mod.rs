mod change_password;
mod get_current_user;
mod login_user;
mod register_user;
mod resend_code;
mod update_profile;
mod user_dto;
mod verify_email;

pub use change_password::*;
pub use get_current_user::*;
pub use login_user::*;
pub use register_user::*;
pub use resend_code::*;
pub(crate) use update_profile::map_profile_command_error;
pub use update_profile::*;
pub use user_dto::UserResponse;
pub use verify_email::*;
