pub mod email_sender;
mod user_email_notifier;

pub use email_sender::EmailSender;
pub use user_email_notifier::{
    BookingEmail, BookingEmailKind, UserEmailNotificationError, UserEmailNotifier,
};
