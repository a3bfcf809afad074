mod list_notifications;
mod mark_notifications_read;

pub use list_notifications::*;
pub use mark_notifications_read::*;
