mod list_notifications;
mod mark_read;
mod notify_user;

pub use list_notifications::{
    ListNotificationsError, ListNotificationsQuery, ListNotificationsUseCase, NotificationList,
    DEFAULT_NOTIFICATION_LIMIT, MAX_NOTIFICATION_LIMIT,
};
pub use mark_read::{
    MarkReadCommand, MarkReadCommandError, MarkReadError, MarkReadResult, MarkReadTarget,
    MarkReadUseCase,
};
pub use notify_user::NotifyUserUseCase;
